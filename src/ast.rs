use std::{fmt, ops::Index};

use crate::util::span::Span;

/// A grammar symbol.
///
/// Terminals are produced by the lexer; nonterminals only ever appear as the
/// result of a reduction. `VAL-SUBEXPR` is both: the literals `T`, `U` and `F`
/// enter the live sequence as terminal `VAL-SUBEXPR` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `CODE-BLOCK`
    CodeBlock,
    /// `ASGN-STMT`
    AsgnStmt,
    /// `VAL-VAR`
    ValVar,
    /// `VAL-SUBEXPR`
    ValSubexpr,
    /// `VAL-EXPR`
    ValExpr,
    /// `DEF`
    Def,
    /// `AS`
    As,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,
    /// `VAL`
    Val,
    /// `ID`, a raw identifier that has not been bound yet.
    Id,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
}

impl Symbol {
    /// The symbol name as written in the grammar table.
    ///
    /// # Example
    /// ```
    /// use lej::ast::Symbol;
    ///
    /// assert_eq!(Symbol::ValSubexpr.name(), "VAL-SUBEXPR");
    /// assert_eq!(Symbol::Semicolon.name(), ";");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CodeBlock => "CODE-BLOCK",
            Self::AsgnStmt => "ASGN-STMT",
            Self::ValVar => "VAL-VAR",
            Self::ValSubexpr => "VAL-SUBEXPR",
            Self::ValExpr => "VAL-EXPR",
            Self::Def => "DEF",
            Self::As => "AS",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Val => "VAL",
            Self::Id => "ID",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The evaluation action attached to a node.
///
/// The walker and the expression evaluator dispatch on this tag alone. Plain
/// keyword and delimiter terminals carry [`Action::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    /// No behavior; structural leaf.
    #[default]
    None,
    /// Walk Left, then Right.
    Both,
    /// Walk Left only.
    Left,
    /// Walk Right only.
    Right,
    /// Evaluate Right and bind it under the variable on the Left.
    Assign,
    /// Declare a variable; the reducer raises a binding event for it.
    BindIdentifier,
    /// The literal `T`.
    BuildTrue,
    /// The literal `F`.
    BuildFalse,
    /// The literal `U`, instantiating a fresh unsure atom.
    BuildUnsure,
    /// Negation of the Left child.
    BuildNot,
    /// Disjunction of Left and Right.
    BuildOr,
    /// Conjunction of Left and Right.
    BuildAnd,
}

impl Action {
    /// A short tag used in diagnostics and tree dumps.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Both => "BOTH",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Assign => "assign",
            Self::BindIdentifier => "bind",
            Self::BuildTrue => "true",
            Self::BuildFalse => "false",
            Self::BuildUnsure => "unsure",
            Self::BuildNot => "not",
            Self::BuildOr => "or",
            Self::BuildAnd => "and",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The scope a nonterminal belongs to. Lej only has the program-wide scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    #[default]
    Global,
}

/// Index of a node inside an [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// The payload distinguishing leaves from composite nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf produced by the lexer.
    Terminal {
        /// The exact source text of the token.
        literal: String,
    },
    /// A node produced by a reduction.
    Nonterminal {
        /// Scope the node was reduced in.
        scope: Scope,
        /// Left child, if any.
        left:  Option<NodeId>,
        /// Right child, if any.
        right: Option<NodeId>,
    },
}

/// A single node of the syntax tree.
///
/// A nonterminal's span always covers its children's spans; a terminal's span
/// is the extent of its literal in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Grammar symbol of the node.
    pub symbol: Symbol,
    /// Byte range covered in the source.
    pub span:   Span,
    /// Line on which the node starts.
    pub line:   usize,
    /// Evaluation action.
    pub action: Action,
    /// Terminal or nonterminal payload.
    pub kind:   NodeKind,
}

impl Node {
    /// Builds a terminal node.
    ///
    /// # Example
    /// ```
    /// use lej::{
    ///     ast::{Action, Node, Symbol},
    ///     util::span::Span,
    /// };
    ///
    /// let node = Node::terminal(Symbol::Id, "x", Span::new(8, 9), 1, Action::None);
    /// assert!(node.is_terminal());
    /// assert_eq!(node.literal(), Some("x"));
    /// ```
    #[must_use]
    pub fn terminal(symbol: Symbol,
                    literal: impl Into<String>,
                    span: Span,
                    line: usize,
                    action: Action)
                    -> Self {
        Self { symbol,
               span,
               line,
               action,
               kind: NodeKind::Terminal { literal: literal.into() } }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.kind, NodeKind::Terminal { .. })
    }

    /// The literal text of a terminal; `None` for nonterminals.
    #[must_use]
    pub fn literal(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Terminal { literal } => Some(literal),
            NodeKind::Nonterminal { .. } => None,
        }
    }

    #[must_use]
    pub const fn left(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Nonterminal { left, .. } => left,
            NodeKind::Terminal { .. } => None,
        }
    }

    #[must_use]
    pub const fn right(&self) -> Option<NodeId> {
        match self.kind {
            NodeKind::Nonterminal { right, .. } => right,
            NodeKind::Terminal { .. } => None,
        }
    }

    /// Scope of a nonterminal. Terminals always sit in the global scope.
    #[must_use]
    pub const fn scope(&self) -> Scope {
        match self.kind {
            NodeKind::Nonterminal { scope, .. } => scope,
            NodeKind::Terminal { .. } => Scope::Global,
        }
    }
}

/// Arena holding every node created while lexing and reducing a program.
///
/// Nodes are never removed; a reduction pushes the new parent and the live
/// sequence stops referring to the children by id. Each child is referenced by
/// exactly one parent, so the reachable part of the arena is a tree.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Moves `node` into the arena and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Builds and stores a nonterminal over the given children.
    ///
    /// The span runs from the Left child's start to the end of the Right child
    /// (or of the Left child when there is no Right one). Line and scope are
    /// taken from the Left child.
    pub fn push_nonterminal(&mut self,
                            symbol: Symbol,
                            action: Action,
                            left: NodeId,
                            right: Option<NodeId>)
                            -> NodeId {
        let first = &self[left];
        let last = right.map_or(first, |r| &self[r]);
        let span = Span::new(first.span.start, last.span.end);
        let line = first.line;
        let scope = first.scope();

        self.push(Node { symbol,
                         span,
                         line,
                         action,
                         kind: NodeKind::Nonterminal { scope,
                                                       left: Some(left),
                                                       right } })
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes ever allocated, including ones no longer reachable
    /// from the live sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Joins the symbol names of `ids` with single spaces.
    ///
    /// This is the frame form used by the grammar table and by parse
    /// diagnostics.
    #[must_use]
    pub fn names(&self, ids: &[NodeId]) -> String {
        ids.iter()
           .map(|id| self[*id].symbol.name())
           .collect::<Vec<_>>()
           .join(" ")
    }

    /// Renders the subtree rooted at `root`, one node per line, children
    /// indented under their parent.
    ///
    /// The traversal keeps its own stack, so arbitrarily deep trees render
    /// without recursion.
    #[must_use]
    pub fn render(&self, root: NodeId) -> String {
        let mut out = String::new();
        let mut pending = vec![(root, 0)];

        while let Some((id, depth)) = pending.pop() {
            let node = &self[id];
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.symbol.name());
            if node.action != Action::None {
                out.push_str(&format!(" <{}>", node.action));
            }
            if let Some(literal) = node.literal() {
                out.push_str(&format!(" '{literal}'"));
            }
            out.push_str(&format!(" @{}\n", node.span));

            // Right first so Left is rendered first.
            for child in [node.right(), node.left()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }

        out
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// A fully reduced program: the arena and its single root.
#[derive(Debug, Clone)]
pub struct Tree {
    /// All nodes created during the parse.
    pub ast:  Ast,
    /// The node the live sequence collapsed to.
    pub root: NodeId,
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ast.render(self.root))
    }
}
