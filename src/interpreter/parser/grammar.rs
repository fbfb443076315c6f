use std::collections::HashMap;

use crate::ast::{Action, Symbol};

/// Longest frame any production may match.
pub const MAX_FRAME: usize = 5;

/// A side effect a production asks for when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReductionEvent {
    /// The reduced node declares a variable; every raw occurrence of its
    /// identifier must be bound before the reduction continues.
    BindIdentifier,
}

/// The right-hand side of a grammar rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    /// Symbol of the node the frame reduces to.
    pub result:   Symbol,
    /// Action of the node the frame reduces to.
    pub action:   Action,
    /// Frame positions of the Left and Right children. Equal positions mean
    /// the node only has a Left child.
    pub children: (usize, usize),
    /// Event raised after the reduced node has been spliced in.
    pub event:    Option<ReductionEvent>,
}

impl Production {
    #[must_use]
    pub const fn new(result: Symbol, action: Action, children: (usize, usize)) -> Self {
        Self { result,
               action,
               children,
               event: None }
    }

    #[must_use]
    pub const fn with_event(mut self, event: ReductionEvent) -> Self {
        self.event = Some(event);
        self
    }

    /// Whether the production builds a node with a Right child.
    #[must_use]
    pub const fn has_right(&self) -> bool {
        self.children.0 != self.children.1
    }
}

/// A static table from frames of one to [`MAX_FRAME`] symbols to the
/// production they reduce by.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<Vec<Symbol>, Production>,
}

impl Grammar {
    /// Creates a grammar without any rule.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a rule, replacing any previous rule for the same frame.
    ///
    /// # Panics
    /// If `frame` is empty, longer than [`MAX_FRAME`], or the production's
    /// child positions fall outside the frame. Grammars are built from
    /// literal tables, so this is a programming error.
    pub fn rule(&mut self, frame: &[Symbol], production: Production) -> &mut Self {
        assert!((1..=MAX_FRAME).contains(&frame.len()),
                "frame {frame:?} must hold between 1 and {MAX_FRAME} symbols");
        assert!(production.children.0 < frame.len() && production.children.1 < frame.len(),
                "children {:?} fall outside frame {frame:?}",
                production.children);

        self.rules.insert(frame.to_vec(), production);
        self
    }

    /// Finds the production whose frame is exactly `frame`.
    #[must_use]
    pub fn lookup(&self, frame: &[Symbol]) -> Option<&Production> {
        self.rules.get(frame)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The grammar of Lej's three-valued logic subset.
    ///
    /// # Example
    /// ```
    /// use lej::{
    ///     ast::{Action, Symbol},
    ///     interpreter::parser::grammar::Grammar,
    /// };
    ///
    /// let grammar = Grammar::lej();
    /// let not = grammar.lookup(&[Symbol::Not, Symbol::ValSubexpr]).unwrap();
    ///
    /// assert_eq!(not.result, Symbol::ValSubexpr);
    /// assert_eq!(not.action, Action::BuildNot);
    /// assert!(grammar.lookup(&[Symbol::Not, Symbol::Not]).is_none());
    /// ```
    #[must_use]
    pub fn lej() -> Self {
        use Symbol::{AsgnStmt, CodeBlock, Def, LParen, RParen, Semicolon, Val, ValExpr, ValSubexpr,
                     ValVar};

        let mut g = Self::empty();

        g.rule(&[CodeBlock, CodeBlock], Production::new(CodeBlock, Action::Both, (0, 1)))
         .rule(&[AsgnStmt], Production::new(CodeBlock, Action::Left, (0, 0)));

        g.rule(&[Def, ValVar, Symbol::As, ValExpr, Semicolon],
               Production::new(AsgnStmt, Action::Assign, (1, 3)))
         .rule(&[Def, ValVar, Symbol::As, ValVar, Semicolon],
               Production::new(AsgnStmt, Action::Assign, (1, 3)))
         .rule(&[Val, Symbol::Id],
               Production::new(ValVar, Action::BindIdentifier, (1, 1))
                   .with_event(ReductionEvent::BindIdentifier));

        g.rule(&[Symbol::Not, ValSubexpr], Production::new(ValSubexpr, Action::BuildNot, (1, 1)))
         .rule(&[Symbol::Not, ValVar], Production::new(ValSubexpr, Action::BuildNot, (1, 1)));

        for (op, action) in [(Symbol::Or, Action::BuildOr), (Symbol::And, Action::BuildAnd)] {
            for a in [ValSubexpr, ValVar] {
                for b in [ValSubexpr, ValVar] {
                    g.rule(&[LParen, a, op, b, RParen],
                           Production::new(ValSubexpr, action, (1, 3)))
                     .rule(&[a, op, b], Production::new(ValExpr, action, (0, 2)));
                }
            }
        }

        g.rule(&[LParen, ValVar, RParen], Production::new(ValSubexpr, Action::Left, (1, 1)))
         .rule(&[LParen, ValSubexpr, RParen], Production::new(ValSubexpr, Action::Left, (1, 1)))
         .rule(&[ValSubexpr], Production::new(ValExpr, Action::Left, (0, 0)));

        g
    }
}
