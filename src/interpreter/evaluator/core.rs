use log::info;

use crate::{
    ast::{Action, Ast, Node, NodeId, Symbol},
    error::RuntimeError,
    interpreter::evaluator::store::Store,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on how deeply the walker and the expression evaluator may
/// recurse.
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Default bound on the number of unsure atoms one run may instantiate. Each
/// atom doubles the size of the next one's table.
pub const DEFAULT_MAX_UNSURE: usize = 20;

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Deepest tree nesting evaluated before giving up.
    pub max_depth:  usize,
    /// Most unsure atoms a run may instantiate.
    pub max_unsure: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth:  DEFAULT_MAX_DEPTH,
               max_unsure: DEFAULT_MAX_UNSURE, }
    }
}

/// Stores the runtime evaluation context.
///
/// A `Context` owns the [`Store`] every assignment writes to. It is created
/// for a run, handed to the walker, and can be inspected or dropped by the
/// caller afterwards.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Variable bindings made so far.
    pub store:   Store,
    /// Limits applied during evaluation.
    pub options: Options,
}

impl Context {
    /// Creates a context with an empty store and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { store: Store::new(),
               options }
    }

    /// Walks the tree rooted at `root`, executing every assignment in it.
    ///
    /// Dispatch is by action only: `BOTH` walks Left then Right, `LEFT` and
    /// `RIGHT` walk one side, and `assign` evaluates its Right child and binds
    /// the value to the variable on its Left.
    ///
    /// # Errors
    /// - `UnexpectedAction` if a node with any other action is reached.
    /// - Any error raised while evaluating an assigned expression.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::{evaluator::core::Context, parser::parse_source};
    ///
    /// let tree = parse_source("def val x as not T;").unwrap();
    /// let mut context = Context::new();
    /// context.walk(&tree.ast, tree.root).unwrap();
    ///
    /// assert!(context.store.get("x").unwrap().is_false());
    /// ```
    pub fn walk(&mut self, ast: &Ast, root: NodeId) -> EvalResult<()> {
        self.walk_at(ast, root, 0)
    }

    fn walk_at(&mut self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<()> {
        let node = &ast[id];
        self.check_depth(node, depth)?;

        match node.action {
            Action::Both => self.walk_block(ast, node, depth),
            Action::Left => self.walk_at(ast, Self::left_of(node)?, depth + 1),
            Action::Right => self.walk_at(ast, Self::right_of(node)?, depth + 1),
            Action::Assign => self.assign_val(ast, node, depth),
            _ => Err(Self::unexpected(node)),
        }
    }

    /// Walks a chain of `BOTH` nodes in source order at a single depth.
    ///
    /// Statement sequences fold into a left-leaning spine as long as the
    /// program, so the spine is unrolled here instead of recursed into and
    /// only the statements themselves count towards the depth limit.
    fn walk_block(&mut self, ast: &Ast, node: &Node, depth: usize) -> EvalResult<()> {
        let mut later = vec![Self::right_of(node)?];
        let mut first = Self::left_of(node)?;
        while ast[first].action == Action::Both {
            later.push(Self::right_of(&ast[first])?);
            first = Self::left_of(&ast[first])?;
        }

        self.walk_at(ast, first, depth)?;
        for id in later.into_iter().rev() {
            self.walk_at(ast, id, depth)?;
        }
        Ok(())
    }

    fn assign_val(&mut self, ast: &Ast, node: &Node, depth: usize) -> EvalResult<()> {
        let target = &ast[Self::left_of(node)?];
        if target.symbol != Symbol::ValVar {
            return Err(RuntimeError::TypeMismatch { details: format!("cannot assign a val to {}",
                                                                     target.symbol),
                                                    span:    target.span,
                                                    line:    target.line, });
        }
        let name = Self::variable_name(ast, target)?;

        let value = self.eval_val_expr(ast, Self::right_of(node)?, depth + 1)?;
        info!("{name} assigned {value}");
        self.store.assign(name, value);
        Ok(())
    }

    /// The identifier a `VAL-VAR` node refers to.
    pub(in crate::interpreter::evaluator) fn variable_name<'a>(ast: &'a Ast,
                                                               var: &Node)
                                                               -> EvalResult<&'a str> {
        var.left()
           .and_then(|id| ast[id].literal())
           .ok_or_else(|| RuntimeError::TypeMismatch { details: format!("{} does not name a variable",
                                                                        var.symbol),
                                                       span:    var.span,
                                                       line:    var.line, })
    }

    pub(in crate::interpreter::evaluator) fn check_depth(&self,
                                                         node: &Node,
                                                         depth: usize)
                                                         -> EvalResult<()> {
        if depth > self.options.max_depth {
            return Err(RuntimeError::DepthLimitExceeded { limit: self.options.max_depth,
                                                          span:  node.span,
                                                          line:  node.line, });
        }
        Ok(())
    }

    pub(in crate::interpreter::evaluator) fn left_of(node: &Node) -> EvalResult<NodeId> {
        node.left().ok_or(RuntimeError::MissingChild { symbol: node.symbol,
                                                       side:   "left",
                                                       span:   node.span,
                                                       line:   node.line, })
    }

    pub(in crate::interpreter::evaluator) fn right_of(node: &Node) -> EvalResult<NodeId> {
        node.right().ok_or(RuntimeError::MissingChild { symbol: node.symbol,
                                                        side:   "right",
                                                        span:   node.span,
                                                        line:   node.line, })
    }

    pub(in crate::interpreter::evaluator) const fn unexpected(node: &Node) -> RuntimeError {
        RuntimeError::UnexpectedAction { symbol: node.symbol,
                                         action: node.action,
                                         span:   node.span,
                                         line:   node.line, }
    }
}
