use crate::{
    ast::{Action, Ast, Node, NodeId, Symbol},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::ternary::Ternary,
    },
};

impl Context {
    /// Evaluates a ternary expression node.
    ///
    /// `VAL-VAR` nodes are looked up in the store by their identifier; every
    /// other node is evaluated by action. Operands are evaluated Left before
    /// Right, which fixes the order in which unsure atoms are numbered.
    ///
    /// # Errors
    /// - `UnknownVariable` for a reference to a name that has no value.
    /// - `UnsureLimitExceeded` when a `U` would exceed the configured atom
    ///   budget.
    /// - `UnexpectedAction` for a node that is not part of an expression.
    /// - `DepthLimitExceeded` when nesting is deeper than allowed.
    ///
    /// # Example
    /// ```
    /// use lej::interpreter::{evaluator::core::Context, parser::parse_source};
    ///
    /// let tree = parse_source("def val x as (U and not U);").unwrap();
    /// let mut context = Context::new();
    /// context.walk(&tree.ast, tree.root).unwrap();
    ///
    /// // Two independent atoms: true only where the first holds and the
    /// // second does not.
    /// assert_eq!(context.store.get("x").unwrap().rows(), &[0, 0, 2, 0]);
    /// ```
    pub fn eval_val_expr(&mut self, ast: &Ast, id: NodeId, depth: usize) -> EvalResult<Ternary> {
        let node = &ast[id];
        self.check_depth(node, depth)?;

        if node.symbol == Symbol::ValVar {
            return self.eval_variable(ast, node);
        }

        match node.action {
            Action::BuildTrue => Ok(Ternary::truth()),
            Action::BuildFalse => Ok(Ternary::falsity()),
            Action::BuildUnsure => self.eval_unsure(node),
            Action::Left => self.eval_val_expr(ast, Self::left_of(node)?, depth + 1),
            Action::BuildNot => Ok(self.eval_val_expr(ast, Self::left_of(node)?, depth + 1)?
                                       .negate()),
            Action::BuildOr => {
                let left = self.eval_val_expr(ast, Self::left_of(node)?, depth + 1)?;
                let right = self.eval_val_expr(ast, Self::right_of(node)?, depth + 1)?;
                Ok(left.or(&right))
            },
            Action::BuildAnd => {
                let left = self.eval_val_expr(ast, Self::left_of(node)?, depth + 1)?;
                let right = self.eval_val_expr(ast, Self::right_of(node)?, depth + 1)?;
                Ok(left.and(&right))
            },
            _ => Err(Self::unexpected(node)),
        }
    }

    fn eval_variable(&self, ast: &Ast, node: &Node) -> EvalResult<Ternary> {
        let name = Self::variable_name(ast, node)?;
        self.store
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           span: node.span,
                                                           line: node.line, })
    }

    fn eval_unsure(&mut self, node: &Node) -> EvalResult<Ternary> {
        if self.store.unsure_count() >= self.options.max_unsure {
            return Err(RuntimeError::UnsureLimitExceeded { limit: self.options.max_unsure,
                                                           span:  node.span,
                                                           line:  node.line, });
        }
        Ok(self.store.fresh_unsure())
    }
}
