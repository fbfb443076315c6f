use log::debug;

use crate::{
    ast::{Action, Ast, NodeId, Symbol},
    interpreter::parser::{grammar::ReductionEvent, reducer::ReductionListener},
};

/// Binds raw identifiers to the variable a declaration just introduced.
///
/// When `VAL ID` reduces to a `VAL-VAR`, every `ID` terminal anywhere in the
/// live sequence with the same literal is wrapped in a `VAL-VAR` of its own.
/// Binding is program-wide and ignores scope. Because it happens during the
/// parse, later frames already see `VAL-VAR` where the name is used.
#[derive(Debug, Clone, Default)]
pub struct IdentifierResolver {
    bound: Vec<String>,
}

impl IdentifierResolver {
    #[must_use]
    pub const fn new() -> Self {
        Self { bound: Vec::new() }
    }

    /// Names bound so far, in declaration order.
    #[must_use]
    pub fn bound_names(&self) -> &[String] {
        &self.bound
    }

    /// Rewrites every occurrence of the identifier declared by `trigger`.
    ///
    /// Each wrapper takes the trigger's symbol and the located occurrence's
    /// span, line and scope. Nodes that do not match are left in place.
    /// Returns how many occurrences were rewritten.
    pub fn resolve(&mut self, trigger: NodeId, ast: &mut Ast, live: &mut [NodeId]) -> usize {
        let Some(name) = ast[trigger].left()
                                     .and_then(|id| ast[id].literal())
                                     .map(str::to_string)
        else {
            return 0;
        };
        let symbol = ast[trigger].symbol;

        let mut rewritten = 0;
        for slot in live.iter_mut() {
            let node = &ast[*slot];
            if node.symbol == Symbol::Id && node.literal() == Some(name.as_str()) {
                *slot = ast.push_nonterminal(symbol, Action::Left, *slot, None);
                rewritten += 1;
            }
        }

        debug!("bound '{name}' as {symbol}, {rewritten} occurrence(s) rewritten");
        self.bound.push(name);
        rewritten
    }
}

impl ReductionListener for IdentifierResolver {
    fn on_reduction(&mut self,
                    event: ReductionEvent,
                    reduced: NodeId,
                    ast: &mut Ast,
                    live: &mut Vec<NodeId>) {
        match event {
            ReductionEvent::BindIdentifier => {
                self.resolve(reduced, ast, live);
            },
        }
    }
}
