use log::{debug, trace};

use crate::{
    ast::{Ast, NodeId, Symbol},
    error::ParseError,
    interpreter::parser::{
        ParseResult,
        grammar::{Grammar, MAX_FRAME, Production, ReductionEvent},
    },
};

/// Receives the events productions raise while the reducer runs.
///
/// The listener is called right after the reduced node has been spliced into
/// the live sequence, before the next window is examined, so anything it
/// rewrites is what the rest of the parse sees.
pub trait ReductionListener {
    fn on_reduction(&mut self,
                    event: ReductionEvent,
                    reduced: NodeId,
                    ast: &mut Ast,
                    live: &mut Vec<NodeId>);
}

/// A listener that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreEvents;

impl ReductionListener for IgnoreEvents {
    fn on_reduction(&mut self, _: ReductionEvent, _: NodeId, _: &mut Ast, _: &mut Vec<NodeId>) {}
}

/// Table-driven bottom-up reducer.
///
/// Repeatedly replaces the first window of the live sequence whose symbols
/// form a frame of the grammar with a single node. Wider windows are tried
/// first; within one width the leftmost window wins. Every reduction restarts
/// the search at the widest width. There is no backtracking: a grammar where
/// an early greedy choice blocks a later one is simply rejected.
#[derive(Debug, Clone, Copy)]
pub struct Reducer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Reducer<'g> {
    #[must_use]
    pub const fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    /// Reduces `live` until no frame matches and returns the sole remaining
    /// node.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] if `live` is empty.
    /// - [`ParseError::Irreducible`] if more than one node is left once no
    ///   frame matches; the error lists the remaining symbols.
    pub fn reduce<L: ReductionListener>(&self,
                                        ast: &mut Ast,
                                        mut live: Vec<NodeId>,
                                        listener: &mut L)
                                        -> ParseResult<NodeId> {
        if live.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput { line: 1 });
        }

        while let Some((pos, width, production)) = self.find_frame(ast, &live) {
            let window = &live[pos..pos + width];
            let left = window[production.children.0];
            let right = production.has_right().then(|| window[production.children.1]);
            let frame = ast.names(window);

            let reduced = ast.push_nonterminal(production.result, production.action, left, right);
            debug!("{} -> {} :: {frame}",
                   production.result,
                   ast.names(&[Some(left), right].into_iter().flatten().collect::<Vec<_>>()));

            live.splice(pos..pos + width, [reduced]);

            if let Some(event) = production.event {
                listener.on_reduction(event, reduced, ast, &mut live);
            }
            trace!("live: {}", ast.names(&live));
        }

        match live.as_slice() {
            [root] => Ok(*root),
            [first, .., last] => {
                Err(ParseError::Irreducible { remaining: ast.names(&live),
                                              span:      ast[*first].span.union(ast[*last].span),
                                              line:      ast[*first].line, })
            },
            [] => Err(ParseError::UnexpectedEndOfInput { line: 1 }),
        }
    }

    /// Finds the widest, then leftmost, window of `live` that is a frame of
    /// the grammar.
    fn find_frame(&self, ast: &Ast, live: &[NodeId]) -> Option<(usize, usize, Production)> {
        let symbols: Vec<Symbol> = live.iter().map(|id| ast[*id].symbol).collect();

        for width in (1..=MAX_FRAME.min(symbols.len())).rev() {
            for (pos, frame) in symbols.windows(width).enumerate() {
                if let Some(production) = self.grammar.lookup(frame) {
                    return Some((pos, width, *production));
                }
            }
        }
        None
    }
}
