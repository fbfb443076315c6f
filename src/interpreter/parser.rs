/// The grammar table.
///
/// Maps frames of one to five symbols to the production they reduce by, and
/// defines the Lej grammar itself.
pub mod grammar;
/// The reduction engine.
///
/// Folds a flat live sequence into a single tree by repeatedly replacing the
/// widest, leftmost matching frame, and raises production events through a
/// listener.
pub mod reducer;
/// Identifier binding.
///
/// Listens for declaration events and rewrites raw identifiers into variable
/// references while the parse is still running.
pub mod resolver;

use crate::{
    ast::{Ast, Node, NodeId, Tree},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{grammar::Grammar, reducer::Reducer, resolver::IdentifierResolver},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Reduces a terminal sequence to a tree using the Lej grammar, binding
/// identifiers along the way.
///
/// # Errors
/// Returns a [`ParseError`] if the sequence is empty or cannot be reduced to
/// a single node.
///
/// # Example
/// ```
/// use lej::{
///     ast::Symbol,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tree = parse(tokenize("def val x as (T or U);").unwrap()).unwrap();
/// assert_eq!(tree.ast[tree.root].symbol, Symbol::CodeBlock);
///
/// assert!(parse(tokenize("def val x as (T;").unwrap()).is_err());
/// ```
pub fn parse(terminals: Vec<Node>) -> ParseResult<Tree> {
    let grammar = Grammar::lej();
    let mut resolver = IdentifierResolver::new();
    parse_with(&grammar, terminals, &mut resolver)
}

/// Like [`parse`], with an explicit grammar and identifier resolver.
///
/// # Errors
/// Returns a [`ParseError`] if the sequence is empty or cannot be reduced to
/// a single node.
pub fn parse_with(grammar: &Grammar,
                  terminals: Vec<Node>,
                  resolver: &mut IdentifierResolver)
                  -> ParseResult<Tree> {
    let mut ast = Ast::new();
    let live: Vec<NodeId> = terminals.into_iter().map(|node| ast.push(node)).collect();

    let root = Reducer::new(grammar).reduce(&mut ast, live, resolver)?;
    Ok(Tree { ast, root })
}

/// Lexes and parses Lej source text.
///
/// # Errors
/// Returns the first lexical or syntactic error encountered.
pub fn parse_source(source: &str) -> ParseResult<Tree> {
    parse(tokenize(source)?)
}
