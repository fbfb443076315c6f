//! # lej
//!
//! lej parses and evaluates the three-valued logic subset of the Lej
//! language: declarations binding names to the truth values `T`, `F` and `U`
//! (unsure), combined with `not`, `and` and `or`.
//!
//! A program is lexed into a flat sequence of terminals, folded bottom-up into
//! a single tree by a table-driven reducer, and walked to fill the assignment
//! store.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::LejError,
    interpreter::{
        evaluator::core::{Context, Options},
        parser::parse_source,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the arena-backed syntax tree the reducer builds:
/// grammar symbols, evaluation actions, terminal and nonterminal nodes, and
/// the arena that owns them. The walker dispatches on the actions stored
/// here.
///
/// # Responsibilities
/// - Defines the closed sets of grammar symbols and actions.
/// - Stores nodes contiguously and links children by index.
/// - Attaches spans and lines to every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error carries a span and a line so the driver
/// can point at the offending source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches spans and line numbers for context.
/// - Supports rendering through `miette` diagnostics.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value type
/// to provide a complete runtime for Lej programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across phases.
///
/// Currently source spans and their conversion for diagnostics.
pub mod util;

/// Runs a Lej program and returns the context holding its assignments.
///
/// The source is lexed, reduced to a tree, and walked. Nothing is printed and
/// the process is never terminated; the first error is returned instead.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use lej::{interpreter::evaluator::core::Options, run};
///
/// let context = run("def val x as T; def val y as (x and U);", &Options::default()).unwrap();
/// assert!(context.store.get("x").unwrap().is_true());
/// assert_eq!(context.store.get("y").unwrap().to_string(), "U[2 0]");
///
/// // 'z' is never declared.
/// assert!(run("def val y as (z or F);", &Options::default()).is_err());
/// ```
pub fn run(source: &str, options: &Options) -> Result<Context, LejError> {
    let tree = parse_source(source)?;

    let mut context = Context::with_options(*options);
    context.walk(&tree.ast, tree.root)?;

    Ok(context)
}
