/// The evaluator module walks reduced trees and computes values.
///
/// The evaluator traverses the tree by action tag, evaluates ternary
/// expressions, and records every assignment in the store owned by the
/// evaluation context.
///
/// # Responsibilities
/// - Dispatches structural actions and executes assignments.
/// - Evaluates truth value literals, variable references, and connectives.
/// - Reports runtime errors such as references to undeclared variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the flat sequence of
/// terminal nodes the reducer works on: keywords, identifiers, truth value
/// literals and delimiters, each with its span and line.
///
/// # Responsibilities
/// - Converts the input character stream into terminal nodes.
/// - Skips whitespace and back-tick comments while tracking lines.
/// - Reports malformed identifiers and literals.
pub mod lexer;
/// The parser module builds the tree from terminals.
///
/// Parsing is a table-driven bottom-up reduction of the live sequence of
/// nodes. Identifiers are bound to declared variables while the reduction
/// runs.
///
/// # Responsibilities
/// - Holds the grammar table of frames and productions.
/// - Reduces the live sequence to a single root or reports what is left.
/// - Rewrites identifier occurrences into variable references.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Lej's logic subset has a single value type, the ternary value, whose
/// composite form is a truth table over unsure atoms.
pub mod value;
