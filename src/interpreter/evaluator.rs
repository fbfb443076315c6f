/// Core evaluation logic and context management.
///
/// Contains the runtime context, the evaluation options, and the tree walker
/// that executes assignments.
pub mod core;

/// Ternary expression evaluation.
///
/// Turns `VAL-EXPR`, `VAL-SUBEXPR` and `VAL-VAR` subtrees into ternary values.
pub mod expression;

/// The assignment store.
///
/// Maps variable names to their current value and counts the unsure atoms
/// instantiated so far.
pub mod store;
