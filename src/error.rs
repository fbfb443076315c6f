use miette::Diagnostic;
use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors raised while turning source text into a tree: malformed
/// identifiers and literals found by the lexer, and token sequences the
/// reducer cannot collapse to a single root.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while walking the tree and evaluating ternary
/// expressions: references to undeclared variables, ill-typed assignments,
/// actions the walker cannot execute, runaway nesting, and programs with
/// more unsure atoms than the configured budget.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a Lej run can end with.
///
/// The driver receives this instead of the process being terminated, so it can
/// decide whether to report and stop or carry on with another program.
#[derive(Debug, Error, Diagnostic)]
pub enum LejError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runtime(#[from] RuntimeError),
}

impl LejError {
    /// Line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
