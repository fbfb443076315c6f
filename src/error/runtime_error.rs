use miette::Diagnostic;
use thiserror::Error;

use crate::{
    ast::{Action, Symbol},
    util::span::Span,
};

/// Represents all errors that can occur while walking and evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuntimeError {
    /// Tried to use a variable that has not been assigned.
    #[error("Error on line {line}: '{name}' is not a valid val variable.")]
    #[diagnostic(code(lej::eval::unknown_variable),
                 help("Declare it first with `def val <name> as ...;`."))]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        #[label("used here")]
        span: Span,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A node had the wrong shape or kind for the operation applied to it.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    #[diagnostic(code(lej::eval::type_mismatch))]
    TypeMismatch {
        /// What was expected and what was found.
        details: String,
        #[label("here")]
        span:    Span,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The walker or evaluator reached a node whose action it cannot perform.
    #[error("Error on line {line}: {symbol} cannot perform action '{action}' here.")]
    #[diagnostic(code(lej::eval::unexpected_action))]
    UnexpectedAction {
        /// Symbol of the node.
        symbol: Symbol,
        /// The action it carried.
        action: Action,
        #[label("this node")]
        span:   Span,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An action needed a child the node does not have.
    #[error("Error on line {line}: {symbol} is missing its {side} child.")]
    #[diagnostic(code(lej::eval::missing_child))]
    MissingChild {
        /// Symbol of the node.
        symbol: Symbol,
        /// `"left"` or `"right"`.
        side:   &'static str,
        #[label("this node")]
        span:   Span,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Nesting went deeper than the configured limit.
    #[error("Error on line {line}: Expression nesting exceeds the limit of {limit}.")]
    #[diagnostic(code(lej::eval::depth_limit),
                 help("Raise the limit with `--max-depth`."))]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
        #[label("too deep")]
        span:  Span,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `U` would instantiate more unsure atoms than allowed.
    #[error("Error on line {line}: More than {limit} unsure values in one program.")]
    #[diagnostic(code(lej::eval::unsure_limit),
                 help("Every `U` doubles the size of the next one's truth table."))]
    UnsureLimitExceeded {
        /// The configured maximum number of atoms.
        limit: usize,
        #[label("one too many")]
        span:  Span,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnexpectedAction { line, .. }
            | Self::MissingChild { line, .. }
            | Self::DepthLimitExceeded { line, .. }
            | Self::UnsureLimitExceeded { line, .. } => *line,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownVariable { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::UnexpectedAction { span, .. }
            | Self::MissingChild { span, .. }
            | Self::DepthLimitExceeded { span, .. }
            | Self::UnsureLimitExceeded { span, .. } => *span,
        }
    }
}
