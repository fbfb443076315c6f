use miette::Diagnostic;
use thiserror::Error;

use crate::util::span::Span;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// A word starting like an identifier contains characters identifiers may
    /// not use.
    #[error("Error on line {line}: The characters \"{text}\" from position {} to {} do not form a valid identifier.", .span.start, .span.end)]
    #[diagnostic(code(lej::lex::invalid_identifier),
                 help("An identifier starts with a lowercase ASCII letter and continues with ASCII letters or digits."))]
    InvalidIdentifier {
        /// The offending text.
        text: String,
        /// Where the text was found.
        #[label("not an identifier")]
        span: Span,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A run of characters that is neither a keyword, an identifier, nor a
    /// truth value literal.
    #[error("Error on line {line}: The characters \"{text}\" from position {} to {} do not form a valid keyword, identifier, or literal.", .span.start, .span.end)]
    #[diagnostic(code(lej::lex::invalid_literal),
                 help("Truth values are written `T`, `U` and `F`."))]
    InvalidLiteral {
        /// The offending text.
        text: String,
        /// Where the text was found.
        #[label("unrecognized")]
        span: Span,
        /// The source line where the error occurred.
        line: usize,
    },
    /// No production matches any window of the remaining live sequence.
    #[error("Error on line {line}: This collection of tokens cannot be parsed: {remaining}.")]
    #[diagnostic(code(lej::parse::irreducible))]
    Irreducible {
        /// Space-joined symbol names of the sequence that was left.
        remaining: String,
        /// Region covered by the remaining sequence.
        #[label("could not be reduced")]
        span:      Span,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The program contained no tokens at all.
    #[error("Error on line {line}: Unexpected end of input.")]
    #[diagnostic(code(lej::parse::empty))]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidIdentifier { line, .. }
            | Self::InvalidLiteral { line, .. }
            | Self::Irreducible { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }

    /// The byte span the error points at, when there is one.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::InvalidIdentifier { span, .. }
            | Self::InvalidLiteral { span, .. }
            | Self::Irreducible { span, .. } => Some(*span),
            Self::UnexpectedEndOfInput { .. } => None,
        }
    }
}
