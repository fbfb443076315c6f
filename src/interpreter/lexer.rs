use logos::Logos;

use crate::{
    ast::{Action, Node, Symbol},
    error::ParseError,
    util::span::Span,
};

/// Represents a lexical token in Lej source text.
///
/// Only the three-valued logic subset is recognized: declarations, the truth
/// value literals, the logical connectives, and their delimiters.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// `def`
    #[token("def")]
    Def,
    /// `as`
    #[token("as")]
    As,
    /// `val`
    #[token("val")]
    Val,
    /// `T`
    #[token("T")]
    True,
    /// `U`
    #[token("U")]
    Unsure,
    /// `F`
    #[token("F")]
    False,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Identifier tokens such as `x` or `isRaining2`.
    #[regex(r"[a-z][a-zA-Z0-9]*", |lex| lex.slice().to_string(), priority = 3)]
    Identifier(String),
    /// Any other run of word characters. Never produced: the callback always
    /// rejects it with the matching error kind.
    #[regex(r"[a-zA-Z0-9_]+", reject_word, priority = 1)]
    Malformed,
    /// `` `Comments.` ``, which may span several lines.
    #[regex(r"`[^`]*`", |lex| {
        let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Why a slice of the input could not be turned into a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// Starts like an identifier but contains other characters.
    InvalidIdentifier,
    /// Anything else.
    #[default]
    InvalidLiteral,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

fn reject_word(lex: &logos::Lexer<Token>) -> Result<(), LexErrorKind> {
    if lex.slice().starts_with(|c: char| c.is_ascii_lowercase()) {
        Err(LexErrorKind::InvalidIdentifier)
    } else {
        Err(LexErrorKind::InvalidLiteral)
    }
}

impl Token {
    /// The grammar symbol and evaluation action this token enters the live
    /// sequence with, or `None` for tokens the lexer skips.
    ///
    /// The truth value literals are already `VAL-SUBEXPR` terminals; only
    /// their actions tell them apart.
    #[must_use]
    pub const fn grammar(&self) -> Option<(Symbol, Action)> {
        let entry = match self {
            Self::Def => (Symbol::Def, Action::None),
            Self::As => (Symbol::As, Action::None),
            Self::Val => (Symbol::Val, Action::None),
            Self::True => (Symbol::ValSubexpr, Action::BuildTrue),
            Self::Unsure => (Symbol::ValSubexpr, Action::BuildUnsure),
            Self::False => (Symbol::ValSubexpr, Action::BuildFalse),
            Self::And => (Symbol::And, Action::None),
            Self::Or => (Symbol::Or, Action::None),
            Self::Not => (Symbol::Not, Action::None),
            Self::LParen => (Symbol::LParen, Action::None),
            Self::RParen => (Symbol::RParen, Action::None),
            Self::Semicolon => (Symbol::Semicolon, Action::None),
            Self::Identifier(_) => (Symbol::Id, Action::None),
            Self::Malformed | Self::Comment | Self::NewLine | Self::Ignored => return None,
        };
        Some(entry)
    }
}

/// Scans `source` into the flat sequence of terminal nodes the reducer
/// consumes.
///
/// Each terminal carries its grammar symbol, its exact text, its byte span and
/// the line it starts on.
///
/// # Errors
/// Returns [`ParseError::InvalidIdentifier`] or [`ParseError::InvalidLiteral`]
/// for the first slice that does not form a token.
///
/// # Example
/// ```
/// use lej::{ast::Symbol, interpreter::lexer::tokenize};
///
/// let terminals = tokenize("def val x as T;").unwrap();
/// let symbols: Vec<Symbol> = terminals.iter().map(|t| t.symbol).collect();
///
/// assert_eq!(symbols,
///            vec![Symbol::Def,
///                 Symbol::Val,
///                 Symbol::Id,
///                 Symbol::As,
///                 Symbol::ValSubexpr,
///                 Symbol::Semicolon]);
/// assert_eq!(terminals[2].literal(), Some("x"));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Node>, ParseError> {
    let mut terminals = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = Span::from(lexer.span());
        let line = lexer.extras.line;
        let text = lexer.slice().to_string();

        let token = token.map_err(|kind| match kind {
                             LexErrorKind::InvalidIdentifier => {
                                 ParseError::InvalidIdentifier { text: text.clone(),
                                                                 span,
                                                                 line }
                             },
                             LexErrorKind::InvalidLiteral => {
                                 ParseError::InvalidLiteral { text: text.clone(),
                                                              span,
                                                              line }
                             },
                         })?;

        if let Some((symbol, action)) = token.grammar() {
            terminals.push(Node::terminal(symbol, text, span, line, action));
        }
    }

    Ok(terminals)
}
