/// Source locations.
///
/// Byte spans shared by lexer tokens, AST nodes, and every error variant,
/// together with the conversions needed to hand them to `miette` for
/// rendering.
pub mod span;
