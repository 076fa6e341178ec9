use std::fmt::{Display, Formatter};

/// A non-printable byte (outside `0x20..=0x7E`) was encountered while lexing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    /// Byte offset into the pattern at which the bad byte was found.
    pub offset: usize,
    /// The offending byte.
    pub byte: u8,
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LexicalError: non-printable byte 0x{:02X} at offset {}",
            self.byte, self.offset
        )
    }
}

/// A grammar violation: unmatched parenthesis, empty group, an operator where
/// a `base` was expected, or trailing garbage after a complete expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Index into the token sequence where parsing failed.
    pub offset: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParseError: {} (at token {})", self.message, self.offset)
    }
}

/// Thompson construction ran past one of its resource budgets (builder module docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The AST is nested deeper than the builder is willing to recurse.
    RecursionLimitExceeded,
    /// Construction would allocate more NFA states than the configured budget.
    StateLimitExceeded,
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::RecursionLimitExceeded => {
                write!(f, "BuildError: pattern nested too deeply")
            }
            BuildError::StateLimitExceeded => {
                write!(f, "BuildError: pattern would build too many NFA states")
            }
        }
    }
}

/// The union of everything that can go wrong while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    Lexical(LexicalError),
    Parse(ParseError),
    Build(BuildError),
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lexical(e) => Display::fmt(e, f),
            CompileError::Parse(e) => Display::fmt(e, f),
            CompileError::Build(e) => Display::fmt(e, f),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexicalError> for CompileError {
    fn from(e: LexicalError) -> Self {
        CompileError::Lexical(e)
    }
}
impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}
impl From<BuildError> for CompileError {
    fn from(e: BuildError) -> Self {
        CompileError::Build(e)
    }
}
