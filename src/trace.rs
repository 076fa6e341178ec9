use std::fmt::{Display, Formatter};

/// Verbosity level for the diagnostic trace a [`Regex`](crate::Regex) can
/// print while compiling and matching, mirroring the `Log<T>` levels the
/// rest of this crate's ancestry uses for its own tokenizer tracing.
///
/// Levels are ordered; `set_trace` is a one-shot choice for the lifetime of
/// a `Regex`; see [`crate::Regex::set_trace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Trace {
    /// No tracing. The default if `set_trace` is never called.
    None,
    /// Announce each compile stage reached (lex, parse, build).
    Default,
    /// `Default`, plus confirm each stage's success.
    Success,
    /// `Success`, plus the resulting token stream / AST / NFA.
    Result,
    /// `Result`, plus every simulation step `matches` takes.
    Verbose,
}

impl Trace {
    /// Relative ordering as a small integer, so callers can write
    /// `level.order() >= Trace::Success.order()` the way the rest of this
    /// crate's tracing does, without matching on every variant by hand.
    pub fn order(&self) -> u8 {
        match self {
            Trace::None => 0,
            Trace::Default => 1,
            Trace::Success => 2,
            Trace::Result => 3,
            Trace::Verbose => 4,
        }
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Trace::None => write!(f, "none"),
            Trace::Default => write!(f, "default"),
            Trace::Success => write!(f, "success"),
            Trace::Result => write!(f, "result"),
            Trace::Verbose => write!(f, "verbose"),
        }
    }
}
