use once_cell::unsync::OnceCell;

use crate::ast::AstNode;
use crate::error::CompileError;
use crate::lexer::Lexer;
use crate::nfa::{Builder, Nfa};
use crate::parser::Parser;
use crate::simulator;
use crate::trace::Trace;

/// Outcome of a successful [`Regex::compile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    /// The pattern was lexed, parsed, and built into a fresh NFA.
    Compiled,
    /// `compile` was called with the exact pattern already compiled; no work
    /// was done.
    AlreadyCompiled,
}

/// A compiled regular expression over the classic Kleene subset: literal
/// bytes, concatenation, `|`, `*`, `+`, `?`, and grouping with `(` `)`.
///
/// A `Regex` can be recompiled with a new pattern at any time; `compile`
/// takes `&mut self` so the borrow checker — rather than any bookkeeping
/// flag — is what rules out reading a half-replaced automaton.
pub struct Regex {
    pattern: Option<String>,
    nfa: Option<Nfa>,
    trace: OnceCell<Trace>,
}

impl Regex {
    /// An empty, uncompiled `Regex`. `matches` on it always returns `false`.
    pub fn new() -> Self {
        Self {
            pattern: None,
            nfa: None,
            trace: OnceCell::new(),
        }
    }

    /// Builds and compiles a `Regex` from `pattern` in one step.
    pub fn with_pattern(pattern: &str) -> Result<Regex, CompileError> {
        let mut regex = Regex::new();
        regex.compile(pattern)?;
        Ok(regex)
    }

    /// Lexes, parses, and builds `pattern`.
    ///
    /// If this `Regex` is already compiled with the exact same pattern,
    /// returns `AlreadyCompiled` and does no work. Otherwise any existing
    /// compiled state is released first, then the new pattern is lexed,
    /// parsed, and built; if that fails partway, this `Regex` is left
    /// uncompiled rather than reverted to its previous pattern.
    pub fn compile(&mut self, pattern: &str) -> Result<CompileStatus, CompileError> {
        if self.pattern.as_deref() == Some(pattern) {
            return Ok(CompileStatus::AlreadyCompiled);
        }

        self.pattern = None;
        self.nfa = None;

        let trace = self.trace_level();
        if trace.order() >= Trace::Default.order() {
            println!("[{}; compile]: lexing {:?}", trace, pattern);
        }

        let tokens = Lexer::new(pattern).tokenize_all()?;
        if trace.order() >= Trace::Result.order() {
            println!("[{}; compile]: tokens {:?}", trace, tokens);
        }

        let ast: AstNode = Parser::new(&tokens).parse()?;
        if trace.order() >= Trace::Result.order() {
            println!("[{}; compile]: ast {}", trace, ast);
        }

        let nfa = Builder::build(&ast)?;
        if trace.order() >= Trace::Success.order() {
            println!(
                "[{}; compile]: built NFA with {} states",
                trace,
                nfa.state_count()
            );
        }

        self.pattern = Some(pattern.to_string());
        self.nfa = Some(nfa);
        Ok(CompileStatus::Compiled)
    }

    /// Whether the whole of `input` is accepted by the compiled pattern.
    /// Always `false` if nothing has been compiled yet.
    pub fn matches(&self, input: &str) -> bool {
        let trace = self.trace_level();
        let Some(nfa) = &self.nfa else {
            if trace.order() >= Trace::Default.order() {
                println!("[{}; matches]: no compiled pattern, rejecting", trace);
            }
            return false;
        };

        let result = simulator::matches(nfa, input);
        if trace.order() >= Trace::Verbose.order() {
            println!("[{}; matches]: {:?} -> {}", trace, input, result);
        }
        result
    }

    pub fn is_compiled(&self) -> bool {
        self.nfa.is_some()
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Sets the trace verbosity for this `Regex`. Can only be set once; a
    /// second call returns the rejected level back to the caller, the same
    /// one-shot contract `OnceCell::set` gives its callers directly.
    pub fn set_trace(&self, level: Trace) -> Result<(), Trace> {
        self.trace.set(level)
    }

    fn trace_level(&self) -> Trace {
        self.trace.get().copied().unwrap_or(Trace::None)
    }
}

impl Default for Regex {
    fn default() -> Self {
        Self::new()
    }
}
