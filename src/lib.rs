//! A small regular-expression engine over the classic Kleene subset.
//!
//! # Overview
//!
//! A pattern is compiled in three stages:
//!
//! 1. [`Lexer`] scans the pattern into a [`Token`] sequence.
//! 2. [`Parser`] parses the tokens into an [`AstNode`] tree by recursive
//!    descent, honoring the usual precedence: `|` loosest, concatenation
//!    next, postfix `*`/`+`/`?` tightest, with `(` `)` overriding all of it.
//! 3. [`nfa::Builder`] lowers the tree into an [`nfa::Nfa`] via Thompson's
//!    construction.
//!
//! [`simulator::matches`] then runs the compiled automaton over an input
//! string by subset (epsilon-closure) simulation, matching the whole string
//! rather than searching for a substring within it.
//!
//! [`Regex`] wraps all three stages behind a small façade:
//!
//! ```
//! use kleene_regex::Regex;
//!
//! let mut re = Regex::new();
//! re.compile("colou?r").unwrap();
//! assert!(re.matches("color"));
//! assert!(re.matches("colour"));
//! assert!(!re.matches("colouur"));
//! ```
//!
//! Supported syntax is deliberately narrow: literal printable ASCII bytes,
//! `|`, `*`, `+`, `?`, and grouping parentheses. There is no character-class,
//! anchor, escape, backreference, or capture-group syntax, and `matches`
//! always tests the whole input rather than searching within it.

mod ast;
mod error;
mod lexer;
mod nfa;
mod parser;
mod regex;
mod simulator;
mod token;
mod trace;

pub use ast::AstNode;
pub use error::{BuildError, CompileError, LexicalError, ParseError};
pub use lexer::Lexer;
pub use nfa::{Nfa, State, StateId};
pub use parser::Parser;
pub use regex::{CompileStatus, Regex};
pub use token::Token;
pub use trace::Trace;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod property_tests;
