use super::state::{Nfa, State, StateId};
use crate::ast::AstNode;
use crate::error::BuildError;

/// Default resource budgets for [`Builder`]. The C reference's analogous
/// failure mode is a malloc returning null mid-construction; safe Rust's
/// `Vec` just aborts the process on allocation failure instead of handing
/// back a `Result`, so that failure mode has no honest translation here.
/// These two budgets are the Rust-shaped substitute: checked up front, cheap
/// to hit with a pathological pattern, and always returned as an ordinary
/// `Err` rather than a process abort.
pub const DEFAULT_MAX_DEPTH: usize = 512;
pub const DEFAULT_MAX_STATES: usize = 100_000;

/// A sub-automaton under construction: one entry state, one exit state, with
/// no outgoing transitions wired from the exit yet. Every case of Thompson's
/// construction takes one or two fragments and produces a new one, so the
/// final fragment returned for the whole AST is the entire NFA modulo the
/// accepting-set bookkeeping [`Builder::build`] does last.
struct Fragment {
    start: StateId,
    accept: StateId,
}

/// Builds an [`Nfa`] out of an [`AstNode`] via Thompson's construction.
pub struct Builder {
    states: Vec<State>,
    max_depth: usize,
    max_states: usize,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_states: DEFAULT_MAX_STATES,
        }
    }

    pub fn with_limits(max_depth: usize, max_states: usize) -> Self {
        Self {
            states: Vec::new(),
            max_depth,
            max_states,
        }
    }

    /// Builds the complete NFA for `ast` using default resource budgets.
    pub fn build(ast: &AstNode) -> Result<Nfa, BuildError> {
        Builder::new().build_nfa(ast)
    }

    pub fn build_nfa(mut self, ast: &AstNode) -> Result<Nfa, BuildError> {
        if ast.depth() > self.max_depth {
            return Err(BuildError::RecursionLimitExceeded);
        }
        let fragment = self.build_fragment(ast, 0)?;
        self.states[fragment.accept.0].accepting = true;

        let mut accepting = std::collections::HashSet::new();
        accepting.insert(fragment.accept);

        Ok(Nfa {
            states: self.states,
            start: fragment.start,
            accepting,
        })
    }

    fn new_state(&mut self) -> Result<StateId, BuildError> {
        if self.states.len() >= self.max_states {
            return Err(BuildError::StateLimitExceeded);
        }
        let id = StateId(self.states.len());
        self.states.push(State::new());
        Ok(id)
    }

    fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from.0].epsilon.push(to);
    }

    fn add_char(&mut self, from: StateId, c: u8, to: StateId) {
        self.states[from.0].on_char.entry(c).or_default().push(to);
    }

    fn build_fragment(&mut self, node: &AstNode, depth: usize) -> Result<Fragment, BuildError> {
        if depth > self.max_depth {
            return Err(BuildError::RecursionLimitExceeded);
        }

        match node {
            AstNode::Char(c) => {
                let start = self.new_state()?;
                let accept = self.new_state()?;
                self.add_char(start, *c, accept);
                Ok(Fragment { start, accept })
            }

            AstNode::Concat(left, right) => {
                let left = self.build_fragment(left, depth + 1)?;
                let right = self.build_fragment(right, depth + 1)?;
                self.add_epsilon(left.accept, right.start);
                Ok(Fragment {
                    start: left.start,
                    accept: right.accept,
                })
            }

            AstNode::Or(left, right) => {
                let left = self.build_fragment(left, depth + 1)?;
                let right = self.build_fragment(right, depth + 1)?;
                let start = self.new_state()?;
                let accept = self.new_state()?;
                self.add_epsilon(start, left.start);
                self.add_epsilon(start, right.start);
                self.add_epsilon(left.accept, accept);
                self.add_epsilon(right.accept, accept);
                Ok(Fragment { start, accept })
            }

            AstNode::Star(inner) => {
                let inner = self.build_fragment(inner, depth + 1)?;
                let start = self.new_state()?;
                let accept = self.new_state()?;
                self.add_epsilon(start, inner.start);
                self.add_epsilon(start, accept);
                self.add_epsilon(inner.accept, inner.start);
                self.add_epsilon(inner.accept, accept);
                Ok(Fragment { start, accept })
            }

            AstNode::Plus(inner) => {
                let inner = self.build_fragment(inner, depth + 1)?;
                let accept = self.new_state()?;
                self.add_epsilon(inner.accept, inner.start);
                self.add_epsilon(inner.accept, accept);
                Ok(Fragment {
                    start: inner.start,
                    accept,
                })
            }

            AstNode::Question(inner) => {
                let inner = self.build_fragment(inner, depth + 1)?;
                let start = self.new_state()?;
                let accept = self.new_state()?;
                self.add_epsilon(start, inner.start);
                self.add_epsilon(start, accept);
                self.add_epsilon(inner.accept, accept);
                Ok(Fragment { start, accept })
            }
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
