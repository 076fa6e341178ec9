mod builder;
mod state;

pub use builder::{Builder, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STATES};
pub use state::{Nfa, State, StateId};
