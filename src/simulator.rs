use crate::nfa::{Nfa, StateId};

/// Runs an [`Nfa`] over an input string via subset (epsilon-closure)
/// simulation, matching the whole input rather than searching for a
/// substring.
///
/// Each call allocates its own scratch state (the visited marker and the two
/// state-set buffers below) rather than touching the `Nfa` itself, so the
/// same compiled automaton can be driven by multiple calls — concurrently,
/// if the caller wants to — without any shared mutable state.
pub fn matches(nfa: &Nfa, input: &str) -> bool {
    let mut current = epsilon_closure(nfa, &[nfa.start]);

    for &byte in input.as_bytes() {
        if current.is_empty() {
            return false;
        }
        let mut next = Vec::new();
        for &state in &current {
            if let Some(targets) = nfa.state(state).on_char.get(&byte) {
                next.extend_from_slice(targets);
            }
        }
        current = epsilon_closure(nfa, &next);
    }

    current.iter().any(|&state| nfa.is_accepting(state))
}

/// Computes the set of states reachable from `roots` using only epsilon
/// transitions, `roots` included. The returned vector has no duplicates but
/// is not otherwise ordered.
fn epsilon_closure(nfa: &Nfa, roots: &[StateId]) -> Vec<StateId> {
    let mut visited = vec![false; nfa.state_count()];
    let mut stack = Vec::new();
    let mut closure = Vec::new();

    for &root in roots {
        if !visited[root.0] {
            visited[root.0] = true;
            stack.push(root);
            closure.push(root);
        }
    }

    while let Some(state) = stack.pop() {
        for &next in &nfa.state(state).epsilon {
            if !visited[next.0] {
                visited[next.0] = true;
                stack.push(next);
                closure.push(next);
            }
        }
    }

    closure
}
