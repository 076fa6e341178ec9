//! Two kinds of property test live here.
//!
//! The first is a differential suite against the `regex` crate, used purely
//! as a test oracle the same way the predecessor of this crate uses
//! `serde_json` as an oracle for its own JSON grammar in
//! `examples::__tests__::benchmark`: anchor a full pattern with `^...$` so
//! `regex`'s whole-match semantics line up with this crate's whole-string
//! `matches`, and agree on supported Kleene patterns across a spread of
//! inputs.
//!
//! The second is self-consistency: compiling the same pattern twice and
//! sampling the resulting automata against each other, plus the specific
//! algebra and idempotence identities a Kleene-subset engine is expected to
//! hold (`a** ≡ a*`, `a+ ≡ a* \ {""}`, `a? ≡ {"", "a"}`, `(a|b)c ≡ ac|bc`) —
//! none of which an external oracle comparison happens to exercise on its
//! own.

use crate::regex::Regex;

fn oracle_matches(pattern: &str, input: &str) -> bool {
    let anchored = format!("^(?:{})$", pattern);
    regex::Regex::new(&anchored).unwrap().is_match(input)
}

fn assert_agrees(pattern: &str, inputs: &[&str]) {
    let ours = Regex::with_pattern(pattern).unwrap();
    for &input in inputs {
        assert_eq!(
            ours.matches(input),
            oracle_matches(pattern, input),
            "pattern {:?} disagreed with oracle on input {:?}",
            pattern,
            input
        );
    }
}

#[test]
fn agrees_with_oracle_on_literal_concatenation() {
    assert_agrees("abc", &["abc", "ab", "abcd", "", "xyz"]);
}

#[test]
fn agrees_with_oracle_on_alternation() {
    assert_agrees("cat|dog|bird", &["cat", "dog", "bird", "catdog", "ca", ""]);
}

#[test]
fn agrees_with_oracle_on_star_and_plus() {
    assert_agrees("ab*c+", &["ac", "abc", "abbbc", "acc", "a", "c", ""]);
}

#[test]
fn agrees_with_oracle_on_question() {
    assert_agrees("colou?r", &["color", "colour", "colouur", "colr"]);
}

#[test]
fn agrees_with_oracle_on_nested_grouping() {
    assert_agrees(
        "(ab|cd)*(e|f)+",
        &["e", "f", "abe", "cdcdf", "abcdee", "", "ab", "g"],
    );
}

#[test]
fn agrees_with_oracle_on_a_spread_of_short_inputs_over_a_small_alphabet() {
    assert_agrees(
        "(a|b)*ab",
        &[
            "", "a", "b", "c", "ab", "ba", "aab", "bab", "aabb", "abab", "abc", "cab",
        ],
    );
}

/// Property 3 (§8): two independent compiles of the same pattern must accept
/// the same language, sampled rather than checked for literal state-graph
/// isomorphism.
#[test]
fn two_compiles_of_the_same_pattern_agree_on_every_sampled_input() {
    let pattern = "(a|b)*c+d?";
    let first = Regex::with_pattern(pattern).unwrap();
    let second = Regex::with_pattern(pattern).unwrap();
    for input in ["", "c", "d", "abababccc", "ccd", "ccdd", "ab", "xc"] {
        assert_eq!(
            first.matches(input),
            second.matches(input),
            "two compiles of {:?} disagreed on {:?}",
            pattern,
            input
        );
    }
}

/// Property 6 (§8): `a**` accepts exactly what `a*` accepts.
#[test]
fn star_is_idempotent() {
    let once = Regex::with_pattern("a*").unwrap();
    let twice = Regex::with_pattern("a**").unwrap();
    for input in ["", "a", "aa", "aaaaa", "b", "ab", "ba"] {
        assert_eq!(
            once.matches(input),
            twice.matches(input),
            "a* and a** disagreed on {:?}",
            input
        );
    }
}

/// Property 7 (§8), first half: `a+` accepts exactly what `a*` accepts,
/// except the empty string.
#[test]
fn plus_accepts_exactly_star_minus_the_empty_string() {
    let star = Regex::with_pattern("a*").unwrap();
    let plus = Regex::with_pattern("a+").unwrap();

    assert!(star.matches(""));
    assert!(!plus.matches(""));

    for input in ["a", "aa", "aaaaa", "b", "ab"] {
        assert_eq!(
            star.matches(input),
            plus.matches(input),
            "a* and a+ disagreed on non-empty input {:?}",
            input
        );
    }
}

/// Property 7 (§8), second half: `a?` accepts exactly `""` and `"a"`.
#[test]
fn question_accepts_exactly_the_empty_string_and_the_single_literal() {
    let question = Regex::with_pattern("a?").unwrap();
    let cases = [("", true), ("a", true), ("aa", false), ("b", false), ("ba", false)];
    for (input, expected) in cases {
        assert_eq!(question.matches(input), expected, "a? on {:?}", input);
    }
}

/// Property 5 (§8): concatenation distributes over alternation —
/// `(a|b)c ≡ ac|bc`.
#[test]
fn concatenation_distributes_over_alternation() {
    let distributed = Regex::with_pattern("(a|b)c").unwrap();
    let expanded = Regex::with_pattern("ac|bc").unwrap();
    for input in ["ac", "bc", "c", "a", "b", "abc", ""] {
        assert_eq!(
            distributed.matches(input),
            expanded.matches(input),
            "(a|b)c and ac|bc disagreed on {:?}",
            input
        );
    }
}
