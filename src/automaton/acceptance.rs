use tracing::{debug, trace};

use crate::{prelude::*, transition_system::reachable::shortest_word_to_final};

/// Decides whether `word` can be read as the segment `w0` of some word `w1 w0 w2` that is accepted by `dfa`.
///
/// For the empty word this is the case if and only if `dfa` accepts at least one word. Otherwise we look for a
/// state `S0` that has an outgoing transition on the first symbol of `word`, such that reading all of `word`
/// from `S0` succeeds and ends in a state from which an accepting state is reachable ([`walks`]), and such
/// that `S0` is itself reachable from the initial state ([`reachable_from_initial`]).
///
/// The result only depends on `dfa` and `word`, no state is retained between calls.
///
/// # Example
/// ```
/// use dfa_suffix::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_initial(0)
///     .with_accepting([1])
///     .with_edges([(0, 'a', 1), (1, 'a', 1)])
///     .build()
///     .unwrap();
/// assert!(accepts_as_suffix("a", &dfa));
/// assert!(accepts_as_suffix("aaa", &dfa));
/// assert!(!accepts_as_suffix("b", &dfa));
/// ```
pub fn accepts_as_suffix(word: &str, dfa: &DFA) -> bool {
    let Some(first) = word.chars().next() else {
        return can_reach_final(dfa, dfa.initial());
    };

    let out = dfa
        .transitions()
        .sources_labeled(first)
        .any(|origin| walks(word, dfa, origin) && reachable_from_initial(dfa, origin));
    debug!("\"{word}\" is {}a suffix segment", if out { "" } else { "not " });
    out
}

/// Decides whether reading `word` from `state` succeeds and ends in a state from which some accepting state
/// can be reached. Each step consumes one symbol, so this terminates after at most `word.len()` steps.
pub fn walks(word: &str, dfa: &DFA, state: StateIndex) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        None => can_reach_final(dfa, state),
        Some(sym) => {
            trace!("walking {sym} from q{state}");
            dfa.successor(state, sym)
                .is_some_and(|target| walks(chars.as_str(), dfa, target))
        }
    }
}

/// Witnesses that a word `w0` is a suffix segment, consisting of a `prefix` leading from the initial state to
/// the state where `w0` is read and a `completion` that leads from the end of `w0` into an accepting state.
/// Both are chosen as short as possible for the state in which `w0` is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    /// The word `w1`, which is read before the segment.
    pub prefix: Vec<Symbol>,
    /// The state from which the segment is read.
    pub origin: StateIndex,
    /// The segment `w0` itself.
    pub segment: Vec<Symbol>,
    /// The word `w2`, which leads from the end of the segment into an accepting state.
    pub completion: Vec<Symbol>,
}

impl Witness {
    /// Returns the accepted word `w1 w0 w2`.
    pub fn word(&self) -> String {
        self.prefix
            .iter()
            .chain(self.segment.iter())
            .chain(self.completion.iter())
            .collect()
    }
}

/// Like [`accepts_as_suffix`] but returns a [`Witness`] instead of a boolean. Candidate origins are tried in the
/// order of their outgoing transitions, the first one that works is used. Returns `None` exactly if
/// [`accepts_as_suffix`] returns false.
pub fn acceptance_witness(word: &str, dfa: &DFA) -> Option<Witness> {
    let segment: Vec<Symbol> = word.chars().collect();
    let witness_from = |origin: StateIndex| -> Option<Witness> {
        let prefix = dfa.access_word(origin)?;
        let end = dfa.reached_state_from(origin, word)?;
        let completion = shortest_word_to_final(dfa, end)?;
        Some(Witness {
            prefix,
            origin,
            segment: segment.clone(),
            completion,
        })
    };

    match segment.first() {
        None => witness_from(dfa.initial()),
        Some(&first) => dfa
            .transitions()
            .sources_labeled(first)
            .find_map(witness_from),
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn accept_everything() -> DFA {
        DFA::builder()
            .with_state_count(2)
            .with_initial(0)
            .with_accepting([1])
            .with_edges([(0, 'a', 1), (1, 'a', 1)])
            .build()
            .unwrap()
    }

    fn cyclic_non_final() -> DFA {
        DFA::builder()
            .with_state_count(2)
            .with_initial(0)
            .with_edges([(0, 'a', 1), (1, 'a', 0)])
            .build()
            .unwrap()
    }

    /// 0 -a-> 1 -b-> 2 (accepting), state 3 is unreachable but has the segment "cb" leading to 2
    fn with_unreachable_part() -> DFA {
        DFA::builder()
            .with_state_count(5)
            .with_initial(0)
            .with_accepting([2])
            .with_edges([(0, 'a', 1), (1, 'b', 2), (3, 'c', 4), (4, 'b', 2)])
            .build()
            .unwrap()
    }

    #[test]
    fn two_state_accept_everything() {
        let dfa = accept_everything();
        assert!(accepts_as_suffix("a", &dfa));
        assert!(accepts_as_suffix("aaaa", &dfa));
        assert!(!accepts_as_suffix("b", &dfa));
        assert!(!accepts_as_suffix("ab", &dfa));
        assert!(accepts_as_suffix("", &dfa));
    }

    #[test]
    fn cyclic_loop_without_final_states() {
        let dfa = cyclic_non_final();
        for word in ["a", "aa", "aaa", "b", "ab"] {
            assert!(!accepts_as_suffix(word, &dfa), "{word} should be rejected");
        }
        assert!(!accepts_as_suffix("", &dfa));
        assert!(acceptance_witness("a", &dfa).is_none());
    }

    #[test]
    fn empty_word_means_non_empty_language() {
        assert_eq!(
            accepts_as_suffix("", &accept_everything()),
            !accept_everything().is_empty_language()
        );
        assert_eq!(
            accepts_as_suffix("", &cyclic_non_final()),
            !cyclic_non_final().is_empty_language()
        );
    }

    #[test]
    fn origin_must_be_reachable() {
        let dfa = with_unreachable_part();
        assert!(accepts_as_suffix("b", &dfa));
        assert!(accepts_as_suffix("ab", &dfa));
        // only readable from the unreachable state 3
        assert!(!accepts_as_suffix("cb", &dfa));
        assert!(!accepts_as_suffix("c", &dfa));
        assert!(walks("cb", &dfa, 3));
        assert!(!walks("cb", &dfa, 0));
    }

    #[test]
    fn segment_may_be_followed_by_more_input() {
        let dfa = with_unreachable_part();
        // "a" ends in 1, from where 2 is still reachable
        assert!(accepts_as_suffix("a", &dfa));
        assert!(walks("", &dfa, 1));
        assert!(walks("", &dfa, 4));
        assert!(!walks("b", &dfa, 2));
    }

    #[test]
    fn repeated_queries_do_not_interfere() {
        let dfa = with_unreachable_part();
        let words = ["", "a", "b", "ab", "cb", "ba", "abb"];
        let first: Vec<bool> = words.iter().map(|w| accepts_as_suffix(w, &dfa)).collect();
        let reversed: Vec<bool> = words
            .iter()
            .rev()
            .map(|w| accepts_as_suffix(w, &dfa))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        assert_eq!(first, reversed);
    }

    #[test]
    fn concurrent_queries_agree() {
        let dfa = with_unreachable_part();
        let words = ["", "a", "b", "ab", "cb", "ba", "abb"];
        let expected: Vec<bool> = words.iter().map(|w| accepts_as_suffix(w, &dfa)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        words
                            .iter()
                            .map(|w| accepts_as_suffix(w, &dfa))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn witnesses_are_accepted() {
        let dfa = with_unreachable_part();
        let witness = acceptance_witness("b", &dfa).unwrap();
        assert_eq!(
            witness,
            Witness {
                prefix: vec!['a'],
                origin: 1,
                segment: vec!['b'],
                completion: vec![],
            }
        );
        assert_eq!(witness.word(), "ab");
        assert!(dfa.accepts(&witness.word()));

        let witness = acceptance_witness("a", &dfa).unwrap();
        assert_eq!(witness.word(), "ab");
        assert_eq!(witness.completion, vec!['b']);

        let witness = acceptance_witness("", &dfa).unwrap();
        assert_eq!(witness.word(), "ab");
        assert!(acceptance_witness("cb", &dfa).is_none());
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn witness_exists_iff_accepted_on_random_automata() {
        for seed in 0..48 {
            let dfa = crate::random::generate_random_dfa_seeded(seed, 2, 5, 0.4);
            for word in ["", "a", "b", "ab", "ba", "aab", "bba"] {
                let accepted = accepts_as_suffix(word, &dfa);
                match acceptance_witness(word, &dfa) {
                    Some(witness) => {
                        assert!(accepted);
                        assert!(dfa.accepts(&witness.word()), "{witness:?}");
                    }
                    None => assert!(!accepted, "missing witness for {word}"),
                }
            }
        }
    }
}
