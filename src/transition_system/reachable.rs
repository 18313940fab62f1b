use std::collections::VecDeque;

use itertools::Itertools;
use tracing::trace;

use crate::{
    math::{visited_for, Visited},
    prelude::*,
};

/// Decides whether some accepting state of `dfa` can be reached from `state`, which includes the case
/// where `state` itself is accepting. The search is a depth-first traversal that marks every state it
/// enters, so it terminates on cyclic automata and visits each state at most once. The set of visited
/// states is local to the call.
///
/// An index that does not belong to `dfa` has no outgoing transitions and is not accepting, so the
/// answer for it is `false`.
pub fn can_reach_final(dfa: &DFA, state: StateIndex) -> bool {
    let mut visited = visited_for(dfa.state_count() as usize);
    let out = resolve_final(dfa, state, &mut visited);
    trace!(
        "accepting state {} from q{state}",
        if out { "reachable" } else { "unreachable" }
    );
    out
}

fn resolve_final(dfa: &DFA, state: StateIndex, visited: &mut Visited) -> bool {
    visited.insert(state as usize);
    if dfa.is_accepting(state) {
        return true;
    }
    dfa.transitions().edges_from(state).any(|t| {
        !visited.contains(t.target() as usize) && resolve_final(dfa, t.target(), visited)
    })
}

/// Decides whether `target` can be reached from the initial state of `dfa`. Works like [`can_reach_final`],
/// except that the search starts in the initial state and succeeds once it enters `target`.
pub fn reachable_from_initial(dfa: &DFA, target: StateIndex) -> bool {
    let mut visited = visited_for(dfa.state_count() as usize);
    resolve_state(dfa, target, dfa.initial(), &mut visited)
}

fn resolve_state(dfa: &DFA, target: StateIndex, current: StateIndex, visited: &mut Visited) -> bool {
    visited.insert(current as usize);
    if current == target {
        return true;
    }
    dfa.transitions().edges_from(current).any(|t| {
        !visited.contains(t.target() as usize) && resolve_state(dfa, target, t.target(), visited)
    })
}

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and its state index.
pub type MinimalRepresentative = (Vec<Symbol>, StateIndex);

/// Iterator that returns the minimal representatives of the states reachable from a given origin.
/// A minimal representative for a state `q` is the length-lexicographically minimal string with which
/// `q` can be reached from the origin. The states are produced in breadth-first order, so the
/// representatives are produced in length-lexicographic order as well.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a> {
    dfa: &'a DFA,
    seen: Visited,
    queue: VecDeque<MinimalRepresentative>,
}

impl<'a> MinimalRepresentatives<'a> {
    /// Starts the breadth-first search in `origin`.
    pub fn new(dfa: &'a DFA, origin: StateIndex) -> Self {
        let mut seen = visited_for(dfa.state_count() as usize);
        seen.insert(origin as usize);
        Self {
            dfa,
            seen,
            queue: VecDeque::from([(vec![], origin)]),
        }
    }
}

impl<'a> Iterator for MinimalRepresentatives<'a> {
    type Item = MinimalRepresentative;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        for edge in self
            .dfa
            .transitions()
            .edges_from(q)
            .sorted_by_key(|t| t.symbol())
        {
            let p = edge.target();
            if self.seen.insert(p as usize) {
                let mut new_access = access.clone();
                new_access.push(edge.symbol());
                self.queue.push_back((new_access, p));
            }
        }
        Some((access, q))
    }
}

/// Returns the length-lexicographically minimal word leading from `state` into an accepting state, if
/// there is one. The empty word is returned if `state` is itself accepting.
pub fn shortest_word_to_final(dfa: &DFA, state: StateIndex) -> Option<Vec<Symbol>> {
    MinimalRepresentatives::new(dfa, state).find_map(|(word, q)| {
        if dfa.is_accepting(q) {
            Some(word)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{can_reach_final, reachable_from_initial, shortest_word_to_final};
    use crate::{math::Set, prelude::*};

    /// Decides reachability by enumerating all paths of length smaller than the number of states.
    /// Any state that is reachable at all is reachable by such a path.
    fn brute_force_reaches(dfa: &DFA, from: StateIndex, pred: impl Fn(StateIndex) -> bool) -> bool {
        let mut frontier: Set<StateIndex> = Set::from_iter([from]);
        for _ in 0..dfa.state_count() {
            if frontier.iter().any(|&q| pred(q)) {
                return true;
            }
            frontier = frontier
                .iter()
                .flat_map(|&q| dfa.transitions().edges_from(q).map(|t| t.target()))
                .collect();
        }
        frontier.iter().any(|&q| pred(q))
    }

    fn check_against_brute_force(dfa: &DFA) {
        for q in 0..dfa.state_count() {
            assert_eq!(
                can_reach_final(dfa, q),
                brute_force_reaches(dfa, q, |p| dfa.is_accepting(p)),
                "can_reach_final disagrees for q{q} in\n{}",
                dfa.show()
            );
            assert_eq!(
                reachable_from_initial(dfa, q),
                brute_force_reaches(dfa, dfa.initial(), |p| p == q),
                "reachable_from_initial disagrees for q{q} in\n{}",
                dfa.show()
            );
        }
    }

    #[test]
    fn self_loops_and_short_cycles() {
        let self_loop = DFA::builder()
            .with_state_count(3)
            .with_initial(0)
            .with_accepting([2])
            .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'b', 1)])
            .build()
            .unwrap();
        check_against_brute_force(&self_loop);
        assert!(!can_reach_final(&self_loop, 0));
        assert!(!reachable_from_initial(&self_loop, 2));

        let two_cycle = DFA::builder()
            .with_initial(0)
            .with_accepting([2])
            .with_edges([(0, 'a', 1), (1, 'a', 0), (1, 'b', 2)])
            .build()
            .unwrap();
        check_against_brute_force(&two_cycle);
        assert!(can_reach_final(&two_cycle, 0));

        let three_cycle = DFA::builder()
            .with_state_count(4)
            .with_initial(1)
            .with_accepting([3])
            .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 0), (3, 'a', 0)])
            .build()
            .unwrap();
        check_against_brute_force(&three_cycle);
        assert!(!can_reach_final(&three_cycle, 0));
        assert!(can_reach_final(&three_cycle, 3));
        assert!(reachable_from_initial(&three_cycle, 0));
        assert!(!reachable_from_initial(&three_cycle, 3));
    }

    #[test]
    fn cyclic_non_final_loop() {
        let dfa = DFA::builder()
            .with_state_count(2)
            .with_initial(0)
            .with_edges([(0, 'a', 1), (1, 'a', 0)])
            .build()
            .unwrap();
        assert!((0..2).all(|q| !can_reach_final(&dfa, q)));
        assert!((0..2).all(|q| reachable_from_initial(&dfa, q)));
    }

    #[test]
    fn foreign_indices_are_unreachable() {
        let dfa = DFA::builder()
            .with_initial(0)
            .with_accepting([0])
            .with_edges([(0, 'a', 0)])
            .build()
            .unwrap();
        assert!(!can_reach_final(&dfa, 17));
        assert!(!reachable_from_initial(&dfa, 17));
    }

    #[cfg(feature = "random")]
    #[test_log::test]
    fn random_automata_agree_with_brute_force() {
        for seed in 0..64 {
            let dfa = crate::random::generate_random_dfa_seeded(seed, 3, 6, 0.6);
            check_against_brute_force(&dfa);
        }
    }

    #[test]
    fn minimal_representatives() {
        let dfa = DFA::builder()
            .with_initial(0)
            .with_accepting([2])
            .with_edges([
                (0, 'b', 0),
                (0, 'a', 1),
                (1, 'b', 0),
                (1, 'a', 2),
                (2, 'a', 2),
                (2, 'b', 2),
            ])
            .build()
            .unwrap();

        assert_eq!(
            dfa.minimal_representatives_from(0).collect_vec(),
            vec![(vec![], 0), (vec!['a'], 1), (vec!['a', 'a'], 2)]
        );
        assert_eq!(dfa.reachable_state_indices().collect_vec(), vec![0, 1, 2]);
        assert_eq!(
            dfa.minimal_representatives_from(2)
                .map(|(_, q)| q)
                .collect_vec(),
            vec![2]
        );
        assert_eq!(shortest_word_to_final(&dfa, 0), Some(vec!['a', 'a']));
        assert_eq!(shortest_word_to_final(&dfa, 2), Some(vec![]));
    }
}
