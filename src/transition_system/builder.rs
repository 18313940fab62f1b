use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, trace};

use crate::prelude::*;

/// The part a state index plays in an automaton, used for reporting indices that are out of range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StateRole {
    /// The designated initial state.
    Initial,
    /// One of the accepting states.
    Accepting,
    /// The source of a transition.
    Source,
    /// The target of a transition.
    Target,
}

impl Display for StateRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                StateRole::Initial => "initial",
                StateRole::Accepting => "accepting",
                StateRole::Source => "source",
                StateRole::Target => "target",
            }
        )
    }
}

/// Abstracts the errors that can occur when constructing a [`DFA`]. A failed construction never
/// produces a partial automaton.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ConstructionError {
    /// Two transitions share source state and symbol but lead to different targets.
    #[error("transition rule {conflicting} makes the automaton non-deterministic, it collides with rule {existing}")]
    NonDeterministic {
        /// The transition whose insertion was refused.
        conflicting: Transition,
        /// The previously inserted transition it collides with.
        existing: Transition,
    },
    /// A state index does not lie in `[0, state_count)`.
    #[error("{role} state {state} is out of range, the automaton has {state_count} states")]
    OutOfRangeState {
        /// Where the offending index was used.
        role: StateRole,
        /// The offending index.
        state: StateIndex,
        /// The number of states of the automaton.
        state_count: DefaultIdType,
    },
    /// No initial state was given and none could be inferred.
    #[error("no initial state was given")]
    MissingInitialState,
}

/// Helper struct for the construction of a [`DFA`]. It collects the declared alphabet size, the number of
/// states, the initial state, the accepting states and the transitions. Nothing is checked until
/// [`DFABuilder::build`] is called, which then validates all state indices and inserts the transitions
/// one by one into a [`TransitionRelation`], aborting on the first one that violates determinism.
///
/// If the number of states is not given, it is taken to be one more than the largest index that
/// is mentioned anywhere. If the alphabet size is not given, the number of distinct symbols that
/// label some transition is used.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']`. We want to add the following transitions:
/// - From state 0 to state 0 on symbol 'a'
/// - From state 0 to state 1 on symbol 'b'
/// - From state 1 to state 1 on symbol 'a'
/// - From state 1 to state 0 on symbol 'b'
///
/// Further, state 0 should be initial and state 1 should be accepting. This can be done as follows
/// ```
/// use dfa_suffix::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_initial(0)
///     .with_accepting([1])
///     .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
///     .build()
///     .unwrap();
/// assert_eq!(dfa.state_count(), 2);
/// assert!(dfa.accepts("ab"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DFABuilder {
    alphabet_size: Option<usize>,
    state_count: Option<DefaultIdType>,
    initial: Option<StateIndex>,
    accepting: Vec<StateIndex>,
    edges: Vec<Transition>,
}

impl DFABuilder {
    /// Sets the declared size of the alphabet.
    pub fn with_alphabet_size(mut self, size: usize) -> Self {
        self.alphabet_size = Some(size);
        self
    }

    /// Sets the number of states, all indices must then lie in `[0, count)`.
    pub fn with_state_count(mut self, count: DefaultIdType) -> Self {
        self.state_count = Some(count);
        self
    }

    /// Sets the initial state.
    pub fn with_initial(mut self, initial: StateIndex) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Adds accepting states. The order in which they are given is kept for display, repeated
    /// indices are only kept once.
    pub fn with_accepting<I: IntoIterator<Item = StateIndex>>(mut self, iter: I) -> Self {
        self.accepting.extend(iter);
        self
    }

    /// Adds a list of edges given as `(source, symbol, target)` triples. The edges are inserted in the order
    /// in which they are given, this order decides which of two colliding edges is reported as the conflicting one.
    pub fn with_edges<I: IntoIterator<Item = (StateIndex, Symbol, StateIndex)>>(
        mut self,
        iter: I,
    ) -> Self {
        self.edges.extend(iter.into_iter().map(Transition::from));
        self
    }

    /// Adds a list of [`Transition`]s, see [`Self::with_edges`].
    pub fn with_transitions<I: IntoIterator<Item = Transition>>(mut self, iter: I) -> Self {
        self.edges.extend(iter);
        self
    }

    /// One more than the largest index mentioned anywhere. Fails if that index is the largest
    /// representable one, as no state count could then contain it.
    fn inferred_state_count(&self) -> Result<DefaultIdType, ConstructionError> {
        let Some((role, max)) = self
            .edges
            .iter()
            .flat_map(|t| [(StateRole::Source, t.source()), (StateRole::Target, t.target())])
            .chain(self.initial.map(|q| (StateRole::Initial, q)))
            .chain(self.accepting.iter().map(|&q| (StateRole::Accepting, q)))
            .max_by_key(|(_, q)| *q)
        else {
            return Ok(0);
        };
        max.checked_add(1)
            .ok_or(ConstructionError::OutOfRangeState {
                role,
                state: max,
                state_count: DefaultIdType::MAX,
            })
    }

    /// Validates the collected data and builds the [`DFA`]. Fails with
    /// - [`ConstructionError::MissingInitialState`] if no initial state was set,
    /// - [`ConstructionError::OutOfRangeState`] if some index is not smaller than the number of states and
    /// - [`ConstructionError::NonDeterministic`] for the first transition that collides with an earlier one.
    ///
    /// Transitions that are identical to an earlier one are dropped.
    pub fn build(self) -> Result<DFA, ConstructionError> {
        let state_count = match self.state_count {
            Some(count) => count,
            None => self.inferred_state_count()?,
        };
        let initial = self.initial.ok_or(ConstructionError::MissingInitialState)?;
        trace!("building automaton with {state_count} states and initial state {initial}");

        let in_range = |role: StateRole, state: StateIndex| {
            if state < state_count {
                Ok(state)
            } else {
                Err(ConstructionError::OutOfRangeState {
                    role,
                    state,
                    state_count,
                })
            }
        };

        in_range(StateRole::Initial, initial)?;
        let accepting = self
            .accepting
            .into_iter()
            .map(|q| in_range(StateRole::Accepting, q))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unique()
            .collect_vec();

        let mut transitions = TransitionRelation::new();
        let mut duplicates = 0;
        for transition in self.edges {
            in_range(StateRole::Source, transition.source())?;
            in_range(StateRole::Target, transition.target())?;
            if transitions.insert(transition)? == Insertion::Duplicate {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            debug!("dropped {duplicates} duplicate transitions");
        }

        let alphabet = CharAlphabet::new(
            self.alphabet_size
                .unwrap_or_else(|| transitions.iter().map(|t| t.symbol()).unique().count()),
            transitions.iter().map(|t| t.symbol()),
        );

        Ok(DFA::from_parts(
            alphabet,
            state_count,
            initial,
            accepting,
            transitions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn conflicting_transitions_fail() {
        let res = DFA::builder()
            .with_state_count(3)
            .with_initial(0)
            .with_edges([(0, 'a', 1), (0, 'a', 2)])
            .build();
        let err = res.unwrap_err();
        assert_eq!(
            err,
            ConstructionError::NonDeterministic {
                conflicting: Transition::new(0, 'a', 2),
                existing: Transition::new(0, 'a', 1),
            }
        );
        assert_eq!(
            err.to_string(),
            "transition rule 0 a 2 makes the automaton non-deterministic, it collides with rule 0 a 1"
        );
    }

    #[test]
    fn duplicate_transitions_are_collapsed() {
        let dfa = DFA::builder()
            .with_initial(0)
            .with_accepting([1, 1])
            .with_edges([(0, 'a', 1), (0, 'a', 1), (1, 'a', 1)])
            .build()
            .unwrap();
        assert_eq!(dfa.transitions().len(), 2);
        assert_eq!(dfa.accepting_states(), &[1]);
        assert_eq!(dfa.state_count(), 2);
        assert_eq!(dfa.alphabet_size(), 1);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let base = || DFA::builder().with_state_count(2).with_initial(0);

        assert_eq!(
            base().with_initial(2).build().unwrap_err(),
            ConstructionError::OutOfRangeState {
                role: StateRole::Initial,
                state: 2,
                state_count: 2
            }
        );
        assert_eq!(
            base().with_accepting([0, 5]).build().unwrap_err(),
            ConstructionError::OutOfRangeState {
                role: StateRole::Accepting,
                state: 5,
                state_count: 2
            }
        );
        assert_eq!(
            base().with_edges([(3, 'a', 0)]).build().unwrap_err(),
            ConstructionError::OutOfRangeState {
                role: StateRole::Source,
                state: 3,
                state_count: 2
            }
        );
        assert!(matches!(
            base().with_edges([(0, 'a', 7)]).build(),
            Err(ConstructionError::OutOfRangeState {
                role: StateRole::Target,
                ..
            })
        ));
    }

    #[test]
    fn largest_index_cannot_be_inferred() {
        assert_eq!(
            DFA::builder()
                .with_initial(0)
                .with_edges([(DefaultIdType::MAX, 'a', 0)])
                .build()
                .unwrap_err(),
            ConstructionError::OutOfRangeState {
                role: StateRole::Source,
                state: DefaultIdType::MAX,
                state_count: DefaultIdType::MAX
            }
        );
        assert!(matches!(
            DFA::builder().with_initial(DefaultIdType::MAX).build(),
            Err(ConstructionError::OutOfRangeState {
                role: StateRole::Initial,
                ..
            })
        ));
        assert!(matches!(
            DFA::builder()
                .with_initial(0)
                .with_accepting([DefaultIdType::MAX])
                .build(),
            Err(ConstructionError::OutOfRangeState {
                role: StateRole::Accepting,
                ..
            })
        ));
    }

    #[test]
    fn missing_initial_state() {
        assert_eq!(
            DFA::builder().with_edges([(0, 'a', 0)]).build().unwrap_err(),
            ConstructionError::MissingInitialState
        );
    }

    #[test]
    fn declared_alphabet_size_is_not_enforced() {
        let dfa = DFA::builder()
            .with_alphabet_size(1)
            .with_initial(0)
            .with_edges([(0, 'a', 0), (0, 'b', 0), (0, 'c', 0)])
            .build()
            .unwrap();
        assert_eq!(dfa.alphabet_size(), 1);
        assert_eq!(dfa.alphabet().observed_size(), 3);
    }
}
