use tracing::{debug, trace};

use crate::{math::Map, prelude::*};

/// Outcome of successfully inserting a [`Transition`] into a [`TransitionRelation`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Insertion {
    /// The transition was not present before and has been added.
    Inserted,
    /// An identical transition already existed, the relation is unchanged.
    Duplicate,
}

/// Stores the transitions of a deterministic automaton. The transitions are kept in a vector in the
/// order in which they were inserted, which is also the order in which they are displayed. Additionally
/// each pair of source state and symbol is mapped to the position of its unique transition, and each
/// source state is mapped to the positions of all of its outgoing transitions.
///
/// The relation is functional on `(source, symbol)`, meaning [`Self::insert`] refuses any transition
/// that would make the relation non-deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionRelation {
    edges: Vec<Transition>,
    index: Map<(StateIndex, Symbol), usize>,
    outgoing: Map<StateIndex, Vec<usize>>,
}

impl TransitionRelation {
    /// Creates an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to insert the given `transition`.
    ///
    /// If no transition with the same source and symbol exists yet, it is added. If one exists that also
    /// has the same target, the new one is a duplicate and is silently discarded. Otherwise the relation would
    /// become non-deterministic and a [`ConstructionError::NonDeterministic`] naming both transitions is returned,
    /// the relation remains unchanged in that case.
    pub fn insert(&mut self, transition: Transition) -> Result<Insertion, ConstructionError> {
        let key = (transition.source(), transition.symbol());

        if let Some(&pos) = self.index.get(&key) {
            let existing = self.edges[pos];
            if existing.target() == transition.target() {
                trace!("skipping duplicate transition {}", transition.show());
                return Ok(Insertion::Duplicate);
            }
            debug!(
                "transition {} collides with {}",
                transition.show(),
                existing.show()
            );
            return Err(ConstructionError::NonDeterministic {
                conflicting: transition,
                existing,
            });
        }

        let pos = self.edges.len();
        self.edges.push(transition);
        self.index.insert(key, pos);
        self.outgoing
            .entry(transition.source())
            .or_default()
            .push(pos);
        Ok(Insertion::Inserted)
    }

    /// Builds a relation by inserting the given transitions in order. Stops at the first transition that
    /// conflicts with a previously inserted one, in which case everything inserted so far is dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = Transition>,
    {
        let mut relation = Self::new();
        for transition in iter {
            relation.insert(transition)?;
        }
        Ok(relation)
    }

    /// Returns an iterator over all transitions leaving `state`, in insertion order.
    pub fn edges_from(&self, state: StateIndex) -> impl Iterator<Item = &Transition> + '_ {
        self.outgoing
            .get(&state)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.edges[pos])
    }

    /// Returns the unique transition leaving `state` that is labeled with `symbol`, if it exists.
    pub fn edge(&self, state: StateIndex, symbol: Symbol) -> Option<&Transition> {
        self.index.get(&(state, symbol)).map(|&pos| &self.edges[pos])
    }

    /// Returns the target that is reached from `state` on `symbol`, if such a transition exists.
    pub fn successor(&self, state: StateIndex, symbol: Symbol) -> Option<StateIndex> {
        self.edge(state, symbol).map(Transition::target)
    }

    /// Returns an iterator over all transitions labeled with `symbol`, regardless of their source.
    pub fn edges_labeled(&self, symbol: Symbol) -> impl Iterator<Item = &Transition> + '_ {
        self.edges.iter().filter(move |t| t.symbol() == symbol)
    }

    /// Returns the source states of all transitions labeled with `symbol`. As the relation is
    /// deterministic, every state is yielded at most once.
    pub fn sources_labeled(&self, symbol: Symbol) -> impl Iterator<Item = StateIndex> + '_ {
        self.edges_labeled(symbol).map(Transition::source)
    }

    /// Iterates over all transitions in the order in which they were inserted.
    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.edges.iter()
    }

    /// Number of transitions in the relation.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the relation contains no transitions.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransitionRelation {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
