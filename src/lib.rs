//! Library for working with deterministic finite automata (DFA) over small `char` alphabets and
//! for answering reachability and suffix-segment questions about them.
//!
//! A [`DFA`](automaton::DFA) consists of a declared alphabet size, a number of states, a designated initial
//! state, a list of accepting (final) states and a [`TransitionRelation`](transition_system::TransitionRelation).
//! The relation stores transitions `(from, label, to)` and guarantees that for every pair `(from, label)`
//! there is at most one target. This determinism is checked exactly once, when the automaton is
//! constructed, either through a [`DFABuilder`](transition_system::DFABuilder) or from a textual
//! [`Description`](description::Description). After construction an automaton is never modified again,
//! so all queries take `&self` and can be run from multiple threads at the same time.
//!
//! The queries that are provided are
//! - [`can_reach_final`](transition_system::reachable::can_reach_final), which decides whether some accepting
//!   state is reachable from a given state,
//! - [`reachable_from_initial`](transition_system::reachable::reachable_from_initial), which decides whether a
//!   state can be reached from the initial state and
//! - [`accepts_as_suffix`](automaton::accepts_as_suffix), which decides whether a word `w0` may appear as the
//!   segment `w0` of some accepted word `w1 w0 w2`, where `w1` leads from the initial state into the state at which
//!   `w0` is read.
//!
//! Each of these allocates its own set of visited states, nothing is cached inside the automaton.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_suffix::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{CharAlphabet, Symbol},
        automaton::{accepts_as_suffix, acceptance_witness, walks, Witness, DFA},
        description::{build, Description, DescriptionParseError, LoadError},
        math,
        transition_system::{
            dot::Dottable,
            reachable::{can_reach_final, reachable_from_initial, MinimalRepresentatives},
            ConstructionError, DFABuilder, DefaultIdType, Insertion, StateIndex, StateRole,
            Transition, TransitionRelation,
        },
        Show,
    };
}

/// This module contains the type aliases for the collections that are used throughout the crate.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// This module defines the transition relation, its construction and the reachability queries on it.
pub mod transition_system;

/// Defines the deterministic finite automaton and the suffix acceptance queries on it.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;

/// Reading and writing of the plain text description format of an automaton.
pub mod description;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example q0, q1, q2, ... and for a transition (q0, a, q1) it should be (q0, a, q1).
    /// Just use something that makes sense. This is mainly used for debugging purposes.
    fn show(&self) -> String;
    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}
    /// and for a collection of transitions it should be {(q0, a, q1), (q1, b, q2), ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for transition_system::DefaultIdType {
    fn show(&self) -> String {
        self.to_string()
    }
    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
    {
        format!("[{}]", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
    fn show_collection<'a, I: IntoIterator<Item = &'a Self>>(iter: I) -> String
    where
        Self: 'a,
    {
        format!("\"{}\"", iter.into_iter().join(""))
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
