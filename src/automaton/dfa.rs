use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::{
    prelude::*,
    transition_system::reachable::{shortest_word_to_final, MinimalRepresentative},
};

/// A deterministic finite automaton (DFA). It consists of an alphabet whose size is declared but not enforced,
/// a number of states `0..state_count`, a designated initial state, a list of accepting states and a
/// [`TransitionRelation`] that has at most one transition per state and symbol. A finite word is accepted if
/// reading it from the initial state ends in an accepting state.
///
/// A `DFA` can only be obtained through a [`DFABuilder`] or from a [`Description`], both of which validate
/// determinism and the ranges of all state indices. It is never modified afterwards and holds no scratch data,
/// so a shared reference may be queried from several threads at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DFA {
    alphabet: CharAlphabet,
    states: DefaultIdType,
    initial: StateIndex,
    accepting: Vec<StateIndex>,
    transitions: TransitionRelation,
}

impl DFA {
    /// Instantiates a new [`DFABuilder`].
    pub fn builder() -> DFABuilder {
        DFABuilder::default()
    }

    pub(crate) fn from_parts(
        alphabet: CharAlphabet,
        states: DefaultIdType,
        initial: StateIndex,
        accepting: Vec<StateIndex>,
        transitions: TransitionRelation,
    ) -> Self {
        Self {
            alphabet,
            states,
            initial,
            accepting,
            transitions,
        }
    }

    /// Returns a reference to the alphabet.
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// The declared size of the alphabet.
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.declared_size()
    }

    /// The number of states, all state indices lie in `0..self.state_count()`.
    pub fn state_count(&self) -> DefaultIdType {
        self.states
    }

    /// Returns the designated initial state.
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// Returns the accepting states in the order in which they were given.
    pub fn accepting_states(&self) -> &[StateIndex] {
        &self.accepting
    }

    /// Returns the indices of all states that are not accepting.
    pub fn rejecting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        (0..self.states).filter(|q| !self.is_accepting(*q))
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting.contains(&state)
    }

    /// Returns a reference to the transitions, they are iterated in insertion order.
    pub fn transitions(&self) -> &TransitionRelation {
        &self.transitions
    }

    /// Returns the state that is reached from `state` on `symbol`, if there is a transition.
    pub fn successor(&self, state: StateIndex, symbol: Symbol) -> Option<StateIndex> {
        self.transitions.successor(state, symbol)
    }

    /// Runs `word` from `origin` and returns the state that is reached. Returns `None` if some symbol
    /// of `word` has no transition along the way.
    pub fn reached_state_from(&self, origin: StateIndex, word: &str) -> Option<StateIndex> {
        word.chars()
            .try_fold(origin, |q, sym| self.successor(q, sym))
    }

    /// Runs `word` from the initial state, see [`Self::reached_state_from`].
    pub fn reached_state(&self, word: &str) -> Option<StateIndex> {
        self.reached_state_from(self.initial, word)
    }

    /// Returns true if reading the whole `word` from the initial state leads to an accepting state.
    ///
    /// # Example
    /// ```
    /// use dfa_suffix::prelude::*;
    ///
    /// let dfa = DFA::builder()
    ///     .with_initial(0)
    ///     .with_accepting([0])
    ///     .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
    ///     .build()
    ///     .unwrap();
    /// assert!(dfa.accepts(""));
    /// assert!(dfa.accepts("aba"));
    /// assert!(!dfa.accepts("ab"));
    /// ```
    pub fn accepts(&self, word: &str) -> bool {
        self.reached_state(word)
            .is_some_and(|q| self.is_accepting(q))
    }

    /// See [`can_reach_final`].
    pub fn can_reach_final(&self, state: StateIndex) -> bool {
        can_reach_final(self, state)
    }

    /// See [`reachable_from_initial`].
    pub fn reachable_from_initial(&self, state: StateIndex) -> bool {
        reachable_from_initial(self, state)
    }

    /// Returns an iterator over the minimal representatives of all states reachable from `origin`.
    pub fn minimal_representatives_from(&self, origin: StateIndex) -> MinimalRepresentatives<'_> {
        MinimalRepresentatives::new(self, origin)
    }

    /// Returns an iterator over the minimal representatives of all states reachable from the initial state.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_> {
        self.minimal_representatives_from(self.initial)
    }

    /// Returns the minimal representative of `state`, i.e. the length-lexicographically minimal word leading
    /// from the initial state to `state`, or `None` if it is not reachable.
    pub fn access_word(&self, state: StateIndex) -> Option<Vec<Symbol>> {
        self.minimal_representatives()
            .find_map(|(word, q): MinimalRepresentative| if q == state { Some(word) } else { None })
    }

    /// Iterates over the indices of all states that are reachable from the initial state, in
    /// breadth-first order.
    pub fn reachable_state_indices(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.minimal_representatives().map(|(_, q)| q)
    }

    /// Tries to construct a (finite) word witnessing that the accepted language is not empty. If such a word exists,
    /// the length-lexicographically minimal one is returned, otherwise `None`.
    pub fn give_word(&self) -> Option<Vec<Symbol>> {
        shortest_word_to_final(self, self.initial)
    }

    /// Returns true if and only if the accepted language is empty.
    pub fn is_empty_language(&self) -> bool {
        !self.can_reach_final(self.initial)
    }

    /// Returns the plain text summary of the automaton, listing its sizes, its initial and accepting
    /// states and all transitions in insertion order.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Alphabet number: {}\nStates number: {}\nInitial state: {}\nFinal states number: {}\nFinal states: {}\n",
            self.alphabet_size(),
            self.states,
            self.initial,
            self.accepting.len(),
            self.accepting.iter().join(" "),
        );
        out.push_str(&format!(
            "Transitions number:    {}\nTransitions:\n",
            self.transitions.len()
        ));
        for t in &self.transitions {
            out.push_str(&format!("{t}\n"));
        }
        out
    }

    /// Returns a string representation of the transition table. The initial state is marked with an
    /// arrow and accepting states are highlighted.
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.universe().map(|s| s.show())),
        );
        for q in 0..self.states {
            let mut name = format!("q{}", q.show());
            if q == self.initial {
                name = format!("-> {name}");
            }
            if self.is_accepting(q) {
                name = name.bold().green().to_string();
            }
            let row = std::iter::once(name).chain(self.alphabet.universe().map(|sym| {
                self.successor(q, sym)
                    .map(|p| format!("q{}", p.show()))
                    .unwrap_or_else(|| "-".to_string())
            }));
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl Show for DFA {
    fn show(&self) -> String {
        self.build_transition_table()
    }
}
