use std::fmt::Display;

use crate::prelude::*;

/// A transition `(source, symbol, target)`. Transitions are not associated with an automaton,
/// they are plain values that can be compared and hashed.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
pub struct Transition {
    source: StateIndex,
    symbol: Symbol,
    target: StateIndex,
}

impl Transition {
    /// Creates a new transition from `source` to `target` that is labeled with `symbol`.
    pub fn new(source: StateIndex, symbol: Symbol, target: StateIndex) -> Self {
        Self {
            source,
            symbol,
            target,
        }
    }

    /// Returns the index of the source state of the transition.
    pub fn source(&self) -> StateIndex {
        self.source
    }

    /// Returns the symbol that labels the transition.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the target state of the transition.
    pub fn target(&self) -> StateIndex {
        self.target
    }
}

impl From<(StateIndex, Symbol, StateIndex)> for Transition {
    fn from((source, symbol, target): (StateIndex, Symbol, StateIndex)) -> Self {
        Self::new(source, symbol, target)
    }
}

/// Writes the transition the way it appears in a description, e.g. `0 a 1`.
impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.source, self.symbol, self.target)
    }
}

impl Show for Transition {
    fn show(&self) -> String {
        format!(
            "(q{}, {}, q{})",
            self.source.show(),
            self.symbol.show(),
            self.target.show()
        )
    }
}
