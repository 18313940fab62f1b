/// The type that is used for indexing states.
pub type DefaultIdType = u32;

/// A state is identified by nothing but its index, which lies in `[0, state_count)`.
pub type StateIndex = DefaultIdType;

mod edge;
pub use edge::Transition;

mod relation;
pub use relation::{Insertion, TransitionRelation};

/// Construction of automata, this is where determinism and the ranges of state indices are checked.
pub mod builder;
pub use builder::{ConstructionError, DFABuilder, StateRole};

/// Depth-first reachability queries as well as breadth-first access sequences.
pub mod reachable;

/// Rendering of automata in the DOT format of graphviz.
pub mod dot;
pub use dot::Dottable;
