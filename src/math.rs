/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Set of visited state indices. Every traversal allocates its own instance, it is
/// never stored inside of an automaton.
pub type Visited = bit_set::BitSet;

/// Creates an empty [`Visited`] set with room for `states` many state indices.
pub fn visited_for(states: usize) -> Visited {
    bit_set::BitSet::with_capacity(states)
}
