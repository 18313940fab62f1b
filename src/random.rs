use tracing::debug;

use crate::prelude::*;

/// Draws a random [`DFA`] with `size` states over the first `symbols` letters using the given source of
/// randomness. The algorithm is as follows:
/// 1. Start with `size` states and no transitions.
/// 2. For each state and each symbol, with probability `density` draw a target state uniformly and add the
///    corresponding transition. Otherwise the state has no transition on that symbol.
/// 3. Each state is made accepting with probability 1/4, state 0 is the initial state.
///
/// Note that depending on the drawn transitions, there may be states that are not reachable from the initial state.
fn draw_dfa(rng: &mut fastrand::Rng, symbols: usize, size: usize, density: f64) -> DFA {
    assert!(size > 0, "an automaton needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);
    let states = size as DefaultIdType;

    let mut edges = vec![];
    for q in 0..states {
        for sym in alphabet.universe() {
            if rng.f64() < density {
                edges.push((q, sym, rng.u32(..states)));
            }
        }
    }
    let accepting = (0..states).filter(|_| rng.u8(..4) == 0).collect::<Vec<_>>();
    debug!(
        "drew automaton with {} transitions and {} accepting states",
        edges.len(),
        accepting.len()
    );

    DFA::builder()
        .with_alphabet_size(symbols)
        .with_state_count(states)
        .with_initial(0)
        .with_accepting(accepting)
        .with_edges(edges)
        .build()
        .expect("drawn transitions are deterministic and within range")
}

/// Generates a random [`DFA`], see [`generate_random_dfa_seeded`] for a reproducible variant.
pub fn generate_random_dfa(symbols: usize, size: usize, density: f64) -> DFA {
    draw_dfa(&mut fastrand::Rng::new(), symbols, size, density)
}

/// Generates a random [`DFA`] with `size` states over an alphabet of `symbols` letters, where each possible
/// transition exists with probability `density`. The same `seed` always leads to the same automaton.
pub fn generate_random_dfa_seeded(seed: u64, symbols: usize, size: usize, density: f64) -> DFA {
    draw_dfa(&mut fastrand::Rng::with_seed(seed), symbols, size, density)
}

/// Generates a random word over the given alphabet whose length lies in `min_len..=max_len`.
pub fn generate_random_word(alphabet: &CharAlphabet, min_len: usize, max_len: usize) -> String {
    let symbols: Vec<_> = alphabet.universe().collect();
    if symbols.is_empty() {
        return String::new();
    }
    let len = fastrand::usize(min_len..=max_len);
    (0..len)
        .map(|_| symbols[fastrand::usize(..symbols.len())])
        .collect()
}

/// Generates `count` random words, see [`generate_random_word`].
pub fn generate_random_words(
    alphabet: &CharAlphabet,
    min_len: usize,
    max_len: usize,
    count: usize,
) -> Vec<String> {
    (0..count)
        .map(|_| generate_random_word(alphabet, min_len, max_len))
        .collect()
}
