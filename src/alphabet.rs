use itertools::Itertools;

/// The symbols that label transitions are single characters.
pub type Symbol = char;

/// An alphabet of `char` symbols. It carries the size that a description declares
/// as well as the symbols that actually occur on some transition. The declared size is
/// informational only, it is never checked against the symbols that are observed.
#[derive(Clone, Hash, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub struct CharAlphabet {
    declared: usize,
    symbols: Vec<char>,
}

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self {
            declared: size,
            symbols: (0..size).map(|i| (b'a' + i as u8) as char).collect(),
        }
    }

    /// Creates an alphabet with the given declared size and the given observed symbols.
    pub fn new(declared: usize, symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            declared,
            symbols: symbols.into_iter().unique().sorted().collect(),
        }
    }

    /// The size of the alphabet as it was declared.
    pub fn declared_size(&self) -> usize {
        self.declared
    }

    /// Returns an iterator over the symbols that label at least one transition, in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Number of distinct symbols that were observed.
    pub fn observed_size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if `symbol` labels some transition.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }
}

impl std::ops::Index<usize> for CharAlphabet {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}
