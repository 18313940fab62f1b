mod dfa;
pub use dfa::DFA;

mod acceptance;
pub use acceptance::{acceptance_witness, accepts_as_suffix, walks, Witness};
