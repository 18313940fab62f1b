use std::{
    fmt::Display,
    io::{BufRead, Read},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, trace};

use crate::prelude::*;

/// The plain text description of an automaton. It consists of whitespace separated tokens
/// ```text
/// <alphabet_size>
/// <state_count>
/// <initial_state>
/// <final_count>
/// <final_state_1> ... <final_state_final_count>
/// <from_1> <label_1> <to_1>
/// <from_2> <label_2> <to_2>
/// ...
/// ```
/// where transitions continue until the input is exhausted and every label is a single character.
/// A description is only parsed, nothing is validated until it is turned into a [`DFA`] with [`build`].
///
/// # Example
/// ```
/// use dfa_suffix::prelude::*;
///
/// let description: Description = "1 2 0 1 1\n0 a 1\n1 a 1".parse().unwrap();
/// let dfa = build(&description).unwrap();
/// assert!(accepts_as_suffix("a", &dfa));
/// assert!(!accepts_as_suffix("b", &dfa));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    /// The declared size of the alphabet.
    pub alphabet_size: usize,
    /// The number of states.
    pub state_count: DefaultIdType,
    /// The initial state.
    pub initial: StateIndex,
    /// The accepting states, in the order in which they are listed.
    pub accepting: Vec<StateIndex>,
    /// The transitions, in the order in which they are listed.
    pub transitions: Vec<Transition>,
}

/// Abstracts the types of errors that can occur when parsing a [`Description`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DescriptionParseError {
    /// The input ended before the named field.
    #[error("missing {0}")]
    MissingField(&'static str),
    /// A token that should be a non-negative integer is not.
    #[error("could not parse {field} from `{token}`")]
    InvalidNumber {
        /// The field that was being parsed.
        field: &'static str,
        /// The offending token.
        token: String,
    },
    /// A transition label consists of more than one character.
    #[error("transition label `{0}` is not a single character")]
    InvalidLabel(String),
    /// The input ended in the middle of a transition.
    #[error("transition number {index} is incomplete")]
    TruncatedTransition {
        /// Position of the transition, counting from zero.
        index: usize,
    },
    /// The input could not be read.
    #[error("could not read description: {0}")]
    Io(String),
}

/// Errors that can occur when loading a [`DFA`] from a textual description.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LoadError {
    /// The description is malformed.
    #[error(transparent)]
    Parse(#[from] DescriptionParseError),
    /// The description is well-formed but does not describe a valid DFA.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

fn number<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, DescriptionParseError> {
    let token = tokens
        .next()
        .ok_or(DescriptionParseError::MissingField(field))?;
    token
        .parse()
        .map_err(|_| DescriptionParseError::InvalidNumber {
            field,
            token: token.to_string(),
        })
}

impl Description {
    /// Parses a description from the given string.
    pub fn try_from_str(input: &str) -> Result<Self, DescriptionParseError> {
        let mut tokens = input.split_whitespace();

        let alphabet_size = number(&mut tokens, "alphabet size")?;
        let state_count = number(&mut tokens, "number of states")?;
        let initial = number(&mut tokens, "initial state")?;
        let final_count: usize = number(&mut tokens, "number of final states")?;
        let accepting = (0..final_count)
            .map(|_| number(&mut tokens, "final state"))
            .collect::<Result<Vec<StateIndex>, _>>()?;
        trace!("parsed header, {state_count} states with initial state {initial} and final states {accepting:?}");

        let mut transitions = vec![];
        while let Some(source) = tokens.next() {
            let index = transitions.len();
            let source = source
                .parse()
                .map_err(|_| DescriptionParseError::InvalidNumber {
                    field: "transition source",
                    token: source.to_string(),
                })?;
            let label = tokens
                .next()
                .ok_or(DescriptionParseError::TruncatedTransition { index })?;
            let symbol = label
                .chars()
                .exactly_one()
                .map_err(|_| DescriptionParseError::InvalidLabel(label.to_string()))?;
            if tokens.clone().next().is_none() {
                return Err(DescriptionParseError::TruncatedTransition { index });
            }
            let target = number(&mut tokens, "transition target")?;
            transitions.push(Transition::new(source, symbol, target));
        }
        debug!("parsed description with {} transitions", transitions.len());

        Ok(Self {
            alphabet_size,
            state_count,
            initial,
            accepting,
            transitions,
        })
    }

    /// Reads everything from `read` and parses it as a description.
    pub fn try_from_read<R: BufRead>(mut read: R) -> Result<Self, DescriptionParseError> {
        let mut input = String::new();
        read.read_to_string(&mut input)
            .map_err(|e| DescriptionParseError::Io(e.to_string()))?;
        Self::try_from_str(&input)
    }

    /// Reads the file at `path` and parses it as a description.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DescriptionParseError> {
        let input = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DescriptionParseError::Io(format!("{}: {e}", path.as_ref().display()))
        })?;
        Self::try_from_str(&input)
    }
}

impl FromStr for Description {
    type Err = DescriptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

/// Writes the description in the format that [`Description::try_from_str`] reads.
impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.alphabet_size)?;
        writeln!(f, "{}", self.state_count)?;
        writeln!(f, "{}", self.initial)?;
        writeln!(f, "{}", self.accepting.len())?;
        writeln!(f, "{}", self.accepting.iter().join(" "))?;
        for t in &self.transitions {
            writeln!(f, "{t}")?;
        }
        Ok(())
    }
}

/// Builds a [`DFA`] from the given description. This validates all state indices and checks that the
/// transitions are deterministic, see [`DFABuilder::build`].
pub fn build(description: &Description) -> Result<DFA, ConstructionError> {
    DFA::builder()
        .with_alphabet_size(description.alphabet_size)
        .with_state_count(description.state_count)
        .with_initial(description.initial)
        .with_accepting(description.accepting.iter().copied())
        .with_transitions(description.transitions.iter().copied())
        .build()
}

impl TryFrom<Description> for DFA {
    type Error = ConstructionError;

    fn try_from(value: Description) -> Result<Self, Self::Error> {
        build(&value)
    }
}

impl DFA {
    /// Returns the description of `self`. Building the returned description yields an automaton
    /// equal to `self`.
    pub fn to_description(&self) -> Description {
        Description {
            alphabet_size: self.alphabet_size(),
            state_count: self.state_count(),
            initial: self.initial(),
            accepting: self.accepting_states().to_vec(),
            transitions: self.transitions().iter().copied().collect(),
        }
    }

    /// Parses the file at `path` and builds the automaton it describes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(build(&Description::from_path(path)?)?)
    }
}
