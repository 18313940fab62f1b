use std::fmt::Display;

use itertools::Itertools;

use crate::prelude::*;

/// Escapes a label so that it can be placed between double quotes in the DOT format.
fn escape_dot_label(label: &str) -> String {
    label
        .chars()
        .flat_map(|chr| match chr {
            '"' | '\\' => vec!['\\', chr],
            c => vec![c],
        })
        .collect()
}

/// Types that can be written in the DOT format of graphviz.
pub trait Dottable {
    /// Compute the graphviz representation, for more information on the DOT format,
    /// see the [graphviz documentation](https://graphviz.org/doc/info/lang.html).
    fn dot_representation(&self) -> String {
        let header = std::iter::once(format!(
            "digraph {} {{",
            self.dot_name().unwrap_or("A".to_string())
        ))
        .chain(self.dot_header_statements());

        let states = self.dot_states().into_iter().map(|q| {
            format!(
                "{} [{}]",
                self.dot_state_ident(q),
                self.dot_state_attributes(q)
                    .into_iter()
                    .map(|attr| attr.to_string())
                    .join(", ")
            )
        });

        let transitions = self.dot_transitions().into_iter().map(|t| {
            format!(
                "{} -> {} [{}]",
                self.dot_state_ident(t.source()),
                self.dot_state_ident(t.target()),
                self.dot_transition_attributes(&t)
                    .into_iter()
                    .map(|attr| attr.to_string())
                    .join(", ")
            )
        });

        header
            .chain(states)
            .chain(transitions)
            .chain(std::iter::once("}".to_string()))
            .join("\n")
    }

    /// The name of the graph.
    fn dot_name(&self) -> Option<String>;

    /// Additional statements that are placed right after the opening of the graph.
    fn dot_header_statements(&self) -> Vec<String> {
        vec![]
    }

    /// The states that become nodes of the graph.
    fn dot_states(&self) -> Vec<StateIndex>;

    /// The transitions that become edges of the graph.
    fn dot_transitions(&self) -> Vec<Transition>;

    /// The identifier of the node for the given state.
    fn dot_state_ident(&self, idx: StateIndex) -> String {
        format!("q{}", idx.show())
    }

    /// Attributes of the node for the given state.
    fn dot_state_attributes(&self, _idx: StateIndex) -> Vec<DotStateAttribute> {
        vec![]
    }

    /// Attributes of the edge for the given transition.
    fn dot_transition_attributes(&self, t: &Transition) -> Vec<DotTransitionAttribute> {
        vec![DotTransitionAttribute::Label(escape_dot_label(&t.symbol().show()))]
    }
}

impl Dottable for DFA {
    fn dot_name(&self) -> Option<String> {
        Some("DFA".into())
    }

    fn dot_header_statements(&self) -> Vec<String> {
        vec![
            "rankdir=LR".to_string(),
            "init [label=\"\", shape=none]".to_string(),
            format!("init -> {}", self.dot_state_ident(self.initial())),
        ]
    }

    fn dot_states(&self) -> Vec<StateIndex> {
        (0..self.state_count()).collect()
    }

    fn dot_transitions(&self) -> Vec<Transition> {
        self.transitions().iter().copied().collect()
    }

    fn dot_state_attributes(&self, idx: StateIndex) -> Vec<DotStateAttribute> {
        let shape = if self.is_accepting(idx) {
            "doublecircle"
        } else {
            "circle"
        };
        vec![
            DotStateAttribute::Shape(shape.into()),
            DotStateAttribute::Label(idx.show()),
        ]
    }
}

/// Enum that abstracts attributes in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotStateAttribute {
    /// The label of a node
    Label(String),
    /// The shape of a node
    Shape(String),
}

impl Display for DotStateAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStateAttribute::Label(s) => write!(f, "label=\"{}\"", s),
            DotStateAttribute::Shape(s) => write!(f, "shape=\"{}\"", s),
        }
    }
}

/// Attributes of an edge in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotTransitionAttribute {
    /// The label of an edge
    Label(String),
}

impl Display for DotTransitionAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotTransitionAttribute::Label(lbl) => write!(f, "label=\"{lbl}\""),
        }
    }
}
