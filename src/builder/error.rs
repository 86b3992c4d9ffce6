//! Build errors for state machine and transition builders.

use std::fmt;
use thiserror::Error;

/// A label declared more than once for the same source state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLabel {
    /// Debug rendering of the source state.
    pub state: String,
    /// Debug rendering of the repeated label.
    pub label: String,
}

impl fmt::Display for DuplicateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in state {}", self.label, self.state)
    }
}

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Duplicate labels: {}", format_duplicates(.0))]
    DuplicateLabels(Vec<DuplicateLabel>),
}

fn format_duplicates(duplicates: &[DuplicateLabel]) -> String {
    duplicates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_labels_are_listed_in_message() {
        let error = BuildError::DuplicateLabels(vec![
            DuplicateLabel {
                state: "Start".to_string(),
                label: "Any".to_string(),
            },
            DuplicateLabel {
                state: "End".to_string(),
                label: "Exact(1)".to_string(),
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Duplicate labels: Any in state Start, Exact(1) in state End"
        );
    }
}
