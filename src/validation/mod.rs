//! Opt-in consistency checks for a declared graph.
//!
//! Declaration never checks transitions against the declared vocabulary,
//! and triggering only rejects the offending call. [`validate`] reports
//! every such mismatch up front, accumulating all of them with Stillwater's
//! `Validation` instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use fsm_graph::builder::{transition, StateMachineBuilder};
//! use fsm_graph::validation::validate;
//!
//! let machine = StateMachineBuilder::<()>::new("draft")
//!     .states([("a", "")])
//!     .events([("go", "")])
//!     .transition(transition("a", "go", "b"))
//!     .build();
//!
//! assert!(validate(machine.graph()).is_failure());
//! ```

use crate::core::{Event, State, StateGraph};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A mismatch between the transition table and the declared vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphIssue {
    #[error("transition {from} --{event}--> uses undeclared origin state '{from}'")]
    UndeclaredOrigin { from: State, event: Event },

    #[error("transition {from} --{event}--> uses undeclared event '{event}'")]
    UndeclaredEvent { from: State, event: Event },

    #[error("transition {from} --{event}--> targets undeclared state '{to}'")]
    UndeclaredDestination { from: State, event: Event, to: State },

    #[error("start marker '{state}' is not a declared state")]
    UndeclaredStartMarker { state: State },

    #[error("end marker '{state}' is not a declared state")]
    UndeclaredEndMarker { state: State },
}

/// Check the whole graph, collecting every issue.
pub fn validate<C>(graph: &StateGraph<C>) -> Validation<(), NonEmptyVec<GraphIssue>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<GraphIssue>>> = Vec::new();

    for transition in graph.transitions() {
        if !graph.has_state(&transition.from) {
            checks.push(Validation::fail(GraphIssue::UndeclaredOrigin {
                from: transition.from.clone(),
                event: transition.event.clone(),
            }));
        }
        if !graph.has_event(&transition.event) {
            checks.push(Validation::fail(GraphIssue::UndeclaredEvent {
                from: transition.from.clone(),
                event: transition.event.clone(),
            }));
        }
        for to in &transition.to {
            if !graph.has_state(to) {
                checks.push(Validation::fail(GraphIssue::UndeclaredDestination {
                    from: transition.from.clone(),
                    event: transition.event.clone(),
                    to: to.clone(),
                }));
            }
        }
    }

    for state in graph.start() {
        if !graph.has_state(state) {
            checks.push(Validation::fail(GraphIssue::UndeclaredStartMarker {
                state: state.clone(),
            }));
        }
    }

    for state in graph.end() {
        if !graph.has_state(state) {
            checks.push(Validation::fail(GraphIssue::UndeclaredEndMarker {
                state: state.clone(),
            }));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{transition, StateMachineBuilder};

    #[test]
    fn consistent_graph_passes() {
        let machine = StateMachineBuilder::<()>::new("ok")
            .states([("idle", ""), ("running", "")])
            .events([("start", "")])
            .start(["idle"])
            .end(["running"])
            .transition(transition("idle", "start", "running"))
            .build();

        assert!(validate(machine.graph()).is_success());
    }

    #[test]
    fn empty_graph_passes() {
        let machine = StateMachineBuilder::<()>::new("empty").build();
        assert!(validate(machine.graph()).is_success());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let machine = StateMachineBuilder::<()>::new("broken")
            .states([("a", "")])
            .events([("go", "")])
            .start(["nowhere"])
            .end(["a", "gone"])
            .transition(transition("ghost", "go", "a"))
            .transition(transition("a", "jump", "b"))
            .build();

        match validate(machine.graph()) {
            Validation::Failure(issues) => {
                assert_eq!(issues.len(), 5);
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, GraphIssue::UndeclaredOrigin { .. })));
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, GraphIssue::UndeclaredEvent { .. })));
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, GraphIssue::UndeclaredDestination { .. })));
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, GraphIssue::UndeclaredStartMarker { .. })));
                assert!(issues
                    .iter()
                    .any(|i| matches!(i, GraphIssue::UndeclaredEndMarker { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn issue_messages_name_the_transition() {
        let issue = GraphIssue::UndeclaredDestination {
            from: State::from("a"),
            event: Event::from("go"),
            to: State::from("b"),
        };
        assert_eq!(
            issue.to_string(),
            "transition a --go--> targets undeclared state 'b'"
        );
    }
}
