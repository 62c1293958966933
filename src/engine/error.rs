//! Trigger failures.

use crate::core::{BoxError, Event, State};
use thiserror::Error;

/// Errors returned by [`StateMachine::trigger`](crate::engine::StateMachine::trigger).
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("state machine has no state '{state}'")]
    UnknownState { state: State },

    #[error("state machine has no event '{event}'")]
    UnknownEvent { event: Event },

    #[error("no transition defined [{from} --{event}--> ???]")]
    UndefinedTransition { from: State, event: Event },

    /// The action failed. `state` is whatever the action reported.
    #[error("transition action failed: {source}")]
    Action { state: State, source: BoxError },
}

impl TriggerError {
    /// The state half of the outcome.
    ///
    /// The action's reported state for [`TriggerError::Action`], the empty
    /// state for everything else.
    pub fn state(&self) -> State {
        match self {
            Self::Action { state, .. } => state.clone(),
            _ => State::none(),
        }
    }

    pub fn is_action_failure(&self) -> bool {
        matches!(self, Self::Action { .. })
    }
}
