//! Transition actions.
//!
//! An action is invoked when a transition fires. It receives the caller's
//! context, the origin state, the event and every candidate destination,
//! and decides which state the machine actually lands in.

use super::ident::{Event, State};
use std::error::Error;
use std::sync::Arc;

/// Boxed cause carried by action and hook failures.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Shared action function.
///
/// For a nondeterministic transition the action picks one member of the
/// candidate list (or any other state; the result is not checked).
pub type Action<C = ()> =
    Arc<dyn Fn(&C, &State, &Event, &[State]) -> Result<State, ActionFailure> + Send + Sync>;

/// An action failed.
///
/// Carries the state the action reported together with the cause, so the
/// caller receives both halves of the outcome.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct ActionFailure {
    pub state: State,
    pub source: BoxError,
}

impl ActionFailure {
    pub fn new(state: State, source: impl Into<BoxError>) -> Self {
        Self {
            state,
            source: source.into(),
        }
    }

    /// Failure that reports the empty state.
    pub fn without_state(source: impl Into<BoxError>) -> Self {
        Self::new(State::none(), source)
    }
}

/// The no-op pass-through action.
///
/// Returns the first candidate, or the empty state when there is none.
/// Never fails.
pub fn pass_through<C>(
    _ctx: &C,
    _from: &State,
    _event: &Event,
    to: &[State],
) -> Result<State, ActionFailure> {
    Ok(to.first().cloned().unwrap_or_default())
}

/// [`pass_through`] as a shareable [`Action`].
pub fn noop_action<C: 'static>() -> Action<C> {
    Arc::new(pass_through::<C>)
}
