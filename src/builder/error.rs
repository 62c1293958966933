//! Build errors for transition builders.

use thiserror::Error;

/// Errors that can occur when building transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition has no destination. Call .to(state) or .to_any(states)")]
    MissingDestination,
}
