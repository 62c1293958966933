//! Builder API for declaring state machines.
//!
//! This module provides fluent builders, helper constructors and a macro
//! for declaring vocabularies with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{ActionFailure, Event, State, Transition};

/// Create a deterministic transition using the pass-through action.
///
/// # Example
///
/// ```
/// use fsm_graph::builder::transition;
/// use fsm_graph::core::Transition;
///
/// let t: Transition = transition("idle", "start", "running");
/// assert_eq!(t.to_string(), "idle --> [running]: start");
/// ```
pub fn transition<C: 'static>(
    from: impl Into<State>,
    event: impl Into<Event>,
    to: impl Into<State>,
) -> Transition<C> {
    Transition::new(from, event, [to.into()])
}

/// Create a transition with several candidates and an action choosing
/// among them.
///
/// # Example
///
/// ```
/// use fsm_graph::builder::nondeterministic;
/// use fsm_graph::core::Transition;
///
/// let t: Transition = nondeterministic("review", "decide", ["approved", "rejected"], |_, _, _, to| {
///     Ok(to[0].clone())
/// });
/// assert!(t.is_nondeterministic());
/// ```
pub fn nondeterministic<C, I, S, F>(
    from: impl Into<State>,
    event: impl Into<Event>,
    to: I,
    action: F,
) -> Transition<C>
where
    C: 'static,
    I: IntoIterator<Item = S>,
    S: Into<State>,
    F: Fn(&C, &State, &Event, &[State]) -> Result<State, ActionFailure> + Send + Sync + 'static,
{
    Transition::new(from, event, to).with_action(action)
}
