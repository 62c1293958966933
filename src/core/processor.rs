//! Lifecycle hooks invoked around a transition action.
//!
//! Hooks are observational. Whatever they return is logged and then
//! dropped; a failing hook never changes the outcome of a trigger.

use super::action::{ActionFailure, BoxError};
use super::ident::{Event, State};
use std::sync::Arc;

/// Error returned by a hook.
pub type HookError = BoxError;

/// Exit / failure / enter callbacks for a transition.
///
/// Every method has a no-op default, so an implementation only overrides
/// the hooks it cares about.
///
/// # Example
///
/// ```rust
/// use fsm_graph::core::{EventProcessor, HookError, State};
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// #[derive(Default)]
/// struct EnterCounter(AtomicUsize);
///
/// impl EventProcessor for EnterCounter {
///     fn on_enter(&self, _ctx: &(), _state: &State) -> Result<(), HookError> {
///         self.0.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     }
/// }
/// ```
pub trait EventProcessor<C = ()>: Send + Sync {
    /// Called before the action runs.
    fn on_exit(&self, _ctx: &C, _state: &State, _event: &Event) -> Result<(), HookError> {
        Ok(())
    }

    /// Called when the action fails, with the full candidate list.
    fn on_action_failure(
        &self,
        _ctx: &C,
        _from: &State,
        _event: &Event,
        _to: &[State],
        _failure: &ActionFailure,
    ) -> Result<(), HookError> {
        Ok(())
    }

    /// Called with the state the action returned.
    fn on_enter(&self, _ctx: &C, _state: &State) -> Result<(), HookError> {
        Ok(())
    }
}

/// Hook set whose callbacks all succeed without doing anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopProcessor;

impl<C> EventProcessor<C> for NoopProcessor {}

impl<C, P> EventProcessor<C> for Arc<P>
where
    P: EventProcessor<C> + ?Sized,
{
    fn on_exit(&self, ctx: &C, state: &State, event: &Event) -> Result<(), HookError> {
        (**self).on_exit(ctx, state, event)
    }

    fn on_action_failure(
        &self,
        ctx: &C,
        from: &State,
        event: &Event,
        to: &[State],
        failure: &ActionFailure,
    ) -> Result<(), HookError> {
        (**self).on_action_failure(ctx, from, event, to, failure)
    }

    fn on_enter(&self, ctx: &C, state: &State) -> Result<(), HookError> {
        (**self).on_enter(ctx, state)
    }
}
