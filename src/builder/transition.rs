//! Builder for constructing transition records.

use crate::builder::error::BuildError;
use crate::core::{noop_action, Action, ActionFailure, Event, EventProcessor, State, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<C = ()> {
    from: Option<State>,
    event: Option<Event>,
    to: Vec<State>,
    action: Option<Action<C>>,
    processor: Option<Arc<dyn EventProcessor<C>>>,
}

impl<C: 'static> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: Vec::new(),
            action: None,
            processor: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<State>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<Event>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Add a candidate destination. At least one is required.
    pub fn to(mut self, state: impl Into<State>) -> Self {
        self.to.push(state.into());
        self
    }

    /// Add several candidate destinations.
    pub fn to_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.to.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the action (optional, defaults to pass-through).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &State, &Event, &[State]) -> Result<State, ActionFailure> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Override the machine's hooks for this transition (optional).
    pub fn processor<P>(mut self, processor: P) -> Self
    where
        P: EventProcessor<C> + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.to.is_empty() {
            return Err(BuildError::MissingDestination);
        }

        let mut transition = Transition::new(from, event, self.to);
        transition.action = self.action.unwrap_or_else(noop_action);
        transition.processor = self.processor;
        Ok(transition)
    }
}

impl<C: 'static> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
