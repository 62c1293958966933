//! Transition records.

use super::action::{noop_action, Action, ActionFailure};
use super::ident::{Event, State};
use super::processor::EventProcessor;
use indexmap::IndexSet;
use std::fmt;
use std::sync::Arc;

/// One `(from, event)` entry of the transition table.
///
/// `to` holds every candidate destination, without duplicates. More than one
/// candidate makes the transition nondeterministic and leaves the choice to
/// the action.
pub struct Transition<C = ()> {
    pub from: State,
    pub event: Event,
    pub to: Vec<State>,
    pub action: Action<C>,
    /// Hook set used instead of the machine's default when present.
    pub processor: Option<Arc<dyn EventProcessor<C>>>,
}

impl<C: 'static> Transition<C> {
    /// Transition with the pass-through action and no hook override.
    pub fn new<I, S>(from: impl Into<State>, event: impl Into<Event>, to: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        Self {
            from: from.into(),
            event: event.into(),
            to: dedup(to.into_iter().map(Into::into)),
            action: noop_action(),
            processor: None,
        }
    }

    /// Replace the action.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &State, &Event, &[State]) -> Result<State, ActionFailure> + Send + Sync + 'static,
    {
        self.action = Arc::new(action);
        self
    }

    /// Override the machine's default hooks for this transition.
    pub fn with_processor<P>(mut self, processor: P) -> Self
    where
        P: EventProcessor<C> + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }
}

impl<C> Transition<C> {
    pub fn is_nondeterministic(&self) -> bool {
        self.to.len() > 1
    }

    /// Fold a later declaration for the same `(from, event)` into this one.
    ///
    /// Destinations accumulate (first occurrence wins); the later record's
    /// action and hooks are dropped.
    pub fn merge(&mut self, later: Transition<C>) {
        debug_assert_eq!(self.from, later.from);
        debug_assert_eq!(self.event, later.event);
        let to = std::mem::take(&mut self.to);
        self.to = dedup(to.into_iter().chain(later.to));
    }
}

/// Stable dedup keeping the first occurrence of each state.
pub(crate) fn dedup(states: impl IntoIterator<Item = State>) -> Vec<State> {
    states
        .into_iter()
        .collect::<IndexSet<State>>()
        .into_iter()
        .collect()
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            event: self.event.clone(),
            to: self.to.clone(),
            action: Arc::clone(&self.action),
            processor: self.processor.clone(),
        }
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("event", &self.event)
            .field("to", &self.to)
            .field("processor", &self.processor.is_some())
            .finish_non_exhaustive()
    }
}

impl<C> fmt::Display for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let to: Vec<&str> = self.to.iter().map(State::as_str).collect();
        write!(f, "{} --> [{}]: {}", self.from, to.join(", "), self.event)
    }
}
