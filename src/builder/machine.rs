//! Builder for declaring state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, EventProcessor, State, StateGraph, Transition};
use crate::definition::{DefinitionError, GraphDefinition, DEFINITION_VERSION};
use crate::engine::StateMachine;
use std::sync::Arc;

/// Declaration phase of a state machine.
///
/// Every setter consumes and returns the builder. [`build`](Self::build)
/// freezes the declarations into a [`StateMachine`], which has no way to
/// declare anything further.
///
/// Transitions declared more than once for the same `(from, event)` are
/// merged: destinations accumulate without duplicates, while the action and
/// hooks of the first declaration are kept. Nothing is checked against the
/// declared states and events until a trigger.
///
/// # Example
///
/// ```rust
/// use fsm_graph::builder::{transition, StateMachineBuilder};
/// use fsm_graph::core::{Event, State};
///
/// let machine = StateMachineBuilder::<()>::new("job")
///     .states([("idle", ""), ("running", ""), ("done", "")])
///     .events([("start", ""), ("finish", "")])
///     .transition(transition("idle", "start", "running"))
///     .transition(transition("running", "finish", "done"))
///     .build();
///
/// let state = machine.trigger(&(), &State::from("idle"), &Event::from("start"));
/// assert_eq!(state.unwrap(), State::from("running"));
/// ```
pub struct StateMachineBuilder<C = ()> {
    graph: StateGraph<C>,
    processor: Option<Arc<dyn EventProcessor<C>>>,
}

impl<C: 'static> StateMachineBuilder<C> {
    /// Create a new builder for a machine called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            graph: StateGraph::new(name),
            processor: None,
        }
    }

    /// Rename the machine.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.graph.set_name(name.into());
        self
    }

    /// Replace the declared states (state, description).
    pub fn states<I, K, D>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<State>,
        D: Into<String>,
    {
        self.graph.set_states(
            states
                .into_iter()
                .map(|(state, description)| (state.into(), description.into()))
                .collect(),
        );
        self
    }

    /// Declare one more state.
    pub fn state(mut self, state: impl Into<State>, description: impl Into<String>) -> Self {
        self.graph.declare_state(state.into(), description.into());
        self
    }

    /// Replace the declared events (event, description).
    pub fn events<I, K, D>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<Event>,
        D: Into<String>,
    {
        self.graph.set_events(
            events
                .into_iter()
                .map(|(event, description)| (event.into(), description.into()))
                .collect(),
        );
        self
    }

    /// Declare one more event.
    pub fn event(mut self, event: impl Into<Event>, description: impl Into<String>) -> Self {
        self.graph.declare_event(event.into(), description.into());
        self
    }

    /// Set the start markers.
    pub fn start<I, S>(mut self, start: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.graph.set_start(start.into_iter().map(Into::into).collect());
        self
    }

    /// Set the end markers.
    pub fn end<I, S>(mut self, end: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<State>,
    {
        self.graph.set_end(end.into_iter().map(Into::into).collect());
        self
    }

    /// Set the default hooks, used by every transition without its own.
    pub fn processor<P>(mut self, processor: P) -> Self
    where
        P: EventProcessor<C> + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// Declare a transition, merging with any earlier one for the same
    /// `(from, event)`.
    pub fn transition(mut self, transition: Transition<C>) -> Self {
        self.graph.add_transition(transition);
        self
    }

    /// Declare several transitions in order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<C>>,
    {
        for transition in transitions {
            self.graph.add_transition(transition);
        }
        self
    }

    /// Declare a transition from a builder.
    /// Returns an error if the builder fails validation.
    pub fn try_transition(self, builder: TransitionBuilder<C>) -> Result<Self, BuildError> {
        Ok(self.transition(builder.build()?))
    }

    /// Declare everything described by `definition`.
    ///
    /// Transitions use the pass-through action and the machine's default
    /// hooks.
    pub fn from_definition(definition: &GraphDefinition) -> Result<Self, DefinitionError> {
        if definition.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: definition.version,
                supported: DEFINITION_VERSION,
            });
        }

        let builder = Self::new(definition.name.clone())
            .states(
                definition
                    .states
                    .iter()
                    .map(|d| (d.name.clone(), d.description.clone())),
            )
            .events(
                definition
                    .events
                    .iter()
                    .map(|d| (d.name.clone(), d.description.clone())),
            )
            .start(definition.start.iter().cloned())
            .end(definition.end.iter().cloned())
            .transitions(
                definition
                    .transitions
                    .iter()
                    .map(|t| Transition::new(t.from.clone(), t.event.clone(), t.to.iter().cloned())),
            );
        Ok(builder)
    }

    /// Freeze the declarations.
    pub fn build(self) -> StateMachine<C> {
        tracing::debug!(
            machine = %self.graph.name(),
            states = self.graph.states().len(),
            events = self.graph.events().len(),
            transitions = self.graph.transitions().count(),
            "state machine built"
        );
        StateMachine::new(self.graph, self.processor)
    }
}

impl<C: 'static> Default for StateMachineBuilder<C> {
    fn default() -> Self {
        Self::new("")
    }
}
