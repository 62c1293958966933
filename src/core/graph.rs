//! The state graph: vocabularies, markers and the transition table.

use super::ident::{Event, State};
use super::transition::{dedup, Transition};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Transition table keyed by origin state, then event.
pub type TransitionTable<C> = IndexMap<State, IndexMap<Event, Transition<C>>>;

/// Declared vocabulary and transition table of a machine.
///
/// Every map keeps insertion order, so anything derived from the graph
/// (definitions, diagrams) comes out in declaration order.
pub struct StateGraph<C = ()> {
    name: String,
    states: IndexMap<State, String>,
    events: IndexMap<Event, String>,
    start: Vec<State>,
    end: Vec<State>,
    transitions: TransitionTable<C>,
}

impl<C> StateGraph<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: IndexMap::new(),
            events: IndexMap::new(),
            start: Vec::new(),
            end: Vec::new(),
            transitions: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared states with their descriptions.
    pub fn states(&self) -> &IndexMap<State, String> {
        &self.states
    }

    /// Declared events with their descriptions.
    pub fn events(&self) -> &IndexMap<Event, String> {
        &self.events
    }

    pub fn start(&self) -> &[State] {
        &self.start
    }

    pub fn end(&self) -> &[State] {
        &self.end
    }

    pub fn table(&self) -> &TransitionTable<C> {
        &self.transitions
    }

    pub fn has_state(&self, state: &State) -> bool {
        self.states.contains_key(state)
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.contains_key(event)
    }

    /// The record stored for `(from, event)`, if any.
    pub fn transition(&self, from: &State, event: &Event) -> Option<&Transition<C>> {
        self.transitions.get(from)?.get(event)
    }

    /// Every record in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<C>> {
        self.transitions.values().flat_map(IndexMap::values)
    }

    /// True when any record has more than one candidate destination.
    pub fn is_nondeterministic(&self) -> bool {
        self.transitions().any(Transition::is_nondeterministic)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_states(&mut self, states: IndexMap<State, String>) {
        self.states = states;
    }

    pub(crate) fn declare_state(&mut self, state: State, description: String) {
        self.states.insert(state, description);
    }

    pub(crate) fn set_events(&mut self, events: IndexMap<Event, String>) {
        self.events = events;
    }

    pub(crate) fn declare_event(&mut self, event: Event, description: String) {
        self.events.insert(event, description);
    }

    pub(crate) fn set_start(&mut self, start: Vec<State>) {
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: Vec<State>) {
        self.end = end;
    }

    /// Store or merge one record.
    ///
    /// Nothing is checked against the vocabularies here. Records without
    /// destinations are never stored.
    pub(crate) fn add_transition(&mut self, mut transition: Transition<C>) {
        if transition.to.is_empty() {
            tracing::trace!(
                graph = %self.name,
                from = %transition.from,
                event = %transition.event,
                "skipping transition without destinations"
            );
            return;
        }

        let events = self
            .transitions
            .entry(transition.from.clone())
            .or_default();

        match events.entry(transition.event.clone()) {
            Entry::Occupied(mut existing) => {
                tracing::trace!(
                    graph = %self.name,
                    from = %transition.from,
                    event = %transition.event,
                    "merging destinations into existing transition"
                );
                existing.get_mut().merge(transition);
            }
            Entry::Vacant(slot) => {
                transition.to = dedup(transition.to);
                slot.insert(transition);
            }
        }
    }
}

impl<C> Default for StateGraph<C> {
    fn default() -> Self {
        Self::new("")
    }
}
