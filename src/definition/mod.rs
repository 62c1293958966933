//! Serializable graph definitions.
//!
//! A [`GraphDefinition`] is the plain-data form of a state graph: names,
//! descriptions, markers and destination lists, in declaration order.
//! Actions and hooks are code and are not part of it.
//!
//! Definitions go both ways. [`StateMachine::definition`] exports a frozen
//! graph for renderers and other read-only consumers, and
//! [`StateMachineBuilder::from_definition`] declares a machine from a
//! definition loaded from JSON or binary.
//!
//! [`StateMachine::definition`]: crate::engine::StateMachine::definition
//! [`StateMachineBuilder::from_definition`]: crate::builder::StateMachineBuilder::from_definition

use crate::core::{Event, State, StateGraph, Transition};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// Version identifier for definition format
pub const DEFINITION_VERSION: u32 = 1;

/// A declared name with its description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration<T> {
    pub name: T,
    #[serde(default)]
    pub description: String,
}

impl<T> Declaration<T> {
    pub fn new(name: impl Into<T>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One transition without its action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub from: State,
    pub event: Event,
    pub to: Vec<State>,
}

impl TransitionDefinition {
    pub fn is_nondeterministic(&self) -> bool {
        self.to.len() > 1
    }
}

impl<C> From<&Transition<C>> for TransitionDefinition {
    fn from(transition: &Transition<C>) -> Self {
        Self {
            from: transition.from.clone(),
            event: transition.event.clone(),
            to: transition.to.clone(),
        }
    }
}

/// Plain-data description of a state graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefinition {
    /// Definition format version
    pub version: u32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub states: Vec<Declaration<State>>,

    #[serde(default)]
    pub events: Vec<Declaration<Event>>,

    #[serde(default)]
    pub start: Vec<State>,

    #[serde(default)]
    pub end: Vec<State>,

    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
}

impl Default for GraphDefinition {
    fn default() -> Self {
        Self {
            version: DEFINITION_VERSION,
            name: String::new(),
            states: Vec::new(),
            events: Vec::new(),
            start: Vec::new(),
            end: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

impl GraphDefinition {
    /// True when any transition has more than one candidate.
    pub fn is_nondeterministic(&self) -> bool {
        self.transitions
            .iter()
            .any(TransitionDefinition::is_nondeterministic)
    }

    /// Transitions leaving `state`, in declaration order.
    pub fn transitions_from<'a>(
        &'a self,
        state: &'a State,
    ) -> impl Iterator<Item = &'a TransitionDefinition> + 'a {
        self.transitions.iter().filter(move |t| &t.from == state)
    }

    /// Description of a declared event, empty when undeclared.
    pub fn event_description(&self, event: &Event) -> &str {
        self.events
            .iter()
            .find(|d| &d.name == event)
            .map(|d| d.description.as_str())
            .unwrap_or("")
    }

    pub fn to_json(&self) -> Result<String, DefinitionError> {
        serde_json::to_string(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, DefinitionError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(json)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, DefinitionError> {
        bincode::serialize(self).map_err(|e| DefinitionError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        let definition: Self = bincode::deserialize(bytes)
            .map_err(|e| DefinitionError::DeserializationFailed(e.to_string()))?;
        definition.check_version()
    }

    fn check_version(self) -> Result<Self, DefinitionError> {
        if self.version != DEFINITION_VERSION {
            return Err(DefinitionError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }
        Ok(self)
    }
}

impl<C> From<&StateGraph<C>> for GraphDefinition {
    fn from(graph: &StateGraph<C>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            name: graph.name().to_string(),
            states: graph
                .states()
                .iter()
                .map(|(state, description)| {
                    Declaration::<State>::new(state.clone(), description.as_str())
                })
                .collect(),
            events: graph
                .events()
                .iter()
                .map(|(event, description)| {
                    Declaration::<Event>::new(event.clone(), description.as_str())
                })
                .collect(),
            start: graph.start().to_vec(),
            end: graph.end().to_vec(),
            transitions: graph.transitions().map(TransitionDefinition::from).collect(),
        }
    }
}
