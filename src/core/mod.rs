//! Core data model of the state machine.
//!
//! This module contains the declarative parts of a machine:
//! - `State` and `Event` identifiers
//! - Actions and the lifecycle hook trait
//! - Transition records and their merge rule
//! - The state graph holding vocabularies and the transition table
//!
//! Nothing here fires transitions; that lives in [`crate::engine`].

mod action;
mod graph;
mod ident;
mod processor;
mod transition;

pub use action::{noop_action, pass_through, Action, ActionFailure, BoxError};
pub use graph::{StateGraph, TransitionTable};
pub use ident::{Event, State, MARKER};
pub use processor::{EventProcessor, HookError, NoopProcessor};
pub use transition::Transition;
