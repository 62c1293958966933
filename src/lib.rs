//! fsm-graph: declarative finite state machines
//!
//! A machine is declared once (states, events, start and end markers and a
//! transition table) and then triggered any number of times, from any number
//! of threads. A transition may list several candidate destinations; its
//! action decides at runtime where the machine actually goes.
//!
//! # Core Concepts
//!
//! - **Transition**: `(from, event)` mapped to candidate destinations, an
//!   action and optional hooks. Repeated declarations merge their
//!   destinations.
//! - **Hooks**: `on_exit`, `on_action_failure` and `on_enter` run around
//!   every action. Their errors are logged and ignored.
//! - **Trigger**: validates the state and event against the declared
//!   vocabulary, runs hooks and action, returns the new state or a typed
//!   error.
//!
//! # Example
//!
//! ```rust
//! use fsm_graph::builder::{nondeterministic, transition, StateMachineBuilder};
//! use fsm_graph::core::{Event, State};
//! use fsm_graph::engine::TriggerError;
//!
//! let machine = StateMachineBuilder::<()>::new("job")
//!     .states([("idle", ""), ("running", ""), ("done", ""), ("failed", "")])
//!     .events([("start", ""), ("finish", "")])
//!     .transition(transition("idle", "start", "running"))
//!     .transition(nondeterministic("running", "finish", ["done", "failed"], |_, _, _, to| {
//!         Ok(to[0].clone())
//!     }))
//!     .build();
//!
//! let running = machine.trigger(&(), &State::from("idle"), &Event::from("start")).unwrap();
//! let done = machine.trigger(&(), &running, &Event::from("finish")).unwrap();
//! assert_eq!(done, State::from("done"));
//!
//! let err = machine.trigger(&(), &done, &Event::from("start")).unwrap_err();
//! assert!(matches!(err, TriggerError::UndefinedTransition { .. }));
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod engine;
pub mod render;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{StateMachineBuilder, TransitionBuilder};
pub use crate::core::{ActionFailure, Event, EventProcessor, NoopProcessor, State, Transition};
pub use crate::definition::GraphDefinition;
pub use crate::engine::{StateMachine, TriggerError};
