//! Trigger engine.
//!
//! Fires transitions on a frozen [`StateMachine`]. Each trigger is an
//! independent, synchronous evaluation:
//!
//! 1. reject undeclared states and events
//! 2. look up the transition for `(from, event)`
//! 3. pick the hook set (transition override, else machine default)
//! 4. `on_exit`, then the action, then `on_action_failure` or `on_enter`
//!
//! Hook errors never reach the caller. The engine holds no locks and keeps
//! no per-call state; concurrency comes from the caller.

mod error;
mod machine;

pub use error::TriggerError;
pub use machine::StateMachine;
