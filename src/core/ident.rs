//! Opaque identifiers for states and events.
//!
//! Both are thin wrappers around a string token. Two identifiers are equal
//! exactly when their tokens are equal.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Pseudo-state used for start and end markers when rendering a graph.
pub const MARKER: &str = "[*]";

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like token.
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// The raw token.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True for the empty token.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self(token.to_string())
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }

        impl From<&String> for $name {
            fn from(token: &String) -> Self {
                Self(token.clone())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier! {
    /// A state of the machine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm_graph::core::State;
    ///
    /// let idle = State::from("idle");
    /// assert_eq!(idle, "idle");
    /// assert!(State::none().is_none());
    /// ```
    State
}

identifier! {
    /// An event that may fire a transition.
    Event
}

impl State {
    /// The empty state, returned alongside every failure that is not an
    /// action failure.
    pub fn none() -> Self {
        Self::default()
    }

    /// True for the empty state.
    pub fn is_none(&self) -> bool {
        self.is_empty()
    }
}
