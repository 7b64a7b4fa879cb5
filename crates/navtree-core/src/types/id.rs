//! Newtype wrappers around natural `i64` keys for all domain identifiers.
//!
//! Using distinct types prevents accidentally passing a `ScopeId` where a
//! `ContainerId` is expected. Identifiers serialize as bare integers so
//! fixtures and rendered trees stay readable.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from its natural key.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the natural key.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a container (album).
    ContainerId
);

define_id!(
    /// Unique identifier for a scope (gallery).
    ScopeId
);

define_id!(
    /// Unique identifier for a media object inside a container.
    MediaObjectId
);
