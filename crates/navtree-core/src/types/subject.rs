//! The subject a tree is being built for.

use serde::{Deserialize, Serialize};

/// Who is looking at the tree.
///
/// Passed explicitly into every build and authorization check so that no
/// role lookup depends on ambient request state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    /// An unauthenticated visitor.
    Anonymous,
    /// A signed-in user and the role names they belong to.
    Authenticated {
        /// The username.
        username: String,
        /// Role names resolved for the user at request time.
        roles: Vec<String>,
    },
}

impl Subject {
    /// Creates an authenticated subject.
    pub fn user<I, R>(username: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::Authenticated {
            username: username.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the subject's role names (empty for anonymous visitors).
    pub fn roles(&self) -> &[String] {
        match self {
            Self::Anonymous => &[],
            Self::Authenticated { roles, .. } => roles,
        }
    }
}
