use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Identifier assigned by the identity provider.
///
/// It is opaque to us: it scopes the password update and the profile
/// update, and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// The caller, as resolved from its bearer token. Lives for one request.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
}
