use reqwest::StatusCode;
use std::fmt::{Debug, Formatter};

/// A failed call to the identity provider or to its data api.
#[derive(thiserror::Error)]
pub enum IdentityProviderError {
    #[error("{}", .message.as_deref().unwrap_or("Request was rejected by the identity provider."))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Failed to reach the identity provider.")]
    TransportError(#[source] reqwest::Error),

    #[error("Url is incorrect: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode the identity provider response.")]
    DecodeResponseError(#[source] reqwest::Error),
}

impl IdentityProviderError {
    /// The explanation to show to the caller, if the provider gave one.
    pub fn reason(&self) -> Option<String> {
        match self {
            IdentityProviderError::Rejected { message, .. } => message.clone(),
            _ => Some(self.to_string()),
        }
    }

    /// The http status of a rejection, `None` if no answer came back.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            IdentityProviderError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Debug for IdentityProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
