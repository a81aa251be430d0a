use crate::constant::{BEARER_PREFIX, INVALID_TOKEN_REASON};
use crate::error::BizErrorEnum;
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

/// The access token sent by the caller in the `Authorization` header.
#[derive(Debug)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Reads the `Authorization` header and strips the `Bearer ` scheme.
    ///
    /// A value without the scheme is passed through as-is, the identity
    /// provider is the one deciding whether it is a valid token.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, BizErrorEnum> {
        let header_value = headers
            .get(AUTHORIZATION)
            // An empty header carries no token at all
            .filter(|value| !value.is_empty())
            .ok_or(BizErrorEnum::AuthorizationTokenMissing)?
            .to_str()
            .map_err(|e| {
                tracing::warn!("The 'Authorization' header is not valid UTF8: {:?}", e);
                BizErrorEnum::UserNotAuthenticated(INVALID_TOKEN_REASON.to_string())
            })?;
        let token = header_value
            .strip_prefix(BEARER_PREFIX)
            .unwrap_or(header_value);

        Ok(Self(Secret::new(token.to_string())))
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self(Secret::new(token))
    }
}

impl ExposeSecret<String> for BearerToken {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
