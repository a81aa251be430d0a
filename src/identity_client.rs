use crate::constant::APIKEY_HEADER;
use crate::domain::{AuthenticatedUser, BearerToken, NewPassword, UserId};
use crate::error::{BizErrorEnum, IdentityProviderError};
use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client of the identity provider's auth api (`/auth/v1`).
///
/// Every call is authorized with the service role key, which grants the
/// administrative operations.
#[derive(Debug)]
pub struct IdentityClient {
    http_client: Client,
    base_url: Url,
    service_role_key: Secret<String>,
}

impl IdentityClient {
    pub fn new(
        base_url: Url,
        service_role_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, BizErrorEnum> {
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build the identity provider client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })?;
        Ok(IdentityClient {
            http_client,
            base_url,
            service_role_key,
        })
    }

    /// Resolve the owner of an access token.
    #[tracing::instrument(name = "Get user from token", skip(self, token))]
    pub async fn get_user(
        &self,
        token: &BearerToken,
    ) -> Result<AuthenticatedUser, IdentityProviderError> {
        let url = join_url(&self.base_url, "/auth/v1/user")?;
        let response = self
            .http_client
            .get(url)
            .header(APIKEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user from token: {:?}", e);
                IdentityProviderError::TransportError(e)
            })?;
        let response = reject_unless_success(response).await?;

        response.json::<AuthenticatedUser>().await.map_err(|e| {
            tracing::error!("Failed to decode user: {:?}", e);
            IdentityProviderError::DecodeResponseError(e)
        })
    }

    /// Set a new password without asking for the current one.
    #[tracing::instrument(name = "Update user password", skip(self, new_password))]
    pub async fn update_user_password(
        &self,
        user_id: &UserId,
        new_password: &NewPassword,
    ) -> Result<(), IdentityProviderError> {
        let mut url = join_url(&self.base_url, "/auth/v1/admin/users")?;
        url.path_segments_mut()
            .map_err(|_| IdentityProviderError::InvalidUrl(self.base_url.to_string()))?
            .push(user_id.as_ref());

        let request_body = UpdateUserRequest {
            password: new_password.expose_secret(),
        };
        let response = self
            .http_client
            .put(url)
            .header(APIKEY_HEADER, self.service_role_key.expose_secret())
            .bearer_auth(self.service_role_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to update user password: {:?}", e);
                IdentityProviderError::TransportError(e)
            })?;
        reject_unless_success(response).await?;

        Ok(())
    }
}

#[derive(Serialize)]
struct UpdateUserRequest<'a> {
    password: &'a str,
}

/// The provider speaks two error dialects: the auth api uses `msg` (or the
/// oauth `error`/`error_description` pair), the data api uses `message`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorResponse {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Append `path` under `base_url`, keeping any path prefix the project url has.
pub(crate) fn join_url(base_url: &Url, path: &str) -> Result<Url, IdentityProviderError> {
    let mut base = base_url.clone();
    // Without a trailing slash `Url::join` replaces the last segment
    if !base.path().ends_with('/') {
        let prefix = format!("{}/", base.path());
        base.set_path(&prefix);
    }
    base.join(path.trim_start_matches('/')).map_err(|e| {
        tracing::error!("Url failed to join {}: {:?}", path, e);
        IdentityProviderError::InvalidUrl(base_url.to_string())
    })
}

/// Turn a non 2xx response into a rejection carrying the provider's message.
pub(crate) async fn reject_unless_success(
    response: Response,
) -> Result<Response, IdentityProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(ErrorResponse::into_message);
    tracing::warn!(
        "Identity provider rejected the request: status={}, message={:?}",
        status,
        message
    );
    Err(IdentityProviderError::Rejected { status, message })
}
