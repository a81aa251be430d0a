use crate::constant::{APIKEY_HEADER, PREFER_HEADER, PREFER_RETURN_MINIMAL, PROFILE_TABLE};
use crate::domain::UserId;
use crate::error::{BizErrorEnum, IdentityProviderError};
use crate::identity_client::{join_url, reject_unless_success};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

/// Client of the provider's data api (`/rest/v1`), scoped to the profile table.
///
/// The table is expected to be keyed by the identity provider's user id.
#[derive(Debug)]
pub struct ProfileStore {
    http_client: Client,
    base_url: Url,
    service_role_key: Secret<String>,
}

impl ProfileStore {
    pub fn new(
        base_url: Url,
        service_role_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, BizErrorEnum> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build the profile store client: {:?}", e);
                BizErrorEnum::BuildHttpClientError(e)
            })?;
        Ok(ProfileStore {
            http_client,
            base_url,
            service_role_key,
        })
    }

    /// Mark the user's password as chosen by the user.
    #[tracing::instrument(name = "Clear temporary password flag", skip(self))]
    pub async fn clear_temporary_password(
        &self,
        user_id: &UserId,
    ) -> Result<(), IdentityProviderError> {
        let url = join_url(&self.base_url, &format!("/rest/v1/{}", PROFILE_TABLE))?;
        let response = self
            .http_client
            .patch(url)
            .query(&[("id", format!("eq.{}", user_id))])
            .header(APIKEY_HEADER, self.service_role_key.expose_secret())
            .header(PREFER_HEADER, PREFER_RETURN_MINIMAL)
            .bearer_auth(self.service_role_key.expose_secret())
            .json(&ProfilePatch {
                senha_temporaria: false,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to update {}: {:?}", PROFILE_TABLE, e);
                IdentityProviderError::TransportError(e)
            })?;
        reject_unless_success(response).await?;

        Ok(())
    }
}

#[derive(Serialize)]
struct ProfilePatch {
    senha_temporaria: bool,
}
