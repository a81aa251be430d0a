use crate::constant::{INVALID_TOKEN_REASON, PASSWORD_CHANGED_MSG};
use crate::domain::{BearerToken, NewPassword};
use crate::error::BizErrorEnum;
use crate::identity_client::IdentityClient;
use crate::profile_store::ProfileStore;
use crate::request::ChangePasswordData;
use crate::utils;
use actix_web::{web, HttpRequest, HttpResponse};

/// Answer the browser's cors pre-flight.
pub async fn change_password_preflight() -> HttpResponse {
    utils::preflight()
}

#[tracing::instrument(
    name = "/alterar-senha: Handle change password",
    skip(request, body, identity_client, profile_store),
    fields(user_id = tracing::field::Empty)
)]
pub async fn change_password(
    request: HttpRequest,
    // The body is parsed by hand so that a malformed one still gets a json answer
    body: web::Bytes,
    identity_client: web::Data<IdentityClient>,
    profile_store: web::Data<ProfileStore>,
) -> Result<HttpResponse, BizErrorEnum> {
    let data: ChangePasswordData = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Failed to parse the request body: {:?}", e);
        BizErrorEnum::MalformedRequestBody(e)
    })?;

    // Validate the length of new password
    let new_password = NewPassword::parse(data.nova_senha)?;

    // Resolve the caller from its token
    let token = BearerToken::from_headers(request.headers())?;
    let user = identity_client.get_user(&token).await.map_err(|e| {
        BizErrorEnum::UserNotAuthenticated(
            e.reason().unwrap_or_else(|| INVALID_TOKEN_REASON.to_string()),
        )
    })?;
    tracing::Span::current().record("user_id", &tracing::field::display(&user.id));

    // Update new password
    identity_client
        .update_user_password(&user.id, &new_password)
        .await
        .map_err(|e| {
            BizErrorEnum::UpdatePasswordError(e.reason().unwrap_or_else(|| e.to_string()))
        })?;

    // The password is already changed, a stale flag must not fail the request
    if let Err(e) = profile_store.clear_temporary_password(&user.id).await {
        tracing::warn!(
            "Failed to clear the temporary password flag, keeping the new password: {:?}",
            e
        );
    }

    Ok(utils::ok_to(PASSWORD_CHANGED_MSG))
}
