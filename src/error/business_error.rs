use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE REQUEST
    // The parser message is what the caller sees
    #[error("{0}")]
    MalformedRequestBody(serde_json::Error),

    #[error("Request body is larger than {0} bytes.")]
    RequestBodyTooLarge(usize),

    #[error("A nova senha deve ter pelo menos 6 caracteres")]
    NewPasswordTooShort,

    // VALIDATE AUTH
    #[error("Token de autenticação não encontrado")]
    AuthorizationTokenMissing,

    #[error("Usuário não autenticado: {0}")]
    UserNotAuthenticated(String),

    // IDENTITY PROVIDER
    #[error("Erro ao atualizar senha: {0}")]
    UpdatePasswordError(String),

    // VALIDATE URL
    #[error("Url is incorrect: {0}")]
    ParseUrlError(String),

    // OTHER
    #[error("Failed to build the http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for BizErrorEnum {
    fn status_code(&self) -> StatusCode {
        match self {
            BizErrorEnum::AuthorizationTokenMissing | BizErrorEnum::UserNotAuthenticated(_) => {
                StatusCode::UNAUTHORIZED
            }

            BizErrorEnum::MalformedRequestBody(_)
            | BizErrorEnum::RequestBodyTooLarge(_)
            | BizErrorEnum::NewPasswordTooShort
            | BizErrorEnum::UpdatePasswordError(_) => StatusCode::BAD_REQUEST,

            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Callers always get a json body, never a bare status.
    fn error_response(&self) -> HttpResponse<BoxBody> {
        utils::error_to(self.status_code(), self.to_string())
    }
}
