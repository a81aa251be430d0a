/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";
pub const PROJECT_URL_ENV: &str = "PROJECT_URL";
pub const SERVICE_ROLE_KEY_ENV: &str = "SERVICE_ROLE_KEY";

/// route
pub const CHANGE_PASSWORD_PATH: &str = "/alterar-senha";

/// largest accepted request body, in bytes
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// validate new password
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// http request header's key and value
pub const APIKEY_HEADER: &str = "apikey";
pub const PREFER_HEADER: &str = "Prefer";
pub const PREFER_RETURN_MINIMAL: &str = "return=minimal";
pub const BEARER_PREFIX: &str = "Bearer ";

/// cors
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const PREFLIGHT_BODY: &str = "ok";

/// profile table
pub const PROFILE_TABLE: &str = "usuarios";

/// response message
pub const PASSWORD_CHANGED_MSG: &str = "Senha alterada com sucesso!";
pub const INVALID_TOKEN_REASON: &str = "Token inválido";
