use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChangePasswordData {
    // A missing field is reported as a too short password, not as a bad body.
    #[serde(default)]
    pub nova_senha: Option<Secret<String>>,
}
