use crate::constant::MIN_PASSWORD_LENGTH;
use crate::error::BizErrorEnum;
use secrecy::{ExposeSecret, Secret};

/// A new password that passed the length check.
///
/// Strength rules beyond the minimum length are left to the identity provider.
#[derive(Debug)]
pub struct NewPassword(Secret<String>);

impl NewPassword {
    /// `None` is the password field missing from the request body,
    /// which is rejected the same way as a too short one.
    pub fn parse(password: Option<Secret<String>>) -> Result<Self, BizErrorEnum> {
        let password = password.ok_or(BizErrorEnum::NewPasswordTooShort)?;

        // Length in utf-16 code units, what the web clients measure too.
        if password.expose_secret().encode_utf16().count() < MIN_PASSWORD_LENGTH {
            return Err(BizErrorEnum::NewPasswordTooShort);
        }

        Ok(Self(password))
    }
}

impl ExposeSecret<String> for NewPassword {
    fn expose_secret(&self) -> &String {
        self.0.expose_secret()
    }
}
