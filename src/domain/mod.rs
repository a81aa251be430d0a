mod authenticated_user;
mod bearer_token;
mod new_password;

pub use authenticated_user::{AuthenticatedUser, UserId};
pub use bearer_token::BearerToken;
pub use new_password::NewPassword;
