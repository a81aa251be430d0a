mod change_password;
mod health_check;

// re-export
pub use change_password::*;
pub use health_check::*;
