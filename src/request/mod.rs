mod change_password_data;

pub use change_password_data::*;
