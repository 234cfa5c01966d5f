pub mod address;
pub mod validator;

pub use address::EmailAddress;
pub use validator::{validate_email, validate_optional, validate_value};
