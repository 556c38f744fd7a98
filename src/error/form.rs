use thiserror::Error;

/// Reasons a registration or login submit is rejected.
///
/// Only the first failing rule is reported; the form stays editable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email and password are required")]
    MissingRequired,

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("a CRECI license is required for realtors")]
    MissingLicense,
}
