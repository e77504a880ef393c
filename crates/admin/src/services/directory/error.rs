//! Admin directory error types.

use thiserror::Error;

/// Errors that can occur during admin directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] overland_core::EmailError),

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No admin with the given ID.
    #[error("admin user not found")]
    UserNotFound,

    /// An admin with this email is already enrolled.
    #[error("email already enrolled")]
    EmailTaken,

    /// Password hashing or verification failed to complete.
    #[error("credential verification failed: {0}")]
    Verification(String),
}
