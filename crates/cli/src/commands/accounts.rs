//! Account tooling.
//!
//! # Usage
//!
//! ```bash
//! # Produce an Argon2id hash suitable for seeding an account
//! op-cli accounts hash-password -p secret
//!
//! # Show the demo accounts both binaries seed at startup
//! op-cli accounts list
//! ```

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors from account tooling.
#[derive(Debug, Error)]
pub enum AccountsError {
    /// Hashing failed.
    #[error("Password hashing failed: {0}")]
    Hash(String),

    /// The password is too short to be worth hashing.
    #[error("Password must be at least {0} characters")]
    TooShort(usize),
}

const MIN_PASSWORD_LEN: usize = 8;

/// Hash a password with Argon2id and print the PHC string.
///
/// Uses the same defaults the storefront and admin login paths verify
/// against, so the output can be pasted straight into a seeded account.
pub fn hash_password(password: &str) -> Result<(), AccountsError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AccountsError::TooShort(MIN_PASSWORD_LEN));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AccountsError::Hash(e.to_string()))?;

    println!("{hash}");
    Ok(())
}

/// Print the demo accounts each binary seeds at startup.
pub fn list() {
    println!("Storefront (port 3000)");
    println!(
        "  customer  {}  {}",
        overland_storefront::services::accounts::DEMO_EMAIL,
        overland_storefront::services::accounts::DEMO_PASSWORD,
    );
    println!("Admin (port 3001)");
    println!(
        "  admin     {}  {}",
        overland_admin::services::directory::DEMO_EMAIL,
        overland_admin::services::directory::DEMO_PASSWORD,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        assert!(matches!(
            hash_password("short"),
            Err(AccountsError::TooShort(_))
        ));
    }

    #[test]
    fn test_hash_password_accepts_demo_length() {
        hash_password("password123").unwrap();
    }
}
