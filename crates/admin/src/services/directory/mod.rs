//! Admin user directory.
//!
//! The back office has no self-service registration: the directory is built
//! at startup from the seed list and never grows at runtime. Password hashes
//! use Argon2id, and verification runs on the blocking pool under a timeout
//! so a slow hash can never wedge the request path.

mod error;

pub use error::DirectoryError;

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use overland_core::{AdminRole, AdminUserId, Email};

use crate::models::AdminUser;

/// Upper bound for a single hash or verify on the blocking pool.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Demo admin email, enrolled at startup.
pub const DEMO_EMAIL: &str = "admin@overlandparts.ie";

/// Demo admin password.
pub const DEMO_PASSWORD: &str = "admin123";

/// One enrolled admin: profile plus password hash.
#[derive(Debug, Clone)]
struct DirectoryEntry {
    user: AdminUser,
    password_hash: String,
}

/// In-memory admin user directory.
///
/// Handlers receive this through [`crate::state::AppState`], so tests can
/// construct a directory directly and drive it without a server.
#[derive(Debug)]
pub struct AdminDirectory {
    entries: RwLock<Vec<DirectoryEntry>>,
}

impl AdminDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a directory seeded with the demo admin account.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::Verification` if hashing the demo password
    /// fails (an OS entropy failure, in practice).
    pub fn seeded() -> Result<Self, DirectoryError> {
        let directory = Self::empty();
        directory.enroll(
            AdminUser {
                id: AdminUserId::new(1),
                email: Email::parse(DEMO_EMAIL)?,
                name: "Admin User".to_owned(),
                role: AdminRole::Admin,
                avatar: None,
            },
            DEMO_PASSWORD,
        )?;
        Ok(directory)
    }

    /// Enroll an admin with the given password.
    ///
    /// This is seeding machinery, not self-service registration: it hashes
    /// synchronously and is meant to run at construction time.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::EmailTaken` if the address is already
    /// enrolled, or `DirectoryError::Verification` if hashing fails.
    pub fn enroll(&self, user: AdminUser, password: &str) -> Result<(), DirectoryError> {
        let password_hash = hash_password(password)?;
        let mut entries = self.write();
        if entries
            .iter()
            .any(|entry| entry.user.email.matches(user.email.as_str()))
        {
            return Err(DirectoryError::EmailTaken);
        }
        entries.push(DirectoryEntry {
            user,
            password_hash,
        });
        Ok(())
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidCredentials` for an unknown email or
    /// a wrong password, `DirectoryError::InvalidEmail` for a malformed
    /// address, and `DirectoryError::Verification` if the hash check cannot
    /// complete.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, DirectoryError> {
        let email = Email::parse(email)?;

        // Clone out what the blocking task needs; the lock is never held
        // across an await.
        let (user, password_hash) = {
            let entries = self.read();
            let entry = entries
                .iter()
                .find(|entry| entry.user.email.matches(email.as_str()))
                .ok_or(DirectoryError::InvalidCredentials)?;
            (entry.user.clone(), entry.password_hash.clone())
        };

        let password = password.to_owned();
        run_blocking(move || verify_password(&password, &password_hash)).await?;

        Ok(user)
    }

    /// Look up an admin by ID.
    #[must_use]
    pub fn get(&self, id: AdminUserId) -> Option<AdminUser> {
        self.read()
            .iter()
            .find(|entry| entry.user.id == id)
            .map(|entry| entry.user.clone())
    }

    /// Number of enrolled admins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the directory holds no admins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock still holds internally consistent data here: the only
    // write is a single push. Recover the guard.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<DirectoryEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<DirectoryEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Run an Argon2 operation on the blocking pool with a deadline.
async fn run_blocking<T, F>(f: F) -> Result<T, DirectoryError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, DirectoryError> + Send + 'static,
{
    tokio::time::timeout(VERIFY_TIMEOUT, tokio::task::spawn_blocking(f))
        .await
        .map_err(|_| DirectoryError::Verification("password check timed out".to_owned()))?
        .map_err(|e| DirectoryError::Verification(format!("password check task failed: {e}")))?
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, DirectoryError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DirectoryError::Verification(format!("hashing failed: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), DirectoryError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| DirectoryError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| DirectoryError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn manager() -> AdminUser {
        AdminUser {
            id: AdminUserId::new(2),
            email: Email::parse("manager@overlandparts.ie").unwrap(),
            name: "Store Manager".to_owned(),
            role: AdminRole::Manager,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn test_demo_login_succeeds() {
        let directory = AdminDirectory::seeded().unwrap();
        let admin = directory.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        assert_eq!(admin.id, AdminUserId::new(1));
        assert_eq!(admin.role, AdminRole::Admin);
        assert_eq!(admin.name, "Admin User");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let directory = AdminDirectory::seeded().unwrap();
        let err = directory.login(DEMO_EMAIL, "letmein").await;
        assert!(matches!(err, Err(DirectoryError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let directory = AdminDirectory::seeded().unwrap();
        let err = directory.login("nobody@overlandparts.ie", DEMO_PASSWORD).await;
        assert!(matches!(err, Err(DirectoryError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let directory = AdminDirectory::seeded().unwrap();
        let admin = directory
            .login("Admin@OverlandParts.IE", DEMO_PASSWORD)
            .await
            .unwrap();
        assert_eq!(admin.id, AdminUserId::new(1));
    }

    #[tokio::test]
    async fn test_enrolled_manager_can_log_in() {
        let directory = AdminDirectory::seeded().unwrap();
        directory.enroll(manager(), "floor-plan-042").unwrap();

        let admin = directory
            .login("manager@overlandparts.ie", "floor-plan-042")
            .await
            .unwrap();
        assert_eq!(admin.role, AdminRole::Manager);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_duplicate_enrollment_rejected() {
        let directory = AdminDirectory::seeded().unwrap();
        let dup = AdminUser {
            id: AdminUserId::new(9),
            email: Email::parse("ADMIN@overlandparts.ie").unwrap(),
            name: "Impostor".to_owned(),
            role: AdminRole::Manager,
            avatar: None,
        };
        let err = directory.enroll(dup, "whatever99");
        assert!(matches!(err, Err(DirectoryError::EmailTaken)));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let directory = AdminDirectory::seeded().unwrap();
        assert!(directory.get(AdminUserId::new(1)).is_some());
        assert!(directory.get(AdminUserId::new(42)).is_none());
    }
}
