//! Customer account registry.
//!
//! Accounts live in process memory: the registry is seeded with one demo
//! customer at startup and grows as visitors register. Password hashes use
//! Argon2id, and verification runs on the blocking pool under a timeout so a
//! slow hash can never wedge the request path.

mod error;

pub use error::AccountError;

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::TimeZone;
use chrono::Utc;

use overland_core::{CustomerId, Email};

use crate::models::customer::{Customer, ProfileUpdate};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Upper bound for a single hash or verify on the blocking pool.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Demo account email, pre-registered at startup.
pub const DEMO_EMAIL: &str = "customer@example.com";

/// Demo account password.
pub const DEMO_PASSWORD: &str = "password123";

/// A new account registration request.
#[derive(Debug, Clone, Copy)]
pub struct NewAccount<'a> {
    /// Email address (validated on registration).
    pub email: &'a str,
    /// Plain-text password (validated and hashed, never stored).
    pub password: &'a str,
    /// First name.
    pub first_name: &'a str,
    /// Last name.
    pub last_name: &'a str,
    /// Optional phone number.
    pub phone: Option<&'a str>,
}

/// One stored account: profile plus password hash.
#[derive(Debug, Clone)]
struct AccountRecord {
    customer: Customer,
    password_hash: String,
}

#[derive(Debug)]
struct RegistryInner {
    accounts: Vec<AccountRecord>,
    next_id: CustomerId,
}

/// In-memory customer account store.
///
/// Handlers receive this through [`crate::state::AppState`], so tests can
/// construct a registry directly and drive it without a server.
#[derive(Debug)]
pub struct AccountRegistry {
    inner: RwLock<RegistryInner>,
}

impl AccountRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                accounts: Vec::new(),
                next_id: CustomerId::new(1),
            }),
        }
    }

    /// Create a registry seeded with the demo customer account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Verification` if hashing the demo password
    /// fails (an OS entropy failure, in practice).
    pub fn with_demo_account() -> Result<Self, AccountError> {
        let email = Email::parse(DEMO_EMAIL)?;
        let password_hash = hash_password(DEMO_PASSWORD)?;
        let registry = Self::empty();
        {
            let mut inner = registry.write();
            inner.accounts.push(AccountRecord {
                customer: demo_customer(email),
                password_hash,
            });
            inner.next_id = CustomerId::new(2);
        }
        Ok(registry)
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidCredentials` for an unknown email or a
    /// wrong password, `AccountError::InvalidEmail` for a malformed address,
    /// and `AccountError::Verification` if the hash check cannot complete.
    pub async fn login(&self, email: &str, password: &str) -> Result<Customer, AccountError> {
        let email = Email::parse(email)?;

        // Clone out what the blocking task needs; the lock is never held
        // across an await.
        let (customer, password_hash) = {
            let inner = self.read();
            let record = inner
                .accounts
                .iter()
                .find(|record| record.customer.email.matches(email.as_str()))
                .ok_or(AccountError::InvalidCredentials)?;
            (record.customer.clone(), record.password_hash.clone())
        };

        let password = password.to_owned();
        run_blocking(move || verify_password(&password, &password_hash)).await?;

        Ok(customer)
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InvalidEmail` for a malformed address,
    /// `AccountError::WeakPassword` if the password is too short,
    /// `AccountError::EmailTaken` if the address is already registered, and
    /// `AccountError::Verification` if hashing cannot complete.
    pub async fn register(&self, new: NewAccount<'_>) -> Result<Customer, AccountError> {
        let email = Email::parse(new.email)?;
        validate_password(new.password)?;

        if self.email_registered(email.as_str()) {
            return Err(AccountError::EmailTaken);
        }

        let password = new.password.to_owned();
        let password_hash = run_blocking(move || hash_password(&password)).await?;

        let customer = {
            let mut inner = self.write();
            // Re-check under the write lock: a concurrent registration for
            // the same address may have landed while we were hashing.
            if inner
                .accounts
                .iter()
                .any(|record| record.customer.email.matches(email.as_str()))
            {
                return Err(AccountError::EmailTaken);
            }

            let customer = Customer {
                id: inner.next_id,
                email,
                first_name: new.first_name.trim().to_owned(),
                last_name: new.last_name.trim().to_owned(),
                phone: new.phone.map(str::to_owned).filter(|p| !p.is_empty()),
                date_of_birth: None,
                gender: None,
                avatar: None,
                is_verified: false,
                created_at: Utc::now(),
            };
            inner.next_id = inner.next_id.next();
            inner.accounts.push(AccountRecord {
                customer: customer.clone(),
                password_hash,
            });
            customer
        };

        Ok(customer)
    }

    /// Apply a partial profile update and return the updated customer.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::AccountNotFound` if no account has this ID.
    pub fn update_profile(
        &self,
        id: CustomerId,
        update: &ProfileUpdate,
    ) -> Result<Customer, AccountError> {
        let mut inner = self.write();
        let record = inner
            .accounts
            .iter_mut()
            .find(|record| record.customer.id == id)
            .ok_or(AccountError::AccountNotFound)?;

        update.apply_to(&mut record.customer);
        Ok(record.customer.clone())
    }

    /// Look up a customer by ID.
    #[must_use]
    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.read()
            .accounts
            .iter()
            .find(|record| record.customer.id == id)
            .map(|record| record.customer.clone())
    }

    /// Whether an account with this email exists (case-insensitive).
    #[must_use]
    pub fn email_registered(&self, email: &str) -> bool {
        self.read()
            .accounts
            .iter()
            .any(|record| record.customer.email.matches(email))
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().accounts.len()
    }

    /// Whether the registry holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().accounts.is_empty()
    }

    // A poisoned lock still holds internally consistent data here: every
    // write is a single push or field assignment. Recover the guard.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The demo customer profile seeded at startup.
fn demo_customer(email: Email) -> Customer {
    Customer {
        id: CustomerId::new(1),
        email,
        first_name: "John".to_owned(),
        last_name: "Smith".to_owned(),
        phone: Some("+353 1 234 5678".to_owned()),
        date_of_birth: None,
        gender: None,
        avatar: None,
        is_verified: true,
        created_at: Utc
            .with_ymd_and_hms(2023, 6, 15, 10, 0, 0)
            .single()
            .unwrap_or_default(),
    }
}

/// Run an Argon2 operation on the blocking pool with a deadline.
async fn run_blocking<T, F>(f: F) -> Result<T, AccountError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, AccountError> + Send + 'static,
{
    tokio::time::timeout(VERIFY_TIMEOUT, tokio::task::spawn_blocking(f))
        .await
        .map_err(|_| AccountError::Verification("password check timed out".to_owned()))?
        .map_err(|e| AccountError::Verification(format!("password check task failed: {e}")))?
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AccountError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Verification(format!("hashing failed: {e}")))
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AccountError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AccountError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AccountError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_account<'a>(email: &'a str, password: &'a str) -> NewAccount<'a> {
        NewAccount {
            email,
            password,
            first_name: "Test",
            last_name: "User",
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_demo_login_succeeds() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let customer = registry.login(DEMO_EMAIL, DEMO_PASSWORD).await.unwrap();

        assert_eq!(customer.id, CustomerId::new(1));
        assert_eq!(customer.full_name(), "John Smith");
        assert!(customer.is_verified);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let err = registry.login(DEMO_EMAIL, "wrong-password").await;
        assert!(matches!(err, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let err = registry.login("nobody@example.com", DEMO_PASSWORD).await;
        assert!(matches!(err, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let customer = registry
            .login("Customer@Example.COM", DEMO_PASSWORD)
            .await
            .unwrap();
        assert_eq!(customer.id, CustomerId::new(1));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let created = registry
            .register(new_account("sarah@example.com", "supersafe99"))
            .await
            .unwrap();

        assert_eq!(created.id, CustomerId::new(2));
        assert!(!created.is_verified);

        let logged_in = registry
            .login("sarah@example.com", "supersafe99")
            .await
            .unwrap();
        assert_eq!(logged_in.id, created.id);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_rejected() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let err = registry
            .register(new_account("CUSTOMER@example.com", "supersafe99"))
            .await;
        assert!(matches!(err, Err(AccountError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_register_weak_password_rejected() {
        let registry = AccountRegistry::empty();
        let err = registry.register(new_account("a@b.com", "short")).await;
        assert!(matches!(err, Err(AccountError::WeakPassword(_))));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_register_invalid_email_rejected() {
        let registry = AccountRegistry::empty();
        let err = registry.register(new_account("not-an-email", "supersafe99")).await;
        assert!(matches!(err, Err(AccountError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn test_register_assigns_sequential_ids() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let a = registry
            .register(new_account("a@example.com", "supersafe99"))
            .await
            .unwrap();
        let b = registry
            .register(new_account("b@example.com", "supersafe99"))
            .await
            .unwrap();
        assert_eq!(a.id, CustomerId::new(2));
        assert_eq!(b.id, CustomerId::new(3));
    }

    #[tokio::test]
    async fn test_update_profile_merges() {
        let registry = AccountRegistry::with_demo_account().unwrap();
        let updated = registry
            .update_profile(
                CustomerId::new(1),
                &ProfileUpdate {
                    first_name: Some("Johnny".to_owned()),
                    ..ProfileUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.last_name, "Smith");

        // The change is visible on subsequent reads
        let fetched = registry.get(CustomerId::new(1)).unwrap();
        assert_eq!(fetched.first_name, "Johnny");
    }

    #[tokio::test]
    async fn test_update_profile_unknown_id() {
        let registry = AccountRegistry::empty();
        let err = registry.update_profile(CustomerId::new(42), &ProfileUpdate::default());
        assert!(matches!(err, Err(AccountError::AccountNotFound)));
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("12345678").is_ok());
        assert!(matches!(
            validate_password("1234567"),
            Err(AccountError::WeakPassword(_))
        ));
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("password123", &hash).is_ok());
        assert!(matches!(
            verify_password("other", &hash),
            Err(AccountError::InvalidCredentials)
        ));
    }
}
