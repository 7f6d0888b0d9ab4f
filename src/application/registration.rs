use crate::domain::ports::UserStoreBox;
use crate::domain::user::{PasswordDigest, UserRecord, is_strong_password, is_valid_email};
use crate::error::{OrderError, Result};
use tracing::info;

/// The confirmation email itself is an external collaborator; registration
/// only reports that one was sent.
const REGISTERED_MESSAGE: &str = "Registration successful, confirmation email sent";

/// Fail-fast user registration over a user store.
///
/// Checks run in a fixed order and the first failure wins; each check is an
/// isolated predicate so switching to error accumulation stays a local
/// change.
pub struct UserRegistration {
    users: UserStoreBox,
}

impl UserRegistration {
    pub fn new(users: UserStoreBox) -> Self {
        Self { users }
    }

    /// Registers a new user: email shape, confirmation match, strength,
    /// uniqueness, then a salted digest stored with `confirmed = false`.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<String> {
        if !is_valid_email(email) {
            return Err(OrderError::Validation("Invalid email format".to_string()));
        }
        if password != confirm_password {
            return Err(OrderError::Validation("Passwords do not match".to_string()));
        }
        if !is_strong_password(password) {
            return Err(OrderError::Validation(
                "Password is not strong enough".to_string(),
            ));
        }
        if self.users.get(email).await?.is_some() {
            return Err(OrderError::Validation("Email already registered".to_string()));
        }

        let digest = PasswordDigest::hash(password)?;
        self.users.store(UserRecord::new(email, digest)).await?;
        info!(email, "user registered");
        Ok(REGISTERED_MESSAGE.to_string())
    }

    /// Checks a candidate password against the stored digest. Absent users
    /// and wrong passwords both come back `false`.
    pub async fn verify_password(&self, email: &str, candidate: &str) -> Result<bool> {
        Ok(self
            .users
            .get(email)
            .await?
            .is_some_and(|user| user.password.verify(candidate)))
    }
}
