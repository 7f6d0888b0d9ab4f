mod common;

use mealflow::application::registration::UserRegistration;
use mealflow::error::OrderError;
use mealflow::infrastructure::in_memory::InMemoryUserStore;

fn registration() -> UserRegistration {
    UserRegistration::new(Box::new(InMemoryUserStore::new()))
}

#[tokio::test]
async fn test_invalid_email_format() {
    common::init_tracing();
    let err = registration()
        .register("no-at-sign", "Password1", "Password1")
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));
    assert_eq!(err.to_string(), "Invalid email format");
}

#[tokio::test]
async fn test_password_mismatch() {
    common::init_tracing();
    let err = registration()
        .register("user@example.com", "Password1", "Password2")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Passwords do not match");
}

#[tokio::test]
async fn test_weak_password() {
    common::init_tracing();
    let err = registration()
        .register("user@example.com", "short1", "short1")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Password is not strong enough");
}

#[tokio::test]
async fn test_successful_then_duplicate_registration() {
    common::init_tracing();
    let registration = registration();

    let message = registration
        .register("user@example.com", "Password1", "Password1")
        .await
        .unwrap();
    assert_eq!(message, "Registration successful, confirmation email sent");

    let err = registration
        .register("user@example.com", "Password1", "Password1")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn test_checks_run_in_order() {
    common::init_tracing();
    // A bad email wins over a mismatched, weak password.
    let err = registration()
        .register("no-at-sign", "a", "b")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid email format");
}

#[tokio::test]
async fn test_stored_password_is_hashed_and_verifiable() {
    common::init_tracing();
    let store = InMemoryUserStore::new();
    let registration = UserRegistration::new(Box::new(store.clone()));

    registration
        .register("user@example.com", "Password1", "Password1")
        .await
        .unwrap();

    assert!(registration
        .verify_password("user@example.com", "Password1")
        .await
        .unwrap());
    assert!(!registration
        .verify_password("user@example.com", "WrongPassword9")
        .await
        .unwrap());
    assert!(!registration
        .verify_password("missing@example.com", "Password1")
        .await
        .unwrap());

    // The registry holds a salted digest, never the clear text.
    use mealflow::domain::ports::UserStore;
    let record = store.get("user@example.com").await.unwrap().unwrap();
    assert_ne!(record.password.as_str(), "Password1");
    assert!(record.password.as_str().starts_with("$argon2"));
    assert!(!record.confirmed);
}
