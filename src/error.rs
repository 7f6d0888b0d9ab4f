use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

/// The single error type shared by every component.
///
/// All failures in this crate are recoverable, caller-visible outcomes; the
/// only place these become plain strings is the user-facing boundary in
/// `PaymentProcessing::process_payment`.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid payment method: {0}")]
    UnsupportedMethod(String),
    #[error("Payment failed: {0}")]
    GatewayDeclined(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("Password hashing failed")]
    PasswordHash,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
