mod common;

use mealflow::application::payment::PaymentProcessing;
use mealflow::domain::payment::CardDetails;
use mealflow::error::OrderError;
use mealflow::infrastructure::in_memory::{DECLINED_CARD_NUMBER, MockPaymentGateway};
use rust_decimal_macros::dec;

fn processing() -> PaymentProcessing {
    PaymentProcessing::new(Box::new(MockPaymentGateway::new()))
}

#[test]
fn test_validate_payment_method_success() {
    common::init_tracing();
    let method = processing()
        .validate_payment_method("credit_card", Some(&common::valid_card()))
        .unwrap();
    assert_eq!(method.name(), "credit_card");
}

#[test]
fn test_validate_payment_method_unsupported() {
    common::init_tracing();
    let err = processing()
        .validate_payment_method("bitcoin", Some(&common::valid_card()))
        .unwrap_err();
    assert!(matches!(err, OrderError::UnsupportedMethod(_)));
    assert_eq!(err.to_string(), "Invalid payment method: bitcoin");
}

#[test]
fn test_validate_credit_card_structural_checks() {
    common::init_tracing();
    let processing = processing();

    let short_number = CardDetails::new("1234", "12/25", "123");
    let err = processing
        .validate_payment_method("credit_card", Some(&short_number))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credit card details");

    let short_cvv = CardDetails::new("1234567812345678", "12/25", "12");
    assert!(
        processing
            .validate_payment_method("credit_card", Some(&short_cvv))
            .is_err()
    );
}

#[tokio::test]
async fn test_process_payment_success() {
    common::init_tracing();
    let message = processing()
        .process_payment(dec!(100.00).into(), "credit_card", Some(&common::valid_card()))
        .await;
    assert_eq!(message, "Payment successful, Order confirmed");
}

#[tokio::test]
async fn test_process_payment_declined_card() {
    common::init_tracing();
    let declined = CardDetails::new(DECLINED_CARD_NUMBER, "12/25", "123");
    let message = processing()
        .process_payment(dec!(100.00).into(), "credit_card", Some(&declined))
        .await;
    assert_eq!(message, "Payment failed, please try again");
}

#[tokio::test]
async fn test_process_payment_unsupported_method_becomes_error_string() {
    common::init_tracing();
    let message = processing()
        .process_payment(dec!(100.00).into(), "bitcoin", Some(&common::valid_card()))
        .await;
    assert!(message.contains("Invalid payment method"));
}

#[tokio::test]
async fn test_paypal_needs_no_details() {
    common::init_tracing();
    let message = processing()
        .process_payment(dec!(25.00).into(), "paypal", None)
        .await;
    assert_eq!(message, "Payment successful, Order confirmed");
}
