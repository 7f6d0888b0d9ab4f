use crate::domain::money::Money;
use crate::domain::payment::{CardDetails, PaymentMethod};
use crate::domain::ports::PaymentGatewayBox;
use crate::error::{OrderError, Result};
use tracing::debug;

/// Receipt for a charge the gateway accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub transaction_id: Option<String>,
}

/// Validates payment methods and runs charges through the gateway.
pub struct PaymentProcessing {
    gateway: PaymentGatewayBox,
}

impl PaymentProcessing {
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    /// Checks that the method is supported and, for cards, that the details
    /// are structurally sound.
    pub fn validate_payment_method(
        &self,
        method: &str,
        details: Option<&CardDetails>,
    ) -> Result<PaymentMethod> {
        PaymentMethod::from_parts(method, details)
    }

    /// Typed charge path: validate, charge, map a decline to
    /// `GatewayDeclined`.
    pub async fn charge(
        &self,
        total: Money,
        method: &str,
        details: Option<&CardDetails>,
    ) -> Result<PaymentReceipt> {
        let method = self.validate_payment_method(method, details)?;
        let response = self.gateway.charge(&method, total).await?;
        if response.is_success() {
            debug!(transaction_id = ?response.transaction_id, "charge accepted");
            Ok(PaymentReceipt {
                transaction_id: response.transaction_id,
            })
        } else {
            Err(OrderError::GatewayDeclined(
                response
                    .message
                    .unwrap_or_else(|| "please try again".to_string()),
            ))
        }
    }

    /// User-facing boundary: typed errors become display strings here and
    /// nowhere else.
    pub async fn process_payment(
        &self,
        total: Money,
        method: &str,
        details: Option<&CardDetails>,
    ) -> String {
        match self.charge(total, method, details).await {
            Ok(_) => "Payment successful, Order confirmed".to_string(),
            Err(OrderError::GatewayDeclined(_)) => "Payment failed, please try again".to_string(),
            Err(err) => format!("Error: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory::{DECLINED_CARD_NUMBER, MockPaymentGateway};
    use rust_decimal_macros::dec;

    fn processing() -> PaymentProcessing {
        PaymentProcessing::new(Box::new(MockPaymentGateway::new()))
    }

    fn valid_card() -> CardDetails {
        CardDetails::new("1234567812345678", "12/25", "123")
    }

    #[tokio::test]
    async fn test_charge_returns_receipt() {
        let receipt = processing()
            .charge(dec!(100.00).into(), "credit_card", Some(&valid_card()))
            .await
            .unwrap();
        assert!(receipt.transaction_id.is_some());
    }

    #[tokio::test]
    async fn test_charge_maps_decline() {
        let declined = CardDetails::new(DECLINED_CARD_NUMBER, "12/25", "123");
        let err = processing()
            .charge(dec!(100.00).into(), "credit_card", Some(&declined))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::GatewayDeclined(_)));
    }

    #[tokio::test]
    async fn test_process_payment_success_message() {
        let message = processing()
            .process_payment(dec!(100.00).into(), "credit_card", Some(&valid_card()))
            .await;
        assert_eq!(message, "Payment successful, Order confirmed");
    }

    #[tokio::test]
    async fn test_process_payment_decline_message() {
        let declined = CardDetails::new(DECLINED_CARD_NUMBER, "12/25", "123");
        let message = processing()
            .process_payment(dec!(100.00).into(), "credit_card", Some(&declined))
            .await;
        assert_eq!(message, "Payment failed, please try again");
    }

    #[tokio::test]
    async fn test_process_payment_unsupported_method() {
        let message = processing()
            .process_payment(dec!(100.00).into(), "bitcoin", Some(&valid_card()))
            .await;
        assert!(message.contains("Invalid payment method"));
        assert!(message.starts_with("Error:"));
    }
}
