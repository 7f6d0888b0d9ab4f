use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};

/// Card data as submitted at checkout.
///
/// `expiry_date` is carried through but never parsed; there is no Luhn
/// check. Validation is purely structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

pub const CARD_NUMBER_LEN: usize = 16;
pub const CVV_LEN: usize = 3;

impl CardDetails {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
        }
    }

    /// Structural check only: 16-character card number, 3-character cvv.
    pub fn is_structurally_valid(&self) -> bool {
        self.card_number.chars().count() == CARD_NUMBER_LEN
            && self.cvv.chars().count() == CVV_LEN
    }
}

/// A payment method that has passed method-level validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    CreditCard(CardDetails),
    Paypal,
}

impl PaymentMethod {
    /// Canonical method name as it appears at the API boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreditCard(_) => "credit_card",
            Self::Paypal => "paypal",
        }
    }

    /// Builds a method from its boundary representation.
    ///
    /// Unknown names are `UnsupportedMethod`; `credit_card` additionally
    /// requires structurally valid details.
    pub fn from_parts(method: &str, details: Option<&CardDetails>) -> Result<Self> {
        match method {
            "credit_card" => {
                let details = details.ok_or_else(|| {
                    OrderError::Validation("Invalid credit card details".to_string())
                })?;
                if !details.is_structurally_valid() {
                    return Err(OrderError::Validation(
                        "Invalid credit card details".to_string(),
                    ));
                }
                Ok(Self::CreditCard(details.clone()))
            }
            "paypal" => Ok(Self::Paypal),
            other => Err(OrderError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Outcome reported by a payment gateway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
    Success,
    Failure,
}

/// Response from a charge attempt: a status plus either a transaction id
/// (success) or a decline message (failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub status: GatewayStatus,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}

impl GatewayResponse {
    pub fn approved(transaction_id: impl Into<String>) -> Self {
        Self {
            status: GatewayStatus::Success,
            transaction_id: Some(transaction_id.into()),
            message: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            status: GatewayStatus::Failure,
            transaction_id: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GatewayStatus::Success
    }
}
