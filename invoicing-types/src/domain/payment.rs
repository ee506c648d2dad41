//! Payment domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A monetary amount submitted against an invoice reference.
///
/// Payments are immutable once constructed. Evaluation may move one into
/// an invoice's payment history, but never alters it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    reference: String,
    amount: Decimal,
}

impl Payment {
    /// Creates a new payment addressed to the given invoice reference.
    ///
    /// # Validation
    /// - Reference cannot be empty
    /// - Amount cannot be negative
    pub fn new(reference: impl Into<String>, amount: Decimal) -> Result<Self, DomainError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(DomainError::EmptyReference);
        }
        if amount.is_sign_negative() {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self { reference, amount })
    }

    /// Returns the reference of the invoice this payment targets.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the payment amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}
