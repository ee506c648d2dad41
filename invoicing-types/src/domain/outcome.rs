//! Evaluation outcome of applying a payment to an invoice.

use serde::{Deserialize, Serialize};

/// The result of evaluating a payment against an invoice.
///
/// Rejections are ordinary outcomes, not errors: an overpayment or an
/// already-settled invoice is a business answer the caller relays.
/// Corrupt invoice state surfaces as a `DomainError` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOutcome {
    /// The invoice amount is zero; there is nothing to settle.
    NoPaymentNeeded,
    /// The payment history already covers the invoice amount.
    AlreadyFullyPaid,
    /// First payment exceeding the full invoice amount.
    ExceedsInvoiceAmount,
    /// Follow-up payment exceeding the balance still owed.
    ExceedsAmountRemaining,
    /// Accepted; this payment settled the remaining balance exactly.
    FinalPartialPayment,
    /// Accepted; the invoice is settled in full.
    FullyPaid,
    /// Accepted; first payment, balance still outstanding.
    PartiallyPaid,
    /// Accepted; follow-up payment, balance still outstanding.
    AnotherPartialPayment,
}

impl PaymentOutcome {
    /// Returns true if the payment was applied to the invoice.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            PaymentOutcome::FinalPartialPayment
                | PaymentOutcome::FullyPaid
                | PaymentOutcome::PartiallyPaid
                | PaymentOutcome::AnotherPartialPayment
        )
    }

    /// Human-readable status message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            PaymentOutcome::NoPaymentNeeded => "no payment needed",
            PaymentOutcome::AlreadyFullyPaid => "invoice was already fully paid",
            PaymentOutcome::ExceedsInvoiceAmount => {
                "the payment is greater than the invoice amount"
            }
            PaymentOutcome::ExceedsAmountRemaining => {
                "the payment is greater than the partial amount remaining"
            }
            PaymentOutcome::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            PaymentOutcome::FullyPaid => "invoice is now fully paid",
            PaymentOutcome::PartiallyPaid => "invoice is now partially paid",
            PaymentOutcome::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
        }
    }
}

impl std::fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_partition() {
        assert!(PaymentOutcome::FinalPartialPayment.is_accepted());
        assert!(PaymentOutcome::FullyPaid.is_accepted());
        assert!(PaymentOutcome::PartiallyPaid.is_accepted());
        assert!(PaymentOutcome::AnotherPartialPayment.is_accepted());

        assert!(!PaymentOutcome::NoPaymentNeeded.is_accepted());
        assert!(!PaymentOutcome::AlreadyFullyPaid.is_accepted());
        assert!(!PaymentOutcome::ExceedsInvoiceAmount.is_accepted());
        assert!(!PaymentOutcome::ExceedsAmountRemaining.is_accepted());
    }

    #[test]
    fn test_display_matches_message() {
        assert_eq!(
            PaymentOutcome::FinalPartialPayment.to_string(),
            "final partial payment received, invoice is now fully paid"
        );
        assert_eq!(PaymentOutcome::NoPaymentNeeded.to_string(), "no payment needed");
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&PaymentOutcome::AlreadyFullyPaid).unwrap();
        assert_eq!(json, "\"ALREADY_FULLY_PAID\"");
    }
}
