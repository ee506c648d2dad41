//! Invoice domain model and the payment evaluator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::outcome::PaymentOutcome;
use super::payment::Payment;
use crate::error::DomainError;

/// Tax surcharge rate applied to each payment on a commercial invoice.
pub const COMMERCIAL_TAX_RATE: Decimal = Decimal::from_parts(14, 0, 0, false, 2);

/// Classification of an invoice, deciding its tax treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceType {
    /// Plain invoice; payments accrue no tax.
    Standard,
    /// Each payment accrues the 14% tax surcharge.
    Commercial,
}

impl Default for InvoiceType {
    fn default() -> Self {
        InvoiceType::Standard
    }
}

impl std::fmt::Display for InvoiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceType::Standard => write!(f, "STANDARD"),
            InvoiceType::Commercial => write!(f, "COMMERCIAL"),
        }
    }
}

impl std::str::FromStr for InvoiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(InvoiceType::Standard),
            "COMMERCIAL" => Ok(InvoiceType::Commercial),
            _ => Err(format!("Invalid invoice type: {}", s)),
        }
    }
}

/// A billable record: a total amount, the accumulated paid amount and tax,
/// and the history of payments applied to it.
///
/// The payment history is an always-valid, possibly-empty sequence;
/// `amount_paid` equals the sum of its amounts after every successful
/// evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Caller-supplied reference that payments use to address this invoice
    pub reference: String,
    /// Total amount billed
    pub amount: Decimal,
    /// Sum of all accepted payment amounts
    pub amount_paid: Decimal,
    /// Accumulated tax surcharge
    pub tax_amount: Decimal,
    /// Classification deciding tax treatment
    pub invoice_type: InvoiceType,
    /// Accepted payments, in the order they were applied
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// When the invoice was created
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a new unpaid invoice.
    ///
    /// # Validation
    /// - Reference cannot be empty
    /// - Amount cannot be negative
    pub fn new(
        reference: impl Into<String>,
        amount: Decimal,
        invoice_type: InvoiceType,
    ) -> Result<Self, DomainError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(DomainError::EmptyReference);
        }
        if amount.is_sign_negative() {
            return Err(DomainError::NegativeAmount);
        }

        Ok(Self {
            reference,
            amount,
            amount_paid: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            invoice_type,
            payments: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Reconstructs an invoice from stored fields (for store reloads).
    pub fn from_parts(
        reference: String,
        amount: Decimal,
        amount_paid: Decimal,
        tax_amount: Decimal,
        invoice_type: InvoiceType,
        payments: Vec<Payment>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            reference,
            amount,
            amount_paid,
            tax_amount,
            invoice_type,
            payments,
            created_at,
        }
    }

    /// Sum of the applied payment amounts.
    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(Payment::amount).sum()
    }

    /// Balance still owed.
    pub fn amount_remaining(&self) -> Decimal {
        self.amount - self.total_paid()
    }

    /// Evaluates a payment against this invoice.
    ///
    /// Guards run in order: a zero-amount invoice needs no payment (or is
    /// in an invalid state if it somehow has payments recorded), a settled
    /// invoice rejects everything, and a payment larger than what is owed
    /// is rejected. Anything else is accepted: the payment joins the
    /// history, `amount_paid` grows by its amount, and commercial invoices
    /// accrue the 14% tax surcharge on it.
    ///
    /// Rejections leave the invoice untouched and are reported through the
    /// returned [`PaymentOutcome`], never as errors.
    pub fn apply_payment(&mut self, payment: Payment) -> Result<PaymentOutcome, DomainError> {
        if self.amount.is_zero() {
            if self.payments.is_empty() {
                return Ok(PaymentOutcome::NoPaymentNeeded);
            }
            return Err(DomainError::InvalidState);
        }

        let total_paid = self.total_paid();
        let remaining = self.amount - total_paid;

        if total_paid >= self.amount {
            return Ok(PaymentOutcome::AlreadyFullyPaid);
        }
        if total_paid.is_zero() {
            if payment.amount() > self.amount {
                return Ok(PaymentOutcome::ExceedsInvoiceAmount);
            }
        } else if payment.amount() > remaining {
            return Ok(PaymentOutcome::ExceedsAmountRemaining);
        }

        let first_payment = total_paid.is_zero();
        let amount = payment.amount();

        if self.invoice_type == InvoiceType::Commercial {
            self.tax_amount += amount * COMMERCIAL_TAX_RATE;
        }
        self.amount_paid += amount;
        self.payments.push(payment);

        if amount == remaining {
            Ok(PaymentOutcome::FinalPartialPayment)
        } else if self.amount_paid == self.amount {
            Ok(PaymentOutcome::FullyPaid)
        } else if first_payment && self.amount_paid < self.amount {
            Ok(PaymentOutcome::PartiallyPaid)
        } else {
            Ok(PaymentOutcome::AnotherPartialPayment)
        }
    }
}
