//! Data Transfer Objects for host boundaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{InvoiceType, PaymentOutcome};

// ─────────────────────────────────────────────────────────────────────────────
// Invoice DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a new invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    /// Reference payments will use to address this invoice
    pub reference: String,
    /// Total amount billed
    pub amount: Decimal,
    /// Tax classification; standard when omitted
    #[serde(default)]
    pub invoice_type: InvoiceType,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Result of processing a payment, shaped for host consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Invoice the payment addressed
    pub reference: String,
    /// Machine-readable evaluation result
    pub outcome: PaymentOutcome,
    /// Status message describing the result
    pub message: String,
    /// Whether the payment was applied to the invoice
    pub accepted: bool,
    /// Paid amount after evaluation
    pub amount_paid: Decimal,
    /// Accumulated tax after evaluation
    pub tax_amount: Decimal,
}
