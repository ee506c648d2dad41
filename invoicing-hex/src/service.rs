//! Payment application service.
//!
//! Orchestrates the payment evaluator through the repository port.
//! Contains no evaluation logic of its own - lookup, delegate, persist.

use invoicing_types::{
    AppError, CreateInvoiceRequest, Invoice, InvoiceRepository, Payment, PaymentReceipt,
};

/// Application service for invoice payment operations.
///
/// Generic over `R: InvoiceRepository` - the store is injected at compile
/// time, so an in-memory fake and a durable adapter are interchangeable.
pub struct PaymentService<R: InvoiceRepository> {
    repo: R,
}

impl<R: InvoiceRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Invoice Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Registers a new invoice.
    pub async fn add_invoice(&self, req: CreateInvoiceRequest) -> Result<Invoice, AppError> {
        let invoice = Invoice::new(req.reference, req.amount, req.invoice_type)?;
        self.repo.add_invoice(invoice.clone()).await?;

        tracing::info!(
            reference = %invoice.reference,
            amount = %invoice.amount,
            invoice_type = %invoice.invoice_type,
            "invoice added"
        );
        Ok(invoice)
    }

    /// Gets an invoice by its reference.
    pub async fn get_invoice(&self, reference: &str) -> Result<Invoice, AppError> {
        self.repo
            .get_invoice(reference)
            .await
            .map_err(Into::into)
            .and_then(|opt| {
                opt.ok_or_else(|| AppError::NotFound(format!("Invoice {}", reference)))
            })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Applies a payment to the invoice it references.
    ///
    /// The invoice is saved after every evaluation, accepted or rejected;
    /// a rejection saves unchanged state. Only evaluation errors (invalid
    /// invoice state) skip the save.
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentReceipt, AppError> {
        let mut invoice = self
            .repo
            .get_invoice(payment.reference())
            .await?
            .ok_or_else(|| {
                AppError::NotFound("There is no invoice matching this payment".into())
            })?;

        let outcome = invoice.apply_payment(payment).map_err(|err| {
            tracing::error!(reference = %invoice.reference, %err, "payment evaluation failed");
            err
        })?;

        self.repo.save_invoice(&invoice).await?;

        if outcome.is_accepted() {
            tracing::info!(
                reference = %invoice.reference,
                amount_paid = %invoice.amount_paid,
                %outcome,
                "payment applied"
            );
        } else {
            tracing::info!(reference = %invoice.reference, %outcome, "payment rejected");
        }

        Ok(PaymentReceipt {
            reference: invoice.reference,
            outcome,
            message: outcome.to_string(),
            accepted: outcome.is_accepted(),
            amount_paid: invoice.amount_paid,
            tax_amount: invoice.tax_amount,
        })
    }
}
