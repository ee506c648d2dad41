//! Invoice persistence port.

use crate::domain::Invoice;
use crate::error::RepoError;

/// Load/store contract for invoices.
///
/// The payment service resolves payments to invoices through this trait.
/// Any implementation satisfying the contract (in-memory fake, durable
/// store) is substitutable.
#[async_trait::async_trait]
pub trait InvoiceRepository: Send + Sync + 'static {
    /// Records a new invoice. Fails with `Conflict` if the reference is
    /// already taken.
    async fn add_invoice(&self, invoice: Invoice) -> Result<(), RepoError>;

    /// Looks up an invoice by its reference.
    async fn get_invoice(&self, reference: &str) -> Result<Option<Invoice>, RepoError>;

    /// Persists the current state of an invoice, keyed by its reference.
    async fn save_invoice(&self, invoice: &Invoice) -> Result<(), RepoError>;
}
