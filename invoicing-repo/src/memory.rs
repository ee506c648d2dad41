//! In-memory repository adapter.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use invoicing_types::{Invoice, InvoiceRepository, RepoError};

/// In-memory invoice store keyed by reference.
///
/// Reference implementation of the persistence port, for tests and
/// embedded hosts that need no durability.
#[derive(Default)]
pub struct MemoryRepo {
    invoices: DashMap<String, Invoice>,
}

impl MemoryRepo {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            invoices: DashMap::new(),
        }
    }

    /// Number of invoices currently stored.
    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    /// Returns true if the store holds no invoices.
    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

#[async_trait::async_trait]
impl InvoiceRepository for MemoryRepo {
    async fn add_invoice(&self, invoice: Invoice) -> Result<(), RepoError> {
        match self.invoices.entry(invoice.reference.clone()) {
            Entry::Occupied(_) => Err(RepoError::Conflict(format!(
                "Invoice with reference '{}' already exists",
                invoice.reference
            ))),
            Entry::Vacant(slot) => {
                slot.insert(invoice);
                Ok(())
            }
        }
    }

    async fn get_invoice(&self, reference: &str) -> Result<Option<Invoice>, RepoError> {
        Ok(self.invoices.get(reference).map(|entry| entry.value().clone()))
    }

    async fn save_invoice(&self, invoice: &Invoice) -> Result<(), RepoError> {
        self.invoices
            .insert(invoice.reference.clone(), invoice.clone());
        Ok(())
    }
}
