//! Domain models for the invoicing service.

pub mod invoice;
pub mod outcome;
pub mod payment;

pub use invoice::{Invoice, InvoiceType};
pub use outcome::PaymentOutcome;
pub use payment::Payment;
