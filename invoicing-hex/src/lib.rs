//! # Invoicing Hex
//!
//! Application service layer for the invoice payment system.
//!
//! The service is generic over `R: InvoiceRepository`, so any
//! repository implementation can be injected - the in-memory fake
//! for tests, a durable adapter in a real host.

pub mod service;


pub use service::PaymentService;
