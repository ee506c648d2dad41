//! # Invoicing Types
//!
//! Domain types and port traits for the invoice payment service.
//! This crate performs no IO of its own - it holds the data structures,
//! the payment evaluation rules, and the trait contracts adapters fill in.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Invoice, Payment, PaymentOutcome)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for host boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Invoice, InvoiceType, Payment, PaymentOutcome};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::InvoiceRepository;
