//! Minimal embedding example: wire the in-memory store to the service and
//! walk an invoice from first partial payment to settlement.
//!
//! Run with: cargo run -p invoicing-hex --example quickstart

use rust_decimal_macros::dec;

use invoicing_hex::PaymentService;
use invoicing_repo::MemoryRepo;
use invoicing_types::{CreateInvoiceRequest, InvoiceType, Payment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let service = PaymentService::new(MemoryRepo::new());

    let invoice = service
        .add_invoice(CreateInvoiceRequest {
            reference: "INV-1001".to_string(),
            amount: dec!(250.00),
            invoice_type: InvoiceType::Commercial,
        })
        .await?;
    println!(
        "created {} invoice {} over {}",
        invoice.invoice_type, invoice.reference, invoice.amount
    );

    // Three attempts: a partial payment, an overpayment of the remaining
    // balance (rejected), and the exact remainder.
    for amount in [dec!(100.00), dec!(300.00), dec!(150.00)] {
        let receipt = service
            .process_payment(Payment::new("INV-1001", amount)?)
            .await?;
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(())
}
