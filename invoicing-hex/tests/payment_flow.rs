//! End-to-end payment flows over the in-memory adapter.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use invoicing_hex::PaymentService;
use invoicing_repo::MemoryRepo;
use invoicing_types::{CreateInvoiceRequest, InvoiceType, Payment, PaymentOutcome};

async fn service_with(
    reference: &str,
    amount: Decimal,
    invoice_type: InvoiceType,
) -> PaymentService<MemoryRepo> {
    let service = PaymentService::new(MemoryRepo::new());
    service
        .add_invoice(CreateInvoiceRequest {
            reference: reference.to_string(),
            amount,
            invoice_type,
        })
        .await
        .unwrap();
    service
}

#[tokio::test]
async fn test_invoice_settles_over_three_payments() {
    let service = service_with("INV-100", dec!(100), InvoiceType::Standard).await;

    let outcomes = [
        (dec!(40), PaymentOutcome::PartiallyPaid),
        (dec!(30), PaymentOutcome::AnotherPartialPayment),
        (dec!(30), PaymentOutcome::FinalPartialPayment),
    ];
    for (amount, expected) in outcomes {
        let receipt = service
            .process_payment(Payment::new("INV-100", amount).unwrap())
            .await
            .unwrap();
        assert_eq!(receipt.outcome, expected);
    }

    let invoice = service.get_invoice("INV-100").await.unwrap();
    assert_eq!(invoice.amount_paid, dec!(100));
    assert_eq!(invoice.total_paid(), dec!(100));
    assert_eq!(invoice.payments.len(), 3);
}

#[tokio::test]
async fn test_settled_invoice_rejects_further_payments_unchanged() {
    let service = service_with("INV-200", dec!(50), InvoiceType::Standard).await;
    service
        .process_payment(Payment::new("INV-200", dec!(50)).unwrap())
        .await
        .unwrap();

    let receipt = service
        .process_payment(Payment::new("INV-200", dec!(10)).unwrap())
        .await
        .unwrap();
    assert_eq!(receipt.outcome, PaymentOutcome::AlreadyFullyPaid);
    assert_eq!(receipt.message, "invoice was already fully paid");

    let invoice = service.get_invoice("INV-200").await.unwrap();
    assert_eq!(invoice.amount_paid, dec!(50));
    assert_eq!(invoice.payments.len(), 1);
}

#[tokio::test]
async fn test_commercial_invoice_accrues_tax_per_payment() {
    let service = service_with("INV-300", dec!(200), InvoiceType::Commercial).await;

    let first = service
        .process_payment(Payment::new("INV-300", dec!(100)).unwrap())
        .await
        .unwrap();
    assert_eq!(first.tax_amount, dec!(14.00));

    let second = service
        .process_payment(Payment::new("INV-300", dec!(100)).unwrap())
        .await
        .unwrap();
    assert_eq!(second.outcome, PaymentOutcome::FinalPartialPayment);
    assert_eq!(second.tax_amount, dec!(28.00));

    let invoice = service.get_invoice("INV-300").await.unwrap();
    assert_eq!(invoice.tax_amount, dec!(28.00));
}

#[tokio::test]
async fn test_overpayment_of_remaining_balance_is_rejected() {
    let service = service_with("INV-400", dec!(10), InvoiceType::Standard).await;
    service
        .process_payment(Payment::new("INV-400", dec!(5)).unwrap())
        .await
        .unwrap();

    let receipt = service
        .process_payment(Payment::new("INV-400", dec!(6)).unwrap())
        .await
        .unwrap();
    assert_eq!(receipt.outcome, PaymentOutcome::ExceedsAmountRemaining);
    assert_eq!(
        receipt.message,
        "the payment is greater than the partial amount remaining"
    );

    let invoice = service.get_invoice("INV-400").await.unwrap();
    assert_eq!(invoice.amount_paid, dec!(5));
}

#[tokio::test]
async fn test_zero_amount_invoice_needs_no_payment() {
    let service = service_with("INV-500", Decimal::ZERO, InvoiceType::Standard).await;

    let receipt = service
        .process_payment(Payment::new("INV-500", dec!(10)).unwrap())
        .await
        .unwrap();
    assert_eq!(receipt.outcome, PaymentOutcome::NoPaymentNeeded);
    assert_eq!(receipt.message, "no payment needed");
    assert!(!receipt.accepted);

    let invoice = service.get_invoice("INV-500").await.unwrap();
    assert_eq!(invoice.amount_paid, Decimal::ZERO);
    assert!(invoice.payments.is_empty());
}
