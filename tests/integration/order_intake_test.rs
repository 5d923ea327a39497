// Order intake: validation happens before the provider is touched, the
// provider receives integer minor units, and verification gates the
// tracked checkout state.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal_macros::dec;

use helpers::{corrupt, sign, FakeProvider, TEST_KEY_ID, TEST_KEY_SECRET, TEST_WEBHOOK_SECRET};
use promopay::config::RazorpayConfig;
use promopay::core::{AppError, Currency};
use promopay::modules::checkout::{CheckoutService, CheckoutState, CreateOrderInput, OrderStore};
use promopay::modules::gateway::services::{PaymentProvider, RazorpayClient, SignatureVerifier};
use promopay::modules::invoices::GstCalculator;

fn service_with(provider: Arc<FakeProvider>) -> CheckoutService {
    let verifier = SignatureVerifier::new(
        Some(TEST_KEY_SECRET.to_string()),
        Some(TEST_WEBHOOK_SECRET.to_string()),
    );
    CheckoutService::new(
        provider as Arc<dyn PaymentProvider>,
        verifier,
        Arc::new(OrderStore::new()),
        GstCalculator::default(),
    )
}

fn input(amount: rust_decimal::Decimal) -> CreateOrderInput {
    CreateOrderInput {
        amount,
        currency: Currency::INR,
        receipt: None,
        notes: BTreeMap::new(),
        video_url: None,
    }
}

#[tokio::test]
async fn test_order_amount_converted_to_minor_units() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let checkout = service.create_order(input(dec!(499.00))).await.unwrap();

    let recorded = provider.recorded_orders();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].amount, 49900);
    assert_eq!(recorded[0].payment_capture, 1);
    assert_eq!(checkout.order.amount, 49900);
    assert_eq!(checkout.key_id, TEST_KEY_ID);
}

#[tokio::test]
async fn test_half_paise_amount_rounds_half_up() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    service.create_order(input(dec!(10.005))).await.unwrap();

    assert_eq!(provider.recorded_orders()[0].amount, 1001);
}

#[tokio::test]
async fn test_non_positive_amount_never_reaches_provider() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let zero = service.create_order(input(dec!(0))).await;
    let negative = service.create_order(input(dec!(-499))).await;

    assert!(matches!(zero, Err(AppError::InvalidAmount(_))));
    assert!(matches!(negative, Err(AppError::InvalidAmount(_))));
    assert!(provider.recorded_orders().is_empty());
}

#[tokio::test]
async fn test_receipt_defaults_to_generated_correlation_key() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    service.create_order(input(dec!(100))).await.unwrap();

    let recorded = provider.recorded_orders();
    assert!(recorded[0].receipt.starts_with("rcpt_"));
}

#[tokio::test]
async fn test_caller_receipt_preserved() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let mut order_input = input(dec!(100));
    order_input.receipt = Some("campaign-42".to_string());
    service.create_order(order_input).await.unwrap();

    assert_eq!(provider.recorded_orders()[0].receipt, "campaign-42");
}

#[tokio::test]
async fn test_video_url_recorded_in_notes() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let mut order_input = input(dec!(100));
    order_input.video_url = Some("https://www.youtube.com/watch?v=XYZ123&t=30".to_string());
    service.create_order(order_input).await.unwrap();

    let notes = &provider.recorded_orders()[0].notes;
    assert_eq!(notes.get("video_id").map(String::as_str), Some("XYZ123"));
    assert_eq!(
        notes.get("video_url").map(String::as_str),
        Some("https://www.youtube.com/watch?v=XYZ123&t=30")
    );
}

#[tokio::test]
async fn test_invalid_video_url_rejected_before_provider_call() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let mut order_input = input(dec!(100));
    order_input.video_url = Some("https://vimeo.com/123".to_string());
    let result = service.create_order(order_input).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(provider.recorded_orders().is_empty());
}

#[tokio::test]
async fn test_gst_breakdown_attached_to_checkout() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let checkout = service.create_order(input(dec!(1000))).await.unwrap();

    assert_eq!(checkout.gst.gst_amount, dec!(180));
    assert_eq!(checkout.gst.total_amount, dec!(1180));
}

#[tokio::test]
async fn test_unconfigured_adapter_fails_fast() {
    let client = RazorpayClient::from_config(&RazorpayConfig::unconfigured());
    let verifier = SignatureVerifier::new(None, None);
    let service = CheckoutService::new(
        Arc::new(client) as Arc<dyn PaymentProvider>,
        verifier,
        Arc::new(OrderStore::new()),
        GstCalculator::default(),
    );

    let result = service.create_order(input(dec!(100))).await;

    assert!(matches!(result, Err(AppError::NotConfigured(_))));
}

#[tokio::test]
async fn test_successful_verification_marks_order_paid() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let checkout = service.create_order(input(dec!(499))).await.unwrap();
    let order_id = checkout.order.id.as_str();
    assert_eq!(service.order_state(order_id), Some(CheckoutState::Created));

    let message = format!("{}|pay_29QQoUBi66xm2f", order_id);
    let signature = sign(TEST_KEY_SECRET, message.as_bytes());

    let valid = service
        .verify_payment(order_id, "pay_29QQoUBi66xm2f", &signature)
        .unwrap();

    assert!(valid);
    assert_eq!(service.order_state(order_id), Some(CheckoutState::Paid));
}

#[tokio::test]
async fn test_failed_verification_leaves_order_unpaid() {
    let provider = Arc::new(FakeProvider::new());
    let service = service_with(Arc::clone(&provider));

    let checkout = service.create_order(input(dec!(499))).await.unwrap();
    let order_id = checkout.order.id.as_str();

    let message = format!("{}|pay_29QQoUBi66xm2f", order_id);
    let signature = corrupt(&sign(TEST_KEY_SECRET, message.as_bytes()));

    let valid = service
        .verify_payment(order_id, "pay_29QQoUBi66xm2f", &signature)
        .unwrap();

    assert!(!valid);
    assert_eq!(service.order_state(order_id), Some(CheckoutState::Created));
}

#[tokio::test]
async fn test_provider_rejection_surfaces_message() {
    let provider = Arc::new(FakeProvider::rejecting(
        "BAD_REQUEST_ERROR: order amount exceeds maximum",
    ));
    let service = service_with(Arc::clone(&provider));

    let result = service.create_order(input(dec!(100))).await;

    match result {
        Err(AppError::Provider(message)) => {
            assert!(message.contains("order amount exceeds maximum"))
        }
        other => panic!("expected provider error, got {:?}", other.map(|c| c.order.id)),
    }
}
