// Signature verification tests: the trust boundary between "the browser
// says a payment happened" and "the provider attests it did".

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{corrupt, sign, TEST_KEY_SECRET, TEST_WEBHOOK_SECRET};
use promopay::core::AppError;
use promopay::modules::gateway::services::SignatureVerifier;

fn verifier() -> SignatureVerifier {
    SignatureVerifier::new(
        Some(TEST_KEY_SECRET.to_string()),
        Some(TEST_WEBHOOK_SECRET.to_string()),
    )
}

// ============ Payment signature ============

#[test]
fn test_valid_payment_signature_accepted() {
    let v = verifier();
    let signature = sign(TEST_KEY_SECRET, b"order_9A33XWu170gUtm|pay_29QQoUBi66xm2f");

    let valid = v
        .verify_payment_signature("order_9A33XWu170gUtm", "pay_29QQoUBi66xm2f", &signature)
        .unwrap();

    assert!(valid);
}

#[test]
fn test_verification_is_idempotent() {
    let v = verifier();
    let signature = sign(TEST_KEY_SECRET, b"order_1|pay_1");

    let first = v.verify_payment_signature("order_1", "pay_1", &signature).unwrap();
    let second = v.verify_payment_signature("order_1", "pay_1", &signature).unwrap();

    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn test_mutated_order_id_rejected() {
    let v = verifier();
    let signature = sign(TEST_KEY_SECRET, b"order_1|pay_1");

    assert!(!v.verify_payment_signature("order_2", "pay_1", &signature).unwrap());
}

#[test]
fn test_mutated_payment_id_rejected() {
    let v = verifier();
    let signature = sign(TEST_KEY_SECRET, b"order_1|pay_1");

    assert!(!v.verify_payment_signature("order_1", "pay_2", &signature).unwrap());
}

#[test]
fn test_mutated_signature_rejected() {
    let v = verifier();
    let signature = sign(TEST_KEY_SECRET, b"order_1|pay_1");

    assert!(!v
        .verify_payment_signature("order_1", "pay_1", &corrupt(&signature))
        .unwrap());
}

#[test]
fn test_signature_from_wrong_secret_rejected() {
    let v = verifier();
    let signature = sign("some_other_secret", b"order_1|pay_1");

    assert!(!v.verify_payment_signature("order_1", "pay_1", &signature).unwrap());
}

#[test]
fn test_missing_fields_raise_errors() {
    let v = verifier();

    assert!(matches!(
        v.verify_payment_signature("", "pay_1", "deadbeef"),
        Err(AppError::MissingParameters(_))
    ));
    assert!(matches!(
        v.verify_payment_signature("order_1", "", "deadbeef"),
        Err(AppError::MissingParameters(_))
    ));
    assert!(matches!(
        v.verify_payment_signature("order_1", "pay_1", ""),
        Err(AppError::MissingParameters(_))
    ));
}

#[test]
fn test_missing_key_secret_is_not_configured() {
    let v = SignatureVerifier::new(None, Some(TEST_WEBHOOK_SECRET.to_string()));

    assert!(matches!(
        v.verify_payment_signature("order_1", "pay_1", "deadbeef"),
        Err(AppError::NotConfigured(_))
    ));
}

// ============ Webhook signature ============

#[test]
fn test_valid_webhook_signature_accepted() {
    let v = verifier();
    let body = br#"{"event":"payment.captured","payload":{}}"#;
    let signature = sign(TEST_WEBHOOK_SECRET, body);

    assert!(v.verify_webhook_signature(body, &signature));
}

#[test]
fn test_modified_body_rejected() {
    let v = verifier();
    let body = br#"{"event":"payment.captured","payload":{}}"#;
    let tampered = br#"{"event":"payment.captured","payload":{"extra":1}}"#;
    let signature = sign(TEST_WEBHOOK_SECRET, body);

    assert!(!v.verify_webhook_signature(tampered, &signature));
}

#[test]
fn test_reserialized_body_rejected() {
    let v = verifier();
    // Signed bytes and a semantically identical JSON document with a
    // different byte layout; only the exact bytes verify
    let body = br#"{"a":1,"b":2}"#;
    let reserialized = br#"{"b":2,"a":1}"#;
    let signature = sign(TEST_WEBHOOK_SECRET, body);

    assert!(v.verify_webhook_signature(body, &signature));
    assert!(!v.verify_webhook_signature(reserialized, &signature));
}

#[test]
fn test_unset_webhook_secret_rejects_everything() {
    let v = SignatureVerifier::new(Some(TEST_KEY_SECRET.to_string()), None);
    let body = br#"{"event":"payment.captured"}"#;

    // Even a signature computed with the "right" secret cannot verify
    let signature = sign(TEST_WEBHOOK_SECRET, body);
    assert!(!v.verify_webhook_signature(body, &signature));
    assert!(!v.verify_webhook_signature(body, "deadbeef"));
    assert!(!v.verify_webhook_signature(b"", ""));
}

#[test]
fn test_garbage_signatures_rejected() {
    let v = verifier();
    let body = br#"{"event":"payment.captured"}"#;

    assert!(!v.verify_webhook_signature(body, ""));
    assert!(!v.verify_webhook_signature(body, "not-hex"));
    assert!(!v.verify_webhook_signature(body, &corrupt(&sign(TEST_WEBHOOK_SECRET, body))));
}

#[test]
fn test_binary_and_unicode_payloads() {
    let v = verifier();

    let binary = &[0x00u8, 0x01, 0xFF, 0xFE];
    assert!(v.verify_webhook_signature(binary, &sign(TEST_WEBHOOK_SECRET, binary)));

    let unicode = "{\"name\":\"प्रचार\"}".as_bytes();
    assert!(v.verify_webhook_signature(unicode, &sign(TEST_WEBHOOK_SECRET, unicode)));
}
