use chrono::Utc;
use rand::Rng;

/// Generate an invoice number of the form `INV-YYYYMMDD-RRRR`.
///
/// The suffix is a zero-padded random 4-digit value. Same-day collisions
/// are possible and must be caught by a uniqueness constraint in whatever
/// store the caller persists invoices to; this utility has no memory. The
/// date component is UTC so replicated instances agree on the day.
pub fn generate_invoice_number() -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("INV-{}-{:04}", date, suffix)
}
