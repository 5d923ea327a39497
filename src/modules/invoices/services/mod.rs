pub mod gst_calculator;
pub mod invoice_number;

pub use gst_calculator::GstCalculator;
pub use invoice_number::generate_invoice_number;
