pub mod webhook_processor;

pub use webhook_processor::{WebhookOutcome, WebhookProcessor};
