// Webhooks module: verified, idempotent provider event intake

pub mod controllers;
pub mod services;

pub use services::{WebhookOutcome, WebhookProcessor};
