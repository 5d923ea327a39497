// Refunds module: full and partial refund orchestration

pub mod controllers;
pub mod services;

pub use services::{RefundInput, RefundService};
