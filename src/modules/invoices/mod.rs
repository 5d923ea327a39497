// Invoices module: GST breakdowns and invoice numbering

pub mod controllers;
pub mod models;
pub mod services;

pub use models::GstBreakdown;
pub use services::{generate_invoice_number, GstCalculator};
