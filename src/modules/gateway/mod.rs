// Payment provider adapter: wire types, REST client, signature checks

pub mod models;
pub mod services;

pub use models::{
    CreateOrderRequest, CreateRefundRequest, Order, Payment, Refund, RefundSpeed, WebhookEvent,
};
pub use services::{PaymentProvider, RazorpayClient, SignatureVerifier};
