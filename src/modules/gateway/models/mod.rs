pub mod order;
pub mod payment;
pub mod refund;
pub mod webhook;

pub use order::{CreateOrderRequest, Order};
pub use payment::Payment;
pub use refund::{CreateRefundRequest, Refund, RefundSpeed};
pub use webhook::{EntityWrapper, WebhookEvent, WebhookEventPayload};
