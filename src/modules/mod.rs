pub mod checkout;
pub mod gateway;
pub mod invoices;
pub mod refunds;
pub mod videos;
pub mod webhooks;
