// Checkout module: order intake and payment verification

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CheckoutState, OrderStore, TrackedOrder};
pub use services::{CheckoutOrder, CheckoutService, CreateOrderInput};
