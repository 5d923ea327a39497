pub mod order_store;

pub use order_store::{CheckoutState, OrderStore, TrackedOrder};
