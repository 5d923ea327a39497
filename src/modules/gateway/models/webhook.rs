use serde::{Deserialize, Serialize};

use super::{order::Order, payment::Payment, refund::Refund};

/// Provider webhook envelope.
///
/// Deserialized only after the raw body passed signature verification;
/// nothing in here is trusted before that.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub entity: String,
    #[serde(default)]
    pub account_id: Option<String>,
    pub event: String,
    #[serde(default)]
    pub contains: Vec<String>,
    pub payload: WebhookEventPayload,
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEventPayload {
    pub payment: Option<EntityWrapper<Payment>>,
    pub order: Option<EntityWrapper<Order>>,
    pub refund: Option<EntityWrapper<Refund>>,
}

/// The provider nests each entity one level down under an "entity" key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityWrapper<T> {
    pub entity: T,
}

impl WebhookEvent {
    /// Provider order id this event concerns, when one is present
    pub fn order_id(&self) -> Option<&str> {
        if let Some(order) = &self.payload.order {
            return Some(order.entity.id.as_str());
        }
        self.payload
            .payment
            .as_ref()
            .and_then(|p| p.entity.order_id.as_deref())
    }
}
