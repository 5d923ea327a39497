use std::sync::Arc;

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;

use super::super::services::{WebhookOutcome, WebhookProcessor};
use crate::core::{AppError, Result};

const SIGNATURE_HEADER: &str = "X-Razorpay-Signature";
const EVENT_ID_HEADER: &str = "X-Razorpay-Event-Id";

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum WebhookResponse {
    Processed {
        event: String,
        order_id: Option<String>,
    },
    Duplicate {
        event_key: String,
    },
    Ignored {
        event: String,
    },
}

/// Receive a provider webhook
///
/// POST /webhooks/razorpay
///
/// The body must reach verification as the exact bytes the provider sent,
/// so this handler takes `web::Bytes` rather than a deserialized JSON
/// extractor.
///
/// Returns:
/// * `200 OK` - verified; processed, duplicate or ignored
/// * `400 Bad Request` - signature header missing
/// * `401 Unauthorized` - signature verification failed
#[post("/razorpay")]
async fn receive_webhook(
    req: HttpRequest,
    body: web::Bytes,
    processor: web::Data<Arc<WebhookProcessor>>,
) -> Result<HttpResponse> {
    let signature = req
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            AppError::missing_parameters(format!("{} header is required", SIGNATURE_HEADER))
        })?;

    let event_id = req
        .headers()
        .get(EVENT_ID_HEADER)
        .and_then(|h| h.to_str().ok());

    let outcome = processor.process(&body, signature, event_id)?;

    let response = match outcome {
        WebhookOutcome::Processed { event, order_id } => {
            WebhookResponse::Processed { event, order_id }
        }
        WebhookOutcome::Duplicate { event_key } => WebhookResponse::Duplicate { event_key },
        WebhookOutcome::Ignored { event } => WebhookResponse::Ignored { event },
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Configure webhook routes
pub fn configure(cfg: &mut web::ServiceConfig, processor: Arc<WebhookProcessor>) {
    cfg.service(
        web::scope("/webhooks")
            .app_data(web::Data::new(processor))
            .service(receive_webhook),
    );
}
