use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::super::services::{RefundInput, RefundService};
use crate::core::{Currency, Result};
use crate::modules::gateway::models::RefundSpeed;

/// Refund request from back office or support tooling
#[derive(Debug, Deserialize)]
pub struct RefundDto {
    #[serde(default)]
    pub payment_id: String,
    /// Omit for a full refund of the captured amount
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub speed: RefundSpeed,
    pub notes: Option<BTreeMap<String, String>>,
}

/// Issue a refund against a captured payment
///
/// POST /api/refunds
#[post("")]
async fn process_refund(
    body: web::Json<RefundDto>,
    service: web::Data<Arc<RefundService>>,
) -> Result<HttpResponse> {
    let dto = body.into_inner();
    let refund = service
        .process_refund(RefundInput {
            payment_id: dto.payment_id,
            amount: dto.amount,
            currency: dto.currency,
            speed: dto.speed,
            notes: dto.notes,
        })
        .await?;

    Ok(HttpResponse::Created().json(refund))
}

/// Fetch refund status
///
/// GET /api/refunds/{payment_id}/{refund_id}
#[get("/{payment_id}/{refund_id}")]
async fn fetch_refund(
    path: web::Path<(String, String)>,
    service: web::Data<Arc<RefundService>>,
) -> Result<HttpResponse> {
    let (payment_id, refund_id) = path.into_inner();
    let refund = service.fetch_refund_details(&payment_id, &refund_id).await?;
    Ok(HttpResponse::Ok().json(refund))
}

/// Configure refund routes
pub fn configure(cfg: &mut web::ServiceConfig, service: Arc<RefundService>) {
    cfg.service(
        web::scope("/api/refunds")
            .app_data(web::Data::new(service))
            .service(process_refund)
            .service(fetch_refund),
    );
}
