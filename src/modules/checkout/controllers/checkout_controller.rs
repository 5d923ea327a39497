use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::super::services::{CheckoutService, CreateOrderInput};
use crate::core::{Currency, Result};

/// Order creation request from the checkout page
#[derive(Debug, Deserialize)]
pub struct CreateOrderDto {
    pub amount: Decimal,
    #[serde(default)]
    pub currency: Currency,
    pub receipt: Option<String>,
    #[serde(default)]
    pub notes: BTreeMap<String, String>,
    pub video_url: Option<String>,
}

/// Signature verification request produced by the checkout widget after
/// payment; consumed exactly once
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentDto {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Debug, Serialize)]
struct VerifyPaymentResponse {
    valid: bool,
    order_id: String,
}

#[derive(Debug, Serialize)]
struct CheckoutConfigResponse {
    key_id: String,
}

/// Create a payment order
///
/// POST /api/checkout/orders
#[post("/orders")]
async fn create_order(
    body: web::Json<CreateOrderDto>,
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse> {
    let dto = body.into_inner();
    let checkout = service
        .create_order(CreateOrderInput {
            amount: dto.amount,
            currency: dto.currency,
            receipt: dto.receipt,
            notes: dto.notes,
            video_url: dto.video_url,
        })
        .await?;

    Ok(HttpResponse::Created().json(checkout))
}

/// Verify a payment signature from the checkout widget
///
/// POST /api/checkout/verify
///
/// The response carries the verification boolean; a mismatch is a normal
/// `false`, not an error status.
#[post("/verify")]
async fn verify_payment(
    body: web::Json<VerifyPaymentDto>,
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse> {
    let valid = service.verify_payment(&body.order_id, &body.payment_id, &body.signature)?;

    Ok(HttpResponse::Ok().json(VerifyPaymentResponse {
        valid,
        order_id: body.into_inner().order_id,
    }))
}

/// Fetch an order from the provider
///
/// GET /api/checkout/orders/{order_id}
#[get("/orders/{order_id}")]
async fn fetch_order(
    path: web::Path<String>,
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse> {
    let order = service.fetch_order(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(order))
}

/// Local checkout state for an order created by this instance
///
/// GET /api/checkout/orders/{order_id}/status
#[get("/orders/{order_id}/status")]
async fn order_status(
    path: web::Path<String>,
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse> {
    match service.tracked_order(&path.into_inner()) {
        Some(tracked) => Ok(HttpResponse::Ok().json(tracked)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": {
                "message": "order is not tracked by this instance",
                "code": 404,
            }
        }))),
    }
}

/// Fetch a payment from the provider
///
/// GET /api/checkout/payments/{payment_id}
#[get("/payments/{payment_id}")]
async fn fetch_payment(
    path: web::Path<String>,
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse> {
    let payment = service.fetch_payment(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(payment))
}

/// Public configuration for the browser checkout widget
///
/// GET /api/checkout/config
#[get("/config")]
async fn checkout_config(service: web::Data<Arc<CheckoutService>>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(CheckoutConfigResponse {
        key_id: service.key_id()?,
    }))
}

/// Configure checkout routes
pub fn configure(cfg: &mut web::ServiceConfig, service: Arc<CheckoutService>) {
    cfg.service(
        web::scope("/api/checkout")
            .app_data(web::Data::new(service))
            .service(create_order)
            .service(verify_payment)
            .service(order_status)
            .service(fetch_order)
            .service(fetch_payment)
            .service(checkout_config),
    );
}
