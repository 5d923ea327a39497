use actix_web::{post, web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::super::models::GstBreakdown;
use super::super::services::{generate_invoice_number, GstCalculator};
use crate::core::Result;

/// Invoice preview request from the checkout summary
#[derive(Debug, Deserialize)]
pub struct InvoicePreviewRequest {
    pub amount: Decimal,
    pub gst_rate: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct InvoicePreviewResponse {
    pub invoice_number: String,
    #[serde(flatten)]
    pub breakdown: GstBreakdown,
}

/// Preview the tax breakdown and invoice number for an amount
///
/// POST /api/invoices/preview
///
/// The returned invoice number is NOT reserved; persistence and
/// uniqueness are the caller's responsibility.
#[post("/preview")]
async fn preview_invoice(
    body: web::Json<InvoicePreviewRequest>,
    calculator: web::Data<GstCalculator>,
) -> Result<HttpResponse> {
    let breakdown = calculator.calculate(body.amount, body.gst_rate)?;

    Ok(HttpResponse::Ok().json(InvoicePreviewResponse {
        invoice_number: generate_invoice_number(),
        breakdown,
    }))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig, calculator: GstCalculator) {
    cfg.service(
        web::scope("/api/invoices")
            .app_data(web::Data::new(calculator))
            .service(preview_invoice),
    );
}
