use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promopay::config::Config;
use promopay::middleware::RequestId;
use promopay::modules::checkout::{CheckoutService, OrderStore};
use promopay::modules::gateway::services::{PaymentProvider, RazorpayClient, SignatureVerifier};
use promopay::modules::invoices::GstCalculator;
use promopay::modules::refunds::RefundService;
use promopay::modules::webhooks::WebhookProcessor;
use promopay::modules::{checkout, invoices, refunds, webhooks};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promopay=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    config.log_startup_warnings();

    tracing::info!("Starting PromoPay payment adapter");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Wire the adapter explicitly; services share one provider handle and
    // one order-state mirror
    let provider: Arc<dyn PaymentProvider> =
        Arc::new(RazorpayClient::from_config(&config.razorpay));
    let verifier = SignatureVerifier::from_config(&config.razorpay);
    let orders = Arc::new(OrderStore::new());
    let gst = GstCalculator::new(config.app.default_gst_rate);

    let checkout_service = Arc::new(CheckoutService::new(
        Arc::clone(&provider),
        verifier.clone(),
        Arc::clone(&orders),
        gst.clone(),
    ));
    let refund_service = Arc::new(RefundService::new(Arc::clone(&provider)));
    let webhook_processor = Arc::new(WebhookProcessor::new(verifier, Arc::clone(&orders)));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let cors_origin = config.app.cors_allowed_origin.clone();

    let server = HttpServer::new(move || {
        let cors = match &cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::permissive(),
        };

        let checkout_service = Arc::clone(&checkout_service);
        let refund_service = Arc::clone(&refund_service);
        let webhook_processor = Arc::clone(&webhook_processor);
        let gst = gst.clone();

        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| {
                checkout::controllers::configure(cfg, checkout_service);
                refunds::controllers::configure(cfg, refund_service);
                webhooks::controllers::configure(cfg, webhook_processor);
                invoices::controllers::configure(cfg, gst);
            })
            .route("/health", web::get().to(health_check))
    })
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated abnormally")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "promopay"
    }))
}
