use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};

use crate::domain::dimensions::{Dimension, DimensionEditor, DimensionLimits, DimensionTriple};
use crate::domain::order::{OrderRecord, SubmissionHandler};
use crate::metrics::Metrics;

// ============================================================================
// HTTP API - The Surface Consumed by the Configurator Frontend
// ============================================================================
//
// Stateless per request: the frontend owns the dimension triple and sends
// it with every validation call; an order submission carries the full
// record. Outcomes always come back as 200 with a success flag, matching
// the form's expectations.
//
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateDimensionRequest {
    pub dimensions: DimensionTriple,
    pub dimension: Dimension,
    pub value: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateDimensionResponse {
    pub accepted: bool,
    pub limits: DimensionLimits,
    pub error: Option<String>,
    /// Meter-scale triple for the 3D preview: the post-edit dimensions
    /// when the edit was accepted, the unchanged ones otherwise.
    pub preview_m: DimensionTriple,
}

/// Start the API server
pub async fn run(
    handler: Arc<SubmissionHandler>,
    metrics: Arc<Metrics>,
    port: u16,
) -> std::io::Result<()> {
    tracing::info!("🌐 Starting API server on http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(handler.clone()))
            .app_data(web::Data::new(metrics.clone()))
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/dimensions/validate",
        web::post().to(validate_dimension_handler),
    )
    .route("/api/orders", web::post().to(submit_order_handler))
    .route("/health", web::get().to(health_handler))
    .route("/metrics", web::get().to(metrics_handler));
}

async fn validate_dimension_handler(
    metrics: web::Data<Arc<Metrics>>,
    request: web::Json<ValidateDimensionRequest>,
) -> impl Responder {
    let ValidateDimensionRequest {
        dimensions,
        dimension,
        value,
    } = request.into_inner();

    // The editor commits on accept and retains the prior value otherwise;
    // the preview always reflects its state after the proposal.
    let mut editor = DimensionEditor::new(dimensions);
    let validation = editor.propose(dimension, value);
    metrics.record_dimension_check(dimension.as_str(), validation.accepted);

    HttpResponse::Ok().json(ValidateDimensionResponse {
        accepted: validation.accepted,
        limits: validation.limits,
        error: editor.errors().get(dimension).map(str::to_string),
        preview_m: editor.dimensions().in_meters(),
    })
}

async fn submit_order_handler(
    handler: web::Data<Arc<SubmissionHandler>>,
    order: web::Json<OrderRecord>,
) -> impl Responder {
    let outcome = handler.submit(order.into_inner()).await;
    HttpResponse::Ok().json(outcome)
}

async fn metrics_handler(metrics: web::Data<Arc<Metrics>>) -> impl Responder {
    let encoder = TextEncoder::new();
    let metric_families = metrics.registry().gather();

    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer)
}

async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "woodcrate"
    }))
}

// ============================================================================
// Handler Tests
// ============================================================================
