//! REST API server for payment-card form validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # With custom port
//! cardcheck-server --port 8080
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use cardcheck::{validate, CardForm};

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Check API",
        version = "0.1.0",
        description = "Structural payment-card form validation for Visa, MasterCard, and American Express. No checksum verification, no storage.",
        license(name = "MIT"),
        contact(name = "API Support")
    ),
    tags(
        (name = "Validation", description = "Card form validation endpoint"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_card, health),
    components(schemas(ValidateRequest, ValidateResponse, HealthResponse))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "cardOwner": "John Doe",
    "cardNumber": "4111-1111-1111-1111",
    "expiryDate": "2031-04-30",
    "cvc": "123"
}))]
struct ValidateRequest {
    /// Card owner name. Letters and spaces only.
    #[serde(default)]
    card_owner: String,
    /// Card number. Accepts digits with optional spaces or hyphens as separators.
    #[serde(default)]
    card_number: String,
    /// Expiry date (ISO 8601). Only the year and month are used; the card is
    /// valid through the last day of that month.
    #[serde(default)]
    expiry_date: Option<NaiveDate>,
    /// Security code. 3 digits for Visa/MasterCard, 4 for American Express.
    #[serde(default)]
    cvc: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "isValid": true,
    "cardType": "Visa",
    "errors": []
}))]
struct ValidateResponse {
    /// Whether the form passed every check
    is_valid: bool,
    /// Detected network: Visa, MasterCard, or American Express
    #[serde(skip_serializing_if = "Option::is_none")]
    card_type: Option<String>,
    /// Human-readable rejection reasons, in detection order
    errors: Vec<String>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a payment-card form
#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Form is valid", body = ValidateResponse),
        (status = 400, description = "Form is invalid; body lists the reasons", body = ValidateResponse)
    ),
    tag = "Validation"
)]
async fn validate_card(
    Json(req): Json<ValidateRequest>,
) -> (StatusCode, Json<ValidateResponse>) {
    let form = CardForm {
        card_owner: req.card_owner,
        card_number: req.card_number,
        expiry_date: req.expiry_date,
        cvc: req.cvc,
    };

    let outcome = validate(&form);

    tracing::debug!(
        valid = outcome.is_valid(),
        network = outcome.network().map(|n| n.name()),
        findings = outcome.findings().len(),
        "card form validated"
    );

    let status = if outcome.is_valid() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    let body = ValidateResponse {
        is_valid: outcome.is_valid(),
        card_type: outcome.network().map(|n| n.name().to_string()),
        errors: outcome.error_messages(),
    };

    (status, Json(body))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse args
    let port: u16 = std::env::args()
        .skip_while(|a| a != "--port")
        .nth(1)
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    // Build router with Swagger UI
    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/validate", post(validate_card))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://localhost:{}/swagger-ui/", port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
