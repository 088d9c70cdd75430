use std::sync::Arc;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{CountryParams, EconomyParams, HealthResponse, StateRequest, StateResponse},
};
use axum::{
    extract::State,
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use state_gateway_aggregator::AggregateRequest;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

#[utoipa::path(get, path = "/health", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "gateway".to_string(),
    })
}

#[utoipa::path(get, path = "/", responses((status = 200, description = "Service information")))]
pub async fn root() -> Json<Value> {
    Json(json!({
        "service": "API Gateway",
        "description": "Aggregation gateway for economy, weather and air quality data",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /state": "Aggregate external API data",
            "GET /health": "Health check",
            "GET /api-docs/openapi.json": "OpenAPI document"
        }
    }))
}

/// Fans the requested categories out to their providers and returns whatever
/// came back. Unknown identifiers and failed providers are left out of the body.
#[utoipa::path(
    post,
    path = "/state",
    request_body = StateRequest,
    responses(
        (status = 200, body = StateResponse),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Aggregation defect")
    )
)]
pub async fn get_state(
    State(state): State<Arc<AppState>>,
    Json(body): Json<StateRequest>,
) -> ApiResult<Json<StateResponse>> {
    let request = AggregateRequest::from(body);
    let response = state.aggregator.aggregate(&request).await?;
    Ok(Json(StateResponse::from(response)))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[derive(OpenApi)]
#[openapi(
    paths(health, root, get_state),
    components(schemas(StateRequest, StateResponse, EconomyParams, CountryParams, HealthResponse)),
    tags((name = "state-gateway"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| o.parse::<HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/state", post(get_state))
        .route("/api-docs/openapi.json", get(|| async { Json(openapi) }))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_deadline()))
        .layer(TraceLayer::new_for_http())
}
