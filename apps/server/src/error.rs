use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use state_gateway_aggregator::GatewayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Only wiring defects escape the aggregator; provider failures never do.
    #[error("Failed to aggregate data: {0}")]
    Aggregation(#[from] GatewayError),
    #[error("Not Found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Aggregation(e) => {
                tracing::error!("Aggregation defect: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
