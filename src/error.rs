use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("Migration error: {0}")]
    Migration(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Pool(_) | ApiError::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ApiError::NotFound | ApiError::BadRequest(_) => self.to_string(),
            _ => {
                // storage details stay in the logs, never in the response
                tracing::error!(error = %self, "Request failed");
                "Internal server error".to_string()
            }
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn not_found_maps_to_404_with_fixed_detail() {
        let err = ApiError::NotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({"detail": "Todo not found"}));
    }

    #[actix_web::test]
    async fn bad_request_maps_to_400_with_message() {
        let err = ApiError::BadRequest("text cannot be empty".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({"detail": "text cannot be empty"}));
    }

    #[actix_web::test]
    async fn storage_errors_map_to_500_without_leaking_details() {
        let err = ApiError::from(diesel::result::Error::BrokenTransactionManager);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({"detail": "Internal server error"}));
    }
}
