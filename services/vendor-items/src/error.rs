//! HTTP 错误渲染

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use voi_errors::AppError;

/// `AppError` 的 HTTP 包装，按 OData 错误体渲染
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.to_error_body())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
