//! voi-errors - 统一错误处理
//!
//! 错误的线上表示采用配置存储使用的 OData 错误格式

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    UpstreamUnavailable(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn upstream_unavailable(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Forbidden(_) => 403,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
            Self::UpstreamUnavailable(_) => 502,
        }
    }

    /// 不带变体前缀的裸消息（线上错误体用；Display 带前缀供日志用）
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::Forbidden(msg)
            | Self::Conflict(msg)
            | Self::Internal(msg)
            | Self::UpstreamUnavailable(msg) => msg,
        }
    }

    /// 转换为 OData 错误响应体
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                code: self.status_code().to_string(),
                message: self.detail().to_string(),
            },
        }
    }
}

/// OData 风格错误响应体：`{"error":{"code":"...","message":"..."}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("x").status_code(), 404);
        assert_eq!(AppError::validation("x").status_code(), 400);
        assert_eq!(AppError::forbidden("x").status_code(), 403);
        assert_eq!(AppError::conflict("x").status_code(), 409);
        assert_eq!(AppError::internal("x").status_code(), 500);
        assert_eq!(AppError::upstream_unavailable("x").status_code(), 502);
    }

    #[test]
    fn test_error_body_carries_bare_detail() {
        // 线上错误体不带变体前缀，客户端展示的就是这条消息
        let body = AppError::conflict("Duplicate key").to_error_body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "409");
        assert_eq!(json["error"]["message"], "Duplicate key");
    }

    #[test]
    fn test_display_keeps_variant_prefix_for_logs() {
        let err = AppError::conflict("Duplicate key");
        assert_eq!(err.to_string(), "Conflict: Duplicate key");
        assert_eq!(err.detail(), "Duplicate key");
    }

    #[test]
    fn test_upstream_message_is_verbatim() {
        // 上游错误只携带固定的用户可见文案，不附加前缀
        let err = AppError::upstream_unavailable("SAP Sisteminden veri çekilemedi");
        assert_eq!(err.to_string(), "SAP Sisteminden veri çekilemedi");
    }
}
