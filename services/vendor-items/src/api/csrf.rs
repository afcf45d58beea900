//! CSRF 令牌签发与校验
//!
//! 令牌经 HEAD 探测签发，进程存活期间一直有效。

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

pub const CSRF_HEADER: &str = "x-csrf-token";

/// 探测请求在令牌头里携带的哨兵值
pub const CSRF_FETCH: &str = "fetch";

#[derive(Clone, Default)]
pub struct CsrfTokens {
    issued: Arc<RwLock<HashSet<String>>>,
}

impl CsrfTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.issued.write().await.insert(token.clone());
        token
    }

    pub async fn is_valid(&self, token: &str) -> bool {
        self.issued.read().await.contains(token)
    }
}

/// 写请求的 CSRF 校验中间件，读请求直接放行
pub async fn csrf_middleware(
    State(tokens): State<CsrfTokens>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let mutating = matches!(
        *request.method(),
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    );
    if !mutating {
        return Ok(next.run(request).await);
    }

    let presented = request
        .headers()
        .get(CSRF_HEADER)
        .and_then(|h| h.to_str().ok());

    match presented {
        Some(token) if tokens.is_valid(token).await => Ok(next.run(request).await),
        _ => {
            warn!(method = %request.method(), uri = %request.uri(), "CSRF validation failed");
            Err(StatusCode::FORBIDDEN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issued_token_validates() {
        let tokens = CsrfTokens::new();
        let token = tokens.issue().await;
        assert!(tokens.is_valid(&token).await);
        assert!(!tokens.is_valid("made-up").await);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let tokens = CsrfTokens::new();
        assert_ne!(tokens.issue().await, tokens.issue().await);
    }
}
