//! HTTP 路由与处理函数
//!
//! 读接口统一返回 `{"value":[...]}` 信封；配置写接口经
//! CSRF 中间件保护。

use axum::extract::{Path, State};
use axum::http::header::HeaderName;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, head};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};

use crate::api::csrf::{self, CSRF_FETCH, CSRF_HEADER};
use crate::domain::{ApproverGroup, ApproverUser};
use crate::error::ApiResult;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let config_routes = Router::new()
        .route("/api/config", head(csrf_probe))
        .route(
            "/api/config/approver-groups",
            get(list_groups).post(create_group),
        )
        .route("/api/config/approver-groups/{group_code}", delete(delete_group))
        .route(
            "/api/config/approver-users",
            get(list_users).post(create_user),
        )
        .route("/api/config/approver-users/{id}", delete(delete_user))
        .layer(middleware::from_fn_with_state(
            state.csrf.clone(),
            csrf::csrf_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(render_metrics))
        .route("/api/vendor/line-items", get(line_items))
        .route("/api/vendor/summary", get(items_summary))
        .merge(config_routes)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

async fn line_items(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let items = state.handler.line_items().await?;
    Ok(Json(json!({ "value": items })))
}

async fn items_summary(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let summaries = state.handler.items_summary().await?;
    Ok(Json(json!({ "value": summaries })))
}

/// CSRF 探测：带 fetch 哨兵的 HEAD 在响应头里领到新令牌
async fn csrf_probe(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<HeaderMap, StatusCode> {
    let mut response_headers = HeaderMap::new();

    let wants_token = headers
        .get(CSRF_HEADER)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case(CSRF_FETCH));

    if wants_token {
        let token = state.csrf.issue().await;
        let value = token
            .parse()
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        response_headers.insert(HeaderName::from_static(CSRF_HEADER), value);
    }

    Ok(response_headers)
}

async fn list_groups(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let groups = state.handler.list_groups().await?;
    Ok(Json(json!({ "value": groups })))
}

async fn create_group(
    State(state): State<AppState>,
    Json(group): Json<ApproverGroup>,
) -> ApiResult<(StatusCode, Json<ApproverGroup>)> {
    let created = state.handler.create_group(group).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_group(
    State(state): State<AppState>,
    Path(group_code): Path<String>,
) -> ApiResult<StatusCode> {
    state.handler.delete_group(&group_code).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let users = state.handler.list_users().await?;
    Ok(Json(json!({ "value": users })))
}

async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<ApproverUser>,
) -> ApiResult<(StatusCode, Json<ApproverUser>)> {
    let created = state.handler.create_user(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.handler.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
