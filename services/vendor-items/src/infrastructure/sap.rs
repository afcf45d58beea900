//! SAP 网关取数适配器
//!
//! 查询串按原服务的字面形式拼接（不做 URL 编码），
//! 网关对该形式已验证可用。

use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::{error, info};
use voi_config::SapConfig;
use voi_domain::{unwrap_envelope, RawRecord};
use voi_errors::{AppError, AppResult};

/// 上游失败时对外的固定文案
pub const UPSTREAM_ERROR_MESSAGE: &str = "SAP Sisteminden veri çekilemedi";

/// 行项目数据源
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LineItemSource: Send + Sync {
    async fn fetch_line_items(&self) -> AppResult<Vec<RawRecord>>;
    async fn fetch_summary_items(&self) -> AppResult<Vec<RawRecord>>;
}

pub struct SapGatewayClient {
    http: reqwest::Client,
    config: SapConfig,
}

impl SapGatewayClient {
    pub fn new(config: SapConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn query(&self, top: u32) -> String {
        format!(
            "sap-client={}&$filter=Supplier eq '{}' and FinancialAccountType eq '{}' and ClearingAccountingDocument eq ''&$top={}&$format=json",
            self.config.sap_client, self.config.supplier, self.config.account_type, top
        )
    }

    async fn fetch(&self, top: u32) -> AppResult<Vec<RawRecord>> {
        let url = format!(
            "{}{}?{}",
            self.config.base_url,
            self.config.service_path,
            self.query(top)
        );

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
            request = request.basic_auth(username, Some(password.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "SAP gateway request failed");
            metrics::counter!("sap_upstream_errors_total").increment(1);
            AppError::upstream_unavailable(UPSTREAM_ERROR_MESSAGE)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // 响应体截断到 1000 字符，避免把整页错误刷进日志
            let preview: String = body.chars().take(1000).collect();
            error!(status = status.as_u16(), body = %preview, "SAP gateway returned error");
            metrics::counter!("sap_upstream_errors_total").increment(1);
            return Err(AppError::upstream_unavailable(UPSTREAM_ERROR_MESSAGE));
        }

        let data: Value = response.json().await.map_err(|e| {
            error!(error = %e, "SAP gateway response was not valid JSON");
            metrics::counter!("sap_upstream_errors_total").increment(1);
            AppError::upstream_unavailable(UPSTREAM_ERROR_MESSAGE)
        })?;

        let records = unwrap_envelope(data);
        info!(count = records.len(), top, "SAP records fetched");
        metrics::counter!("sap_records_fetched_total").increment(records.len() as u64);
        Ok(records)
    }
}

#[async_trait]
impl LineItemSource for SapGatewayClient {
    async fn fetch_line_items(&self) -> AppResult<Vec<RawRecord>> {
        self.fetch(self.config.line_items_top).await
    }

    async fn fetch_summary_items(&self) -> AppResult<Vec<RawRecord>> {
        self.fetch(self.config.summary_top).await
    }
}
