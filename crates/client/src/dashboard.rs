//! 行项目与汇总取数

use serde_json::Value;
use voi_domain::{unwrap_envelope, LineItem, VendorSummary};

use crate::error::ClientError;

/// 仪表盘取数客户端
///
/// 每个逻辑读取一次 GET，不重试、不取消：并发触发的两次
/// 取数各自跑完，后返回者覆盖可见状态。
pub struct DashboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch_line_items(&self) -> Result<Vec<LineItem>, ClientError> {
        let data = self.fetch_json("/api/vendor/line-items").await?;
        unwrap_envelope(data)
            .into_iter()
            .map(|record| serde_json::from_value(record.into_value()).map_err(ClientError::from))
            .collect()
    }

    pub async fn fetch_summary(&self) -> Result<Vec<VendorSummary>, ClientError> {
        let data = self.fetch_json("/api/vendor/summary").await?;
        unwrap_envelope(data)
            .into_iter()
            .map(|record| serde_json::from_value(record.into_value()).map_err(ClientError::from))
            .collect()
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!(%url, "Fetching data");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %detail, "Fetch failed");
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}
