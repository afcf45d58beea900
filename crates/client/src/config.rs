//! 配置维护控制器
//!
//! 写协议：首个变更调用前通过零体 HEAD 探测取一次 CSRF 令牌并
//! 缓存整个会话；令牌失效不会被单独识别，下一次写入照常失败，
//! 缓存也不清除（沿用观测到的行为）。

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};
use voi_domain::unwrap_envelope;

use crate::error::{error_detail, ClientError};
use crate::{CSRF_FETCH, CSRF_HEADER};

/// 本地"未保存新行"标记，提交前剥除
pub const NEW_ROW_MARKER: &str = "__isNew";

/// 可维护的配置表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTable {
    ApproverGroups,
    ApproverUsers,
}

impl ConfigTable {
    pub fn path(&self) -> &'static str {
        match self {
            Self::ApproverGroups => "approver-groups",
            Self::ApproverUsers => "approver-users",
        }
    }

    /// 删除用的资源键：组表用自然键，用户表用数字代理键
    pub fn resolve_key(&self, row: &Value) -> Option<String> {
        match self {
            Self::ApproverGroups => row
                .get("GroupCode")
                .and_then(|v| v.as_str())
                .filter(|code| !code.is_empty())
                .map(str::to_string),
            Self::ApproverUsers => row.get("ID").and_then(|v| v.as_i64()).map(|id| id.to_string()),
        }
    }

    /// 按表对数字列做类型纠偏（表单输入到达时是字符串）
    pub fn coerce_numeric_columns(&self, row: &mut Value) {
        if *self == Self::ApproverUsers {
            coerce_integer(row, "Sequence");
            coerce_float(row, "LimitAmount");
        }
    }
}

fn coerce_integer(row: &mut Value, column: &str) {
    if let Some(parsed) = row
        .get(column)
        .and_then(|v| v.as_str())
        .and_then(|s| s.trim().parse::<i64>().ok())
    {
        row[column] = Value::from(parsed);
    }
}

fn coerce_float(row: &mut Value, column: &str) {
    if let Some(parsed) = row
        .get(column)
        .and_then(|v| v.as_str())
        .and_then(|s| s.trim().parse::<f64>().ok())
    {
        row[column] = Value::from(parsed);
    }
}

/// 提交前的行准备：剥除新行标记并纠偏数字列
pub fn prepare_row(table: ConfigTable, row: &Value) -> Value {
    let mut payload = row.clone();
    if let Some(obj) = payload.as_object_mut() {
        obj.remove(NEW_ROW_MARKER);
    }
    table.coerce_numeric_columns(&mut payload);
    payload
}

/// 配置表 CRUD 客户端
pub struct ConfigClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: Mutex<Option<String>>,
}

impl ConfigClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            csrf_token: Mutex::new(None),
        }
    }

    /// 懒取 CSRF 令牌，会话期内复用缓存
    async fn csrf_token(&self) -> Result<String, ClientError> {
        let mut cached = self.csrf_token.lock().await;
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }

        let response = self
            .http
            .head(format!("{}/api/config", self.base_url))
            .header(CSRF_HEADER, CSRF_FETCH)
            .send()
            .await?;

        let token = response
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                ClientError::WriteRejected("CSRF token missing from probe response".to_string())
            })?;

        info!("CSRF token fetched");
        *cached = Some(token.clone());
        Ok(token)
    }

    /// 拉取全表（成功的写批次之后调用方整表重取重绘）
    pub async fn list(&self, table: ConfigTable) -> Result<Vec<Value>, ClientError> {
        let url = format!("{}/api/config/{}", self.base_url, table.path());
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailed {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(unwrap_envelope(response.json().await?)
            .into_iter()
            .map(|record| record.into_value())
            .collect())
    }

    /// 逐行提交待保存的新行（不批量）
    ///
    /// 任何一行失败即中止剩余行，并带出提取到的失败详情。
    pub async fn save_new_rows(
        &self,
        table: ConfigTable,
        rows: &[Value],
    ) -> Result<usize, ClientError> {
        let token = self.csrf_token().await?;
        let url = format!("{}/api/config/{}", self.base_url, table.path());
        let mut created = 0;

        for row in rows {
            let payload = prepare_row(table, row);
            let response = self
                .http
                .post(&url)
                .header(CSRF_HEADER, &token)
                .json(&payload)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ClientError::WriteRejected(error_detail(status, &body)));
            }
            created += 1;
        }

        info!(table = table.path(), created, "Rows created");
        Ok(created)
    }

    /// 逐行删除选中的行
    ///
    /// 解析不出资源键的行记一条警告后跳过，不视为失败。
    pub async fn delete_rows(
        &self,
        table: ConfigTable,
        rows: &[Value],
    ) -> Result<usize, ClientError> {
        let token = self.csrf_token().await?;
        let mut deleted = 0;

        for row in rows {
            let Some(key) = table.resolve_key(row) else {
                warn!(table = table.path(), "Row without resolvable key skipped");
                continue;
            };

            let url = format!("{}/api/config/{}/{}", self.base_url, table.path(), key);
            let response = self
                .http
                .delete(&url)
                .header(CSRF_HEADER, &token)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ClientError::WriteRejected(error_detail(status, &body)));
            }
            deleted += 1;
        }

        info!(table = table.path(), deleted, "Rows deleted");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prepare_row_strips_marker_and_coerces() {
        let row = json!({
            "__isNew": true,
            "GroupCode": "G1",
            "Sequence": "10",
            "Username": "ayse.yilmaz",
            "LimitAmount": "5000.50"
        });
        let prepared = prepare_row(ConfigTable::ApproverUsers, &row);
        assert!(prepared.get(NEW_ROW_MARKER).is_none());
        assert_eq!(prepared["Sequence"], json!(10));
        assert_eq!(prepared["LimitAmount"], json!(5000.5));
        assert_eq!(prepared["Username"], json!("ayse.yilmaz"));
    }

    #[test]
    fn test_prepare_row_groups_not_coerced() {
        let row = json!({"__isNew": true, "GroupCode": "G1", "Description": "10"});
        let prepared = prepare_row(ConfigTable::ApproverGroups, &row);
        // 组表没有数字列，字符串保持原样
        assert_eq!(prepared["Description"], json!("10"));
    }

    #[test]
    fn test_resolve_key_groups_natural_key() {
        let table = ConfigTable::ApproverGroups;
        assert_eq!(
            table.resolve_key(&json!({"GroupCode": "G1"})),
            Some("G1".to_string())
        );
        assert_eq!(table.resolve_key(&json!({"GroupCode": ""})), None);
        assert_eq!(table.resolve_key(&json!({})), None);
    }

    #[test]
    fn test_resolve_key_users_surrogate_id() {
        let table = ConfigTable::ApproverUsers;
        assert_eq!(table.resolve_key(&json!({"ID": 42})), Some("42".to_string()));
        assert_eq!(table.resolve_key(&json!({"Username": "x"})), None);
    }

    #[test]
    fn test_unparseable_numeric_left_as_is() {
        let row = json!({"Sequence": "abc", "LimitAmount": "x"});
        let prepared = prepare_row(ConfigTable::ApproverUsers, &row);
        assert_eq!(prepared["Sequence"], json!("abc"));
    }
}
