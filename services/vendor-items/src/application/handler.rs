//! 读模型与配置维护的应用逻辑

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use voi_domain::{aggregate, normalize, LineItem, VendorSummary};
use voi_errors::{AppError, AppResult};

use crate::domain::{ApproverGroup, ApproverGroupRepository, ApproverUser, ApproverUserRepository};
use crate::infrastructure::sap::LineItemSource;

pub struct ServiceHandler {
    source: Arc<dyn LineItemSource>,
    groups: Arc<dyn ApproverGroupRepository>,
    users: Arc<dyn ApproverUserRepository>,
}

impl ServiceHandler {
    pub fn new(
        source: Arc<dyn LineItemSource>,
        groups: Arc<dyn ApproverGroupRepository>,
        users: Arc<dyn ApproverUserRepository>,
    ) -> Self {
        Self {
            source,
            groups,
            users,
        }
    }

    /// 拉取并归一化行项目
    pub async fn line_items(&self) -> AppResult<Vec<LineItem>> {
        metrics::counter!("line_items_requests_total").increment(1);
        let records = self.source.fetch_line_items().await?;
        info!(count = records.len(), "Line items normalized");
        Ok(records.iter().map(normalize).collect())
    }

    /// 按供应商聚合的汇总视图，逾期判定基于服务器当日
    pub async fn items_summary(&self) -> AppResult<Vec<VendorSummary>> {
        metrics::counter!("summary_requests_total").increment(1);
        let records = self.source.fetch_summary_items().await?;
        let today = Utc::now().date_naive();
        Ok(aggregate(&records, today))
    }

    pub async fn list_groups(&self) -> AppResult<Vec<ApproverGroup>> {
        self.groups.list().await
    }

    pub async fn create_group(&self, group: ApproverGroup) -> AppResult<ApproverGroup> {
        if group.group_code.trim().is_empty() {
            return Err(AppError::validation("GroupCode is required"));
        }
        self.groups.insert(group).await
    }

    pub async fn delete_group(&self, group_code: &str) -> AppResult<()> {
        self.groups.delete(group_code).await
    }

    pub async fn list_users(&self) -> AppResult<Vec<ApproverUser>> {
        self.users.list().await
    }

    pub async fn create_user(&self, user: ApproverUser) -> AppResult<ApproverUser> {
        if user.group_code.trim().is_empty() {
            return Err(AppError::validation("GroupCode is required"));
        }
        if user.username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        self.users.insert(user).await
    }

    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.users.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use voi_domain::RawRecord;

    use crate::infrastructure::persistence::memory::{
        InMemoryGroupRepository, InMemoryUserRepository,
    };
    use crate::infrastructure::sap::{MockLineItemSource, UPSTREAM_ERROR_MESSAGE};

    fn handler_with_source(source: MockLineItemSource) -> ServiceHandler {
        ServiceHandler::new(
            Arc::new(source),
            Arc::new(InMemoryGroupRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    #[tokio::test]
    async fn test_line_items_are_normalized() {
        let mut source = MockLineItemSource::new();
        source.expect_fetch_line_items().returning(|| {
            Ok(vec![RawRecord::from(json!({
                "LIFNR": "2007",
                "BELNR": "5100000001",
                "GJAHR": "2025",
                "BUZEI": "001",
                "NETDT": "/Date(1755907200000)/",
                "WRBTR": "1250.75"
            }))])
        });

        let handler = handler_with_source(source);
        let items = handler.line_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].supplier, "2007");
        assert_eq!(items[0].generated_id, "5100000001_2025_001");
        assert_eq!(items[0].net_due_date, "2025-08-23");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_verbatim() {
        let mut source = MockLineItemSource::new();
        source
            .expect_fetch_line_items()
            .returning(|| Err(AppError::upstream_unavailable(UPSTREAM_ERROR_MESSAGE)));

        let handler = handler_with_source(source);
        let err = handler.line_items().await.unwrap_err();
        assert_eq!(err.status_code(), 502);
        assert_eq!(err.to_string(), UPSTREAM_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_create_group_requires_code() {
        let handler = handler_with_source(MockLineItemSource::new());
        let err = handler
            .create_group(ApproverGroup {
                group_code: "  ".to_string(),
                description: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_create_user_requires_username() {
        let handler = handler_with_source(MockLineItemSource::new());
        let err = handler
            .create_user(ApproverUser {
                id: 0,
                group_code: "G1".to_string(),
                sequence: 10,
                username: String::new(),
                limit_amount: 0.0,
            })
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
