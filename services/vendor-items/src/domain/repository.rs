//! 仓储接口

use async_trait::async_trait;
use voi_errors::AppResult;

use super::{ApproverGroup, ApproverUser};

#[async_trait]
pub trait ApproverGroupRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ApproverGroup>>;

    /// 插入新组；GroupCode 已存在时返回 Conflict
    async fn insert(&self, group: ApproverGroup) -> AppResult<ApproverGroup>;

    /// 按 GroupCode 删除；不存在时返回 NotFound
    async fn delete(&self, group_code: &str) -> AppResult<()>;
}

#[async_trait]
pub trait ApproverUserRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ApproverUser>>;

    /// 插入新审批人并分配代理键
    async fn insert(&self, user: ApproverUser) -> AppResult<ApproverUser>;

    /// 按 ID 删除；不存在时返回 NotFound
    async fn delete(&self, id: i64) -> AppResult<()>;
}
