//! 内存仓储实现

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use voi_errors::{AppError, AppResult};

use crate::domain::{ApproverGroup, ApproverGroupRepository, ApproverUser, ApproverUserRepository};

#[derive(Default)]
pub struct InMemoryGroupRepository {
    groups: RwLock<Vec<ApproverGroup>>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApproverGroupRepository for InMemoryGroupRepository {
    async fn list(&self) -> AppResult<Vec<ApproverGroup>> {
        Ok(self.groups.read().await.clone())
    }

    async fn insert(&self, group: ApproverGroup) -> AppResult<ApproverGroup> {
        let mut groups = self.groups.write().await;
        if groups.iter().any(|g| g.group_code == group.group_code) {
            return Err(AppError::conflict("Duplicate key"));
        }
        groups.push(group.clone());
        Ok(group)
    }

    async fn delete(&self, group_code: &str) -> AppResult<()> {
        let mut groups = self.groups.write().await;
        let before = groups.len();
        groups.retain(|g| g.group_code != group_code);
        if groups.len() == before {
            return Err(AppError::not_found(format!("Group {group_code} not found")));
        }
        Ok(())
    }
}

pub struct InMemoryUserRepository {
    users: RwLock<Vec<ApproverUser>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApproverUserRepository for InMemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<ApproverUser>> {
        Ok(self.users.read().await.clone())
    }

    async fn insert(&self, mut user: ApproverUser) -> AppResult<ApproverUser> {
        user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }
}
