//! 审批人配置实体

use serde::{Deserialize, Serialize};

/// 审批组，自然键为 GroupCode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproverGroup {
    #[serde(rename = "GroupCode")]
    pub group_code: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// 审批人，代理键 ID 由服务端在创建时分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproverUser {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "GroupCode")]
    pub group_code: String,
    #[serde(rename = "Sequence", default)]
    pub sequence: i64,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "LimitAmount", default)]
    pub limit_amount: f64,
}
