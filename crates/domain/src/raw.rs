//! 上游原始记录

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 上游返回的未规范化记录
///
/// 字段名不可预期（语义命名或遗留 SAP 字段码混用），因此保留为
/// 原始 JSON 值，由别名解析器按需取值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord(pub Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 取出某个键的值，null 视为缺失
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
