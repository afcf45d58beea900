//! 响应信封解包
//!
//! 上游与后端各自可能返回四种包装形态，按固定顺序解包，
//! 形态不匹配时返回空列表而不是错误。

use serde_json::Value;

use crate::raw::RawRecord;

/// 按顺序尝试：`{value:[...]}`、`{d:{results:[...]}}`、`{d:...}`
/// （非数组时视为单元素）、顶层数组；全部不匹配时为空列表。
pub fn unwrap_envelope(data: Value) -> Vec<RawRecord> {
    match data {
        Value::Object(mut obj) => {
            if let Some(Value::Array(items)) = obj.remove("value") {
                return items.into_iter().map(RawRecord::new).collect();
            }
            if let Some(d) = obj.remove("d") {
                return match d {
                    Value::Object(mut inner) => match inner.remove("results") {
                        Some(Value::Array(items)) => {
                            items.into_iter().map(RawRecord::new).collect()
                        }
                        _ => vec![RawRecord::new(Value::Object(inner))],
                    },
                    Value::Array(items) => items.into_iter().map(RawRecord::new).collect(),
                    other => vec![RawRecord::new(other)],
                };
            }
            Vec::new()
        }
        Value::Array(items) => items.into_iter().map(RawRecord::new).collect(),
        _ => Vec::new(),
    }
}
