//! 客户端错误

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 传输层失败（连接、超时等）
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 读取调用收到非 2xx 响应
    #[error("HTTP {status}: {detail}")]
    RequestFailed { status: u16, detail: String },

    /// 创建/删除调用被拒绝；detail 为从响应体提取的消息
    #[error("{0}")]
    WriteRejected(String),

    /// 响应体无法解码为目标类型
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 从被拒绝的写响应中提取失败详情
///
/// 依次尝试：JSON 形态的 `error.message`、原始响应体、
/// HTTP 状态的标准原因短语。
pub fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    if !body.is_empty() {
        return body.to_string();
    }
    status.canonical_reason().unwrap_or("Unknown error").to_string()
}
