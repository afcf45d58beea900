//! 日期线格式解析
//!
//! 上游会混用三种日期表示：包裹的毫秒纪元（OData v2 遗留格式）、
//! ISO 日期/时间字符串、8 位紧凑数字（YYYYMMDD）。统一转换为
//! `YYYY-MM-DD`，无法识别时原样返回，绝不报错。

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static WRAPPED_EPOCH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/Date\((-?\d+)\)/$").unwrap());

static ISO_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// 识别出的日期线格式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormat {
    /// `/Date(<毫秒>)/`，毫秒可为负
    WrappedEpochMillis(i64),
    /// 以 `YYYY-MM-DD` 开头的 ISO 风格字符串
    IsoLike,
    /// 恰好 8 位 ASCII 数字：YYYYMMDD
    CompactNumeric,
    /// 无法识别
    Unrecognized,
}

/// 对输入字符串分类
pub fn classify(value: &str) -> DateFormat {
    if let Some(captures) = WRAPPED_EPOCH_REGEX.captures(value) {
        if let Ok(millis) = captures[1].parse::<i64>() {
            return DateFormat::WrappedEpochMillis(millis);
        }
    }
    if ISO_PREFIX_REGEX.is_match(value) {
        return DateFormat::IsoLike;
    }
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        return DateFormat::CompactNumeric;
    }
    DateFormat::Unrecognized
}

/// 毫秒纪元 → UTC 日历日期
fn from_epoch_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
}

/// ISO 风格字符串截断为日期部分
fn truncate_iso(value: &str) -> String {
    value[..10].to_string()
}

/// YYYYMMDD → YYYY-MM-DD
fn expand_compact(value: &str) -> String {
    format!("{}-{}-{}", &value[0..4], &value[4..6], &value[6..8])
}

/// 归一化日期字符串，无法识别时原样返回
pub fn normalize_date(value: &str) -> String {
    match classify(value) {
        DateFormat::WrappedEpochMillis(millis) => {
            from_epoch_millis(millis).unwrap_or_else(|| value.to_string())
        }
        DateFormat::IsoLike => truncate_iso(value),
        DateFormat::CompactNumeric => expand_compact(value),
        DateFormat::Unrecognized => value.to_string(),
    }
}
