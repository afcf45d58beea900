//! voi-domain - 规范化记录模型与纯逻辑核心
//!
//! 上游财务系统的记录存在两套字段命名（语义命名与四字符 SAP 字段码），
//! 本 crate 将其统一为一种规范化记录，并提供汇总聚合与响应信封解包。

pub mod dates;
pub mod envelope;
pub mod line_item;
pub mod mapping;
pub mod normalize;
pub mod raw;
pub mod summary;

pub use envelope::unwrap_envelope;
pub use line_item::{ItemStatus, LineItem};
pub use normalize::normalize;
pub use raw::RawRecord;
pub use summary::{aggregate, VendorSummary};
