//! voi-client - 仪表盘后端的 HTTP 客户端
//!
//! 原前端里的取数逻辑与配置维护控制器在这里以 `reqwest`
//! 客户端库的形式呈现：读取容忍四种响应信封；写入走
//! CSRF 令牌的"探测-缓存-附加"三步握手。

pub mod config;
pub mod dashboard;
pub mod error;

pub use config::{ConfigClient, ConfigTable, NEW_ROW_MARKER};
pub use dashboard::DashboardClient;
pub use error::{error_detail, ClientError};

/// CSRF 令牌头名
pub const CSRF_HEADER: &str = "x-csrf-token";

/// 探测请求的哨兵值
pub const CSRF_FETCH: &str = "fetch";
