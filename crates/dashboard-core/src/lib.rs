//! voi-dashboard-core - 仪表盘呈现逻辑
//!
//! 原前端把全部状态放在一个全局可变对象里；这里改为不可变状态
//! 容器加单一更新函数，过滤/排序/汇总逻辑因此可以脱离 DOM 做
//! 单元测试。

pub mod export;
pub mod kpi;
pub mod state;
pub mod view;

pub use export::{export_csv, export_filename, status_label, ExportError};
pub use kpi::{kpis, Kpis};
pub use state::{apply, Action, DashboardState, SortField, StatusFilter};
pub use view::view;
