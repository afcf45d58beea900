//! voi-vendor-items - 供应商未清项服务
//!
//! 从 SAP 网关拉取供应商行项目，归一化后以 `{"value":[...]}`
//! 信封对外提供；同时承载审批人配置表的维护接口与 CSRF 握手。

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
