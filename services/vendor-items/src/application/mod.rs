//! 应用服务层

mod handler;

pub use handler::ServiceHandler;
