//! 领域模型与仓储接口

mod model;
mod repository;

pub use model::{ApproverGroup, ApproverUser};
pub use repository::{ApproverGroupRepository, ApproverUserRepository};
