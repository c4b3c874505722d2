//! 后端接口模块
//!
//! 每个业务实体一个接口封装，全部由 [`crate::ApiClient`] 实现

pub mod common;
pub mod member;
pub mod project;
pub mod traits;

// 重新导出具体的类型
pub use traits::{BackendApi, CommonCodeApiTrait, MemberApiTrait, ProjectApiTrait};
