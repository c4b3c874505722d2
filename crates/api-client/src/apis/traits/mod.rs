//! 后端接口 trait 定义
//!
//! 页面只依赖这里的抽象接口，测试时可以替换为任意实现。
//!
//! 所有接口 trait 都要求 `Send + Sync + 'static`，这样实现可以放进 `Arc` 在多个请求处理器之间共享。

pub mod common;
pub mod member;
pub mod project;

// 重新导出
pub use common::CommonCodeApiTrait;
pub use member::MemberApiTrait;
pub use project::ProjectApiTrait;

/// 页面需要的全部后端接口
///
/// 同时实现了三个接口 trait 的类型自动实现 [`BackendApi`]
pub trait BackendApi: ProjectApiTrait + MemberApiTrait + CommonCodeApiTrait {}

impl<T> BackendApi for T where T: ProjectApiTrait + MemberApiTrait + CommonCodeApiTrait {}
