//! 后端接口客户端模块
//!
//! 这个模块负责和后端的所有 HTTP 通信：
//! - 发送 GET 请求并解析统一响应信封
//! - 把后端数据转换为 `shared-lib` 中定义的类型
//! - 按照每个接口各自的策略处理失败（向上传递或返回空值）

pub mod apis;
pub mod connection;
pub mod error;
pub mod policy;

pub use apis::traits::{BackendApi, CommonCodeApiTrait, MemberApiTrait, ProjectApiTrait};
pub use connection::ApiClient;
pub use error::ApiError;
pub use policy::ErrorPolicy;

/// 接口调用结果类型
pub type ApiResult<T> = Result<T, ApiError>;
