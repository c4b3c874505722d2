//! 接口失败处理策略
//!
//! 不同接口对失败的处理方式不同，每个调用点必须显式选择一种：
//!
//! - [`ErrorPolicy::propagate`]: 记录日志后把错误交给调用方，由页面负责提示用户（项目、成员列表）
//! - [`ErrorPolicy::or_empty`]: 记录日志后返回空值，调用方必须能处理空数据（公共代码）

use crate::ApiResult;
use tracing::error;

pub trait ErrorPolicy<T> {
    /// 记录错误日志，结果原样返回
    fn propagate(self, context: &str) -> ApiResult<T>;

    /// 记录错误日志，失败时返回 [`Default`] 空值
    fn or_empty(self, context: &str) -> T
    where
        T: Default;
}

impl<T> ErrorPolicy<T> for ApiResult<T> {
    fn propagate(self, context: &str) -> ApiResult<T> {
        if let Err(err) = &self {
            error!("❌ {} 接口调用失败: {}", context, err);
        }
        self
    }

    fn or_empty(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                error!("❌ {} 接口调用失败，返回空数据: {}", context, err);
                T::default()
            }
        }
    }
}
