//! 成员接口 trait 定义

use crate::ApiResult;
use shared_lib::{MemDto, MemReqDto};

/// 成员接口
///
/// 失败策略：向上传递。
#[async_trait::async_trait]
pub trait MemberApiTrait: Send + Sync + 'static {
    /// 查询成员列表
    ///
    /// # 参数
    /// - `params`: 姓名/类型/手机号查询条件
    ///
    /// # 返回值
    /// 返回转换为规范字段后的成员列表。后端 `data` 不是数组时返回空列表。
    async fn get_mem_list(&self, params: Option<&MemReqDto>) -> ApiResult<Vec<MemDto>>;
}
