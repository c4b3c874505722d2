//! 项目接口 trait 定义

use crate::ApiResult;
use shared_lib::{PrjDto, PrjReqDto};

/// 项目接口
///
/// 失败策略：向上传递。调用方负责提示用户。
#[async_trait::async_trait]
pub trait ProjectApiTrait: Send + Sync + 'static {
    /// 查询项目列表
    ///
    /// # 参数
    /// - `params`: 查询条件，`None` 表示不过滤
    ///
    /// # 返回值
    /// 返回后端 `data` 中的项目列表；网络错误、状态码错误和数据格式错误都会返回 `Err`
    async fn get_prj_list(&self, params: Option<&PrjReqDto>) -> ApiResult<Vec<PrjDto>>;
}
