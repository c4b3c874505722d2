//! 公共代码接口 trait 定义

use shared_lib::CommCdMap;

/// 公共代码接口
///
/// 失败策略：返回空值。这个接口不会失败，调用方必须能处理空结果。
#[async_trait::async_trait]
pub trait CommonCodeApiTrait: Send + Sync + 'static {
    /// 批量查询公共代码
    ///
    /// # 参数
    /// - `grp_cds`: 逗号分隔的组代码，例如 `"PRJ_GBN,PRJ_STS_CD"`
    ///
    /// # 返回值
    /// 组代码 -> 代码列表；任何失败都返回空的 map
    async fn get_comm_cd_list(&self, grp_cds: &str) -> CommCdMap;
}
