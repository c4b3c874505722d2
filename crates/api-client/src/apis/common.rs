//! 公共代码接口
//!
//! 负责调用后端 `/com/codes`

use crate::apis::traits::CommonCodeApiTrait;
use crate::connection::decode_data;
use crate::policy::ErrorPolicy;
use crate::{ApiClient, ApiResult};
use shared_lib::{CommCdMap, CommCdReqDto};
use validator::Validate;

/// 公共代码接口路径
pub const COM_CODES_PATH: &str = "/com/codes";

impl ApiClient {
    async fn fetch_comm_cd_list(&self, grp_cds: &str) -> ApiResult<CommCdMap> {
        let req = CommCdReqDto::new(grp_cds);
        req.validate()?;

        let envelope = self.get_envelope(COM_CODES_PATH, Some(&req)).await?;
        decode_data(envelope.data)
    }
}

#[async_trait::async_trait]
impl CommonCodeApiTrait for ApiClient {
    async fn get_comm_cd_list(&self, grp_cds: &str) -> CommCdMap {
        self.fetch_comm_cd_list(grp_cds).await.or_empty("公共代码")
    }
}
