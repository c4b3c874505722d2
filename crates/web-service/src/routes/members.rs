//! 成员列表页面
//!

use crate::models::err::AppError;
use crate::models::views::ListView;
use crate::AppState;
use api_client::BackendApi;
use axum::extract::{Query, State};
use axum::Json;
use shared_lib::{CommCdReqDto, MemDto, MemReqDto};
use tracing::{debug, instrument};
use validator::Validate;

/// 成员页面使用的公共代码组：成员类型
pub const MEM_CODE_GROUPS: &[&str] = &["MBR_TYPE"];

/// 成员列表
///
/// 支持按姓名、成员类型、手机号查询。
#[instrument(skip(state))]
pub async fn member_list<A: BackendApi>(
    State(state): State<AppState<A>>,
    Query(params): Query<MemReqDto>,
) -> Result<Json<ListView<MemDto>>, AppError> {
    debug!("🔍 成员列表 {:#?}", params);

    params.validate()?;

    let codes = state
        .api
        .get_comm_cd_list(&CommCdReqDto::from_groups(MEM_CODE_GROUPS).grp_cds)
        .await;
    let items = state.api.get_mem_list(Some(&params)).await?;

    debug!("✅ 成员列表加载完成 - {} 个成员", items.len());
    Ok(Json(ListView::new(codes, items)))
}
