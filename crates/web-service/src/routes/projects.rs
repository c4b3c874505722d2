//! 项目列表页面
//!

use crate::models::err::AppError;
use crate::models::views::ListView;
use crate::AppState;
use api_client::BackendApi;
use axum::extract::{Query, State};
use axum::Json;
use shared_lib::{CommCdReqDto, PrjDto, PrjReqDto};
use tracing::{debug, instrument};
use validator::Validate;

/// 项目页面使用的公共代码组：项目类型、项目状态
pub const PRJ_CODE_GROUPS: &[&str] = &["PRJ_GBN", "PRJ_STS_CD"];

/// 项目列表
///
/// 查询参数由 [`PrjReqDto`] 决定，全部为可选参数，未填写的条件不会发送给后端。
///
/// 1. 先加载下拉框用的公共代码，失败时为空，不影响页面
/// 2. 再查询项目列表，失败时返回 [`AppError`]，由页面提示用户
#[instrument(skip(state))]
pub async fn project_list<A: BackendApi>(
    State(state): State<AppState<A>>,
    Query(params): Query<PrjReqDto>,
) -> Result<Json<ListView<PrjDto>>, AppError> {
    debug!("🔍 项目列表 {:#?}", params);

    // 验证输入参数，确保有效性
    params.validate()?;

    let codes = state
        .api
        .get_comm_cd_list(&CommCdReqDto::from_groups(PRJ_CODE_GROUPS).grp_cds)
        .await;
    let items = state.api.get_prj_list(Some(&params)).await?;

    debug!("✅ 项目列表加载完成 - {} 个项目", items.len());
    Ok(Json(ListView::new(codes, items)))
}
