//! 公共代码页面
//!

use crate::models::err::AppError;
use crate::models::views::CodeView;
use crate::AppState;
use api_client::BackendApi;
use axum::extract::{Query, State};
use axum::Json;
use shared_lib::CommCdReqDto;
use tracing::{debug, instrument};
use validator::Validate;

/// 按组代码查看公共代码
///
/// `grpCds` 为必填参数，多个组代码用逗号分隔。后端失败时返回空的 `codes`。
#[instrument(skip(state))]
pub async fn common_code_list<A: BackendApi>(
    State(state): State<AppState<A>>,
    Query(req): Query<CommCdReqDto>,
) -> Result<Json<CodeView>, AppError> {
    debug!("🔍 公共代码 {}", req.grp_cds);

    req.validate()?;

    let codes = state.api.get_comm_cd_list(&req.grp_cds).await;
    Ok(Json(CodeView { codes }))
}
