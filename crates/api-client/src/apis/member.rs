//! 成员接口
//!
//! 负责调用后端 `/mem/list`，并把后端多种字段拼写统一转换为 [`MemDto`]。
//!
//! ## 字段映射
//!
//! 同一个概念后端存在多种拼写，按照下表顺序取第一个有值的字段：
//!
//! | 规范字段       | 后端字段（优先级从高到低）            |
//! |----------------|---------------------------------------|
//! | `memId`        | `memId`, `mbrId`                      |
//! | `memNm`        | `memNm`, `mbrNm`                      |
//! | `birthDt`      | `birth`, `birthDt`, `birthYmd`        |
//! | `gender`       | `birthGbn`, `gender`                  |
//! | `cellPhoneNum` | `cellPhoneNum`, `hpNo`, `mobileNo`    |
//! | `gnrlPhoneNum` | `gnrlPhoneNum`, `telNo`               |
//! | `techGradeNm`  | `techGrdNm`, `skillGrdNm`             |
//! | `currPrjNm`    | `currPrjNm`, `currentProjectNm`       |
//!
//! 排在前面的是当前后端实际返回的字段，后面的是旧版拼写。

use crate::apis::traits::MemberApiTrait;
use crate::connection::decode_data;
use crate::policy::ErrorPolicy;
use crate::{ApiClient, ApiResult};
use serde::Deserialize;
use shared_lib::models::common::string_or_number;
use shared_lib::{MemDto, MemReqDto};
use tracing::warn;

/// 成员列表接口路径
pub const MEM_LIST_PATH: &str = "/mem/list";

/// 后端返回的成员原始数据，只在这里使用
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MemWire {
    #[serde(default, deserialize_with = "string_or_number")]
    row_num: Option<String>,
    mem_id: Option<String>,
    mbr_id: Option<String>,
    mem_nm: Option<String>,
    mbr_nm: Option<String>,
    mbr_type: Option<String>,
    mbr_type_nm: Option<String>,
    birth: Option<String>,
    birth_dt: Option<String>,
    birth_ymd: Option<String>,
    birth_gbn: Option<String>,
    gender: Option<String>,
    gender_nm: Option<String>,
    cell_phone_num: Option<String>,
    hp_no: Option<String>,
    mobile_no: Option<String>,
    gnrl_phone_num: Option<String>,
    tel_no: Option<String>,
    tech_grade: Option<String>,
    tech_grd_nm: Option<String>,
    skill_grd_nm: Option<String>,
    curr_prj_nm: Option<String>,
    current_project_nm: Option<String>,
}

impl From<MemWire> for MemDto {
    fn from(w: MemWire) -> Self {
        MemDto {
            row_num: w.row_num,
            mem_id: w.mem_id.or(w.mbr_id),
            mem_nm: w.mem_nm.or(w.mbr_nm),
            mbr_type: w.mbr_type,
            mbr_type_nm: w.mbr_type_nm,
            birth_dt: w.birth.or(w.birth_dt).or(w.birth_ymd),
            gender: w.birth_gbn.or(w.gender),
            gender_nm: w.gender_nm,
            cell_phone_num: w.cell_phone_num.or(w.hp_no).or(w.mobile_no),
            gnrl_phone_num: w.gnrl_phone_num.or(w.tel_no),
            tech_grade: w.tech_grade,
            tech_grade_nm: w.tech_grd_nm.or(w.skill_grd_nm),
            curr_prj_nm: w.curr_prj_nm.or(w.current_project_nm),
        }
    }
}

impl ApiClient {
    async fn fetch_mem_list(&self, params: Option<&MemReqDto>) -> ApiResult<Vec<MemDto>> {
        let envelope = self.get_envelope(MEM_LIST_PATH, params).await?;

        // data 不是数组时按空列表处理，页面可以正常显示
        if !envelope.data.is_array() {
            warn!("⚠️ 成员列表 data 不是数组，按空列表处理: {}", envelope.data);
            return Ok(Vec::new());
        }

        let rows: Vec<MemWire> = decode_data(envelope.data)?;
        Ok(rows.into_iter().map(MemDto::from).collect())
    }
}

#[async_trait::async_trait]
impl MemberApiTrait for ApiClient {
    async fn get_mem_list(&self, params: Option<&MemReqDto>) -> ApiResult<Vec<MemDto>> {
        self.fetch_mem_list(params).await.propagate("成员列表")
    }
}
