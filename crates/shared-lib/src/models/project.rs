//! 项目数据模型
//!
//! 定义项目列表接口 `/prj/list` 的返回数据和查询参数

use crate::models::common::{required_string_or_number, string_or_number};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 项目信息
///
/// 代码/名称成对出现的字段（如 `prj_gbn` / `prj_gbn_nm`）是同一个代码的冗余显示副本。
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrjDto {
    /// 列表序号
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub row_num: Option<String>,

    /// 项目ID，后端可能返回数字
    #[serde(deserialize_with = "required_string_or_number")]
    pub prj_id: String,

    /// 项目名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_nm: Option<String>,

    /// 项目类型代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_gbn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_gbn_nm: Option<String>,

    /// 开始日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_str_dt: Option<String>,

    /// 结束日期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_end_dt: Option<String>,

    /// 状态代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_sts_cd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_sts_nm: Option<String>,

    /// 项目说明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_desc: Option<String>,

    /// 工作地点代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_loc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_loc_nm: Option<String>,

    /// 主管公司代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biz_prtnr: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biz_prtnr_nm: Option<String>,
}

/// 项目查询条件
///
/// 所有字段均为可选参数，未设置的字段不会出现在查询字符串中；全部为空表示不过滤。
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PrjReqDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_id: Option<String>,

    /// 项目名称（模糊搜索）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub prj_nm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_gbn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_sts_cd: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_str_dt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prj_end_dt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_loc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biz_prtnr: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prj_dto_only_requires_id() {
        let prj: PrjDto = serde_json::from_value(json!({ "prjId": "P001", "rowNum": 1 })).unwrap();
        assert_eq!(prj.prj_id, "P001");
        assert_eq!(prj.row_num.as_deref(), Some("1"));
        assert_eq!(prj.prj_nm, None);

        assert!(serde_json::from_value::<PrjDto>(json!({ "prjNm": "foo" })).is_err());
    }

    #[test]
    fn test_prj_dto_numeric_id() {
        let rows: Vec<PrjDto> = serde_json::from_value(json!([{ "prjId": 101 }, { "prjId": "P002" }])).unwrap();
        assert_eq!(rows[0].prj_id, "101");
        assert_eq!(rows[1].prj_id, "P002");

        assert!(serde_json::from_value::<PrjDto>(json!({ "prjId": null })).is_err());
    }

    #[test]
    fn test_prj_req_skips_absent_fields() {
        let req = PrjReqDto {
            prj_nm: Some("foo".to_string()),
            prj_sts_cd: Some("10".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({ "prjNm": "foo", "prjStsCd": "10" }));

        assert_eq!(serde_json::to_value(PrjReqDto::default()).unwrap(), json!({}));
    }
}
