//! 成员数据模型
//!
//! [`MemDto`] 是对外暴露的唯一成员结构。后端同一个概念存在多种字段拼写，
//! 这些差异在 `api-client` 的数据获取边界统一转换，不会泄漏到这里。

use crate::models::common::string_or_number;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 成员信息（规范字段）
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemDto {
    /// 列表序号
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub row_num: Option<String>,

    /// 成员ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_id: Option<String>,

    /// 成员姓名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_nm: Option<String>,

    /// 成员类型代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbr_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbr_type_nm: Option<String>,

    /// 出生日期，例如 `19900101`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_dt: Option<String>,

    /// 性别代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_nm: Option<String>,

    /// 手机号码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_phone_num: Option<String>,

    /// 普通电话号码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnrl_phone_num: Option<String>,

    /// 技术等级代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_grade: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_grade_nm: Option<String>,

    /// 当前所在项目名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curr_prj_nm: Option<String>,
}

/// 成员查询条件
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemReqDto {
    /// 姓名（模糊搜索）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub mem_nm: Option<String>,

    /// 成员类型代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbr_type: Option<String>,

    /// 手机号码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20))]
    pub cell_phone_num: Option<String>,

    /// 旧版姓名参数，保留兼容
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub mbr_nm: Option<String>,
}
