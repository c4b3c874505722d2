//! 通用数据结构
//!
//! 包含所有接口共用的响应信封 [`ApiEnvelope`] 以及公共代码 [`CommCdDto`]。

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use validator::Validate;

/// 后端统一的响应信封
///
/// 所有接口都返回 `{ success, data, error }` 结构，真正的业务数据在 `data` 中。
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: T,

    /// 后端没有约定错误结构，原样保留
    #[serde(default)]
    pub error: Value,
}

/// 公共代码
///
/// 由后端维护的枚举值（代码值 + 显示名称），按照组代码分组，用于下拉框和标签显示。
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommCdDto {
    /// 代码值，例如 `"10"`
    pub cd_val: String,

    /// 代码名称，例如 `"运营"`
    pub cd_val_nm: String,

    /// 所属组代码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grp_cd: Option<String>,
}

/// 组代码 -> 代码列表
pub type CommCdMap = HashMap<String, Vec<CommCdDto>>;

/// 公共代码查询参数
///
/// - `grp_cds`: 逗号分隔的组代码，例如 `"PRJ_GBN,PRJ_STS_CD"`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommCdReqDto {
    #[validate(length(min = 1, max = 500))]
    pub grp_cds: String,
}

impl CommCdReqDto {
    pub fn new<S: Into<String>>(grp_cds: S) -> Self {
        Self { grp_cds: grp_cds.into() }
    }

    /// 使用多个组代码构造查询参数
    pub fn from_groups(groups: &[&str]) -> Self {
        Self::new(groups.join(","))
    }
}

/// 兼容字符串和数字两种格式的序号字段（`rowNum`）
///
/// 统一转换为字符串，`null` 或缺失时为 `None`。
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!("rowNum 类型无效: {other}"))),
    }
}

/// 必填的字符串或数字字段，统一转换为字符串，`null` 视为格式错误
pub fn required_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_number(deserializer)?.ok_or_else(|| de::Error::custom("字段不能为 null"))
}
