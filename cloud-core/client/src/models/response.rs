//! 通用响应结构

use serde::{Deserialize, Serialize};

use super::de;

/// 平台错误对象
///
/// 非 2xx 响应的信封中携带，如
/// `{"errorresponse":{"errorcode":431,"cserrorcode":9999,"errortext":"..."}}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(rename = "errorcode")]
    pub error_code: i64,

    #[serde(rename = "cserrorcode", default, skip_serializing_if = "Option::is_none")]
    pub cs_error_code: Option<i64>,

    #[serde(rename = "errortext", default)]
    pub error_text: String,
}

/// 同步操作的成功响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,

    #[serde(rename = "displaytext", default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}
