//! 模板

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;
use super::tag::ResourceTag;

label_enum! {
    /// 模板查询过滤器（请求参数）
    pub enum TemplateFilter {
        Featured => "featured",
        SelfOwned => "self",
        SelfExecutable => "selfexecutable",
        SharedExecutable => "sharedexecutable",
        Executable => "executable",
        Community => "community",
    }
}

/// 模板信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "displaytext", default)]
    pub display_text: String,

    #[serde(rename = "ispublic", default, deserialize_with = "de::flag")]
    pub is_public: bool,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    #[serde(rename = "isready", default, deserialize_with = "de::flag")]
    pub is_ready: bool,

    #[serde(rename = "passwordenabled", default, deserialize_with = "de::flag")]
    pub password_enabled: bool,

    /// 镜像格式，如 VHD / QCOW2 / OVA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(rename = "isfeatured", default, deserialize_with = "de::flag")]
    pub is_featured: bool,

    #[serde(rename = "crossZones", default, deserialize_with = "de::flag")]
    pub cross_zones: bool,

    #[serde(rename = "ostypeid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub os_type_id: Option<String>,

    #[serde(rename = "ostypename", default, skip_serializing_if = "Option::is_none")]
    pub os_type_name: Option<String>,

    #[serde(default)]
    pub account: String,

    #[serde(rename = "zoneid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub zone_id: Option<String>,

    #[serde(rename = "zonename", default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// 模板大小（字节）
    #[serde(default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(rename = "templatetype", default, skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(default)]
    pub domain: String,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(rename = "isextractable", default, deserialize_with = "de::flag")]
    pub is_extractable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}
