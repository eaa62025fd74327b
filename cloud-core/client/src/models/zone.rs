//! 区域

use serde::{Deserialize, Serialize};

use super::de;
use super::tag::ResourceTag;

label_enum! {
    /// 区域网络模式
    pub enum NetworkType {
        Basic => "Basic",
        Advanced => "Advanced",
    }
}

/// 区域信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "networktype")]
    pub network_type: NetworkType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns2: Option<String>,

    #[serde(rename = "internaldns1", default, skip_serializing_if = "Option::is_none")]
    pub internal_dns1: Option<String>,

    #[serde(rename = "guestcidraddress", default, skip_serializing_if = "Option::is_none")]
    pub guest_cidr_address: Option<String>,

    #[serde(rename = "allocationstate", default, skip_serializing_if = "Option::is_none")]
    pub allocation_state: Option<String>,

    #[serde(rename = "securitygroupsenabled", default, deserialize_with = "de::flag")]
    pub security_groups_enabled: bool,

    #[serde(rename = "localstorageenabled", default, deserialize_with = "de::flag")]
    pub local_storage_enabled: bool,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}
