//! 网络

use serde::{Deserialize, Serialize};

use super::de;
use super::tag::ResourceTag;

label_enum! {
    /// 网络状态
    pub enum NetworkState {
        Allocated => "Allocated",
        Setup => "Setup",
        Implementing => "Implementing",
        Implemented => "Implemented",
        Shutdown => "Shutdown",
        Destroy => "Destroy",
    }
}

label_enum! {
    /// 来宾网络类型
    pub enum GuestIpType {
        Isolated => "Isolated",
        Shared => "Shared",
        /// 旧版本中的虚拟网络
        Virtual => "Virtual",
        /// 旧版本中的直连网络
        Direct => "Direct",
    }
}

label_enum! {
    /// 流量类型
    pub enum TrafficType {
        Guest => "Guest",
        Public => "Public",
        Management => "Management",
        Storage => "Storage",
        Control => "Control",
    }
}

/// 网络信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "displaytext", default)]
    pub display_text: String,

    #[serde(rename = "broadcastdomaintype", default, skip_serializing_if = "Option::is_none")]
    pub broadcast_domain_type: Option<String>,

    #[serde(rename = "traffictype")]
    pub traffic_type: TrafficType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,

    #[serde(rename = "zoneid", default, deserialize_with = "de::id")]
    pub zone_id: String,

    #[serde(rename = "zonename", default, skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    #[serde(rename = "networkofferingid", default, deserialize_with = "de::id")]
    pub network_offering_id: String,

    #[serde(rename = "networkofferingname", default, skip_serializing_if = "Option::is_none")]
    pub network_offering_name: Option<String>,

    #[serde(rename = "networkofferingdisplaytext", default, skip_serializing_if = "Option::is_none")]
    pub network_offering_display_text: Option<String>,

    #[serde(rename = "networkofferingavailability", default, skip_serializing_if = "Option::is_none")]
    pub network_offering_availability: Option<String>,

    #[serde(rename = "issystem", default, deserialize_with = "de::flag")]
    pub is_system: bool,

    pub state: NetworkState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,

    #[serde(rename = "broadcasturi", default, skip_serializing_if = "Option::is_none")]
    pub broadcast_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns2: Option<String>,

    #[serde(rename = "type")]
    pub guest_ip_type: GuestIpType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<String>,

    #[serde(rename = "acltype", default, skip_serializing_if = "Option::is_none")]
    pub acl_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(rename = "domainid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub domain_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "isdefault", default, deserialize_with = "de::flag")]
    pub is_default: bool,

    #[serde(rename = "networkdomain", default, skip_serializing_if = "Option::is_none")]
    pub network_domain: Option<String>,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}
