//! 虚拟机与网卡

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;
use super::network::{GuestIpType, TrafficType};
use super::tag::ResourceTag;

label_enum! {
    /// 虚拟机状态
    pub enum VirtualMachineState {
        Starting => "Starting",
        Running => "Running",
        Stopping => "Stopping",
        Stopped => "Stopped",
        Destroyed => "Destroyed",
        Expunging => "Expunging",
        Migrating => "Migrating",
        Error => "Error",
        Unknown => "Unknown",
        Shutdowned => "Shutdowned",
    }
}

impl VirtualMachineState {
    /// 是否为过渡状态
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            Self::Starting | Self::Stopping | Self::Migrating | Self::Expunging
        )
    }
}

/// 虚拟机信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "displayname", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub account: String,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(default)]
    pub domain: String,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    pub state: VirtualMachineState,

    #[serde(rename = "haenable", default, deserialize_with = "de::flag")]
    pub ha_enabled: bool,

    #[serde(rename = "groupid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(rename = "zoneid", default, deserialize_with = "de::id")]
    pub zone_id: String,

    #[serde(rename = "zonename", default)]
    pub zone_name: String,

    #[serde(rename = "hostid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub host_id: Option<String>,

    #[serde(rename = "hostname", default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    #[serde(rename = "templateid", default, deserialize_with = "de::id")]
    pub template_id: String,

    #[serde(rename = "templatename", default)]
    pub template_name: String,

    #[serde(rename = "templatedisplaytext", default, skip_serializing_if = "Option::is_none")]
    pub template_display_text: Option<String>,

    #[serde(rename = "passwordenabled", default, deserialize_with = "de::flag")]
    pub password_enabled: bool,

    /// 仅在部署或重置密码的任务结果中返回
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "serviceofferingid", default, deserialize_with = "de::id")]
    pub service_offering_id: String,

    #[serde(rename = "serviceofferingname", default)]
    pub service_offering_name: String,

    #[serde(rename = "cpunumber", default, deserialize_with = "de::count")]
    pub cpu_number: u64,

    #[serde(rename = "cpuspeed", default, deserialize_with = "de::count")]
    pub cpu_speed: u64,

    /// 内存 (MB)
    #[serde(default, deserialize_with = "de::count")]
    pub memory: u64,

    /// CPU 使用率，如 `"40%"`
    #[serde(rename = "cpuused", default, skip_serializing_if = "Option::is_none")]
    pub cpu_used: Option<String>,

    #[serde(rename = "networkkbsread", default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub network_kbs_read: Option<u64>,

    #[serde(rename = "networkkbswrite", default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub network_kbs_write: Option<u64>,

    #[serde(rename = "guestosid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub guest_os_id: Option<String>,

    #[serde(rename = "rootdeviceid", default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub root_device_id: Option<u64>,

    #[serde(rename = "rootdevicetype", default, skip_serializing_if = "Option::is_none")]
    pub root_device_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(rename = "publicip", default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,

    #[serde(rename = "nic", default)]
    pub nics: Vec<Nic>,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}

impl VirtualMachine {
    /// 默认网卡
    pub fn default_nic(&self) -> Option<&Nic> {
        self.nics.iter().find(|nic| nic.is_default)
    }
}

/// 虚拟机网卡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nic {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(rename = "networkid", default, deserialize_with = "de::id")]
    pub network_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(rename = "ipaddress", default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    #[serde(rename = "isolationuri", default, skip_serializing_if = "Option::is_none")]
    pub isolation_uri: Option<String>,

    #[serde(rename = "broadcasturi", default, skip_serializing_if = "Option::is_none")]
    pub broadcast_uri: Option<String>,

    #[serde(rename = "traffictype")]
    pub traffic_type: TrafficType,

    #[serde(rename = "type")]
    pub guest_ip_type: GuestIpType,

    #[serde(rename = "isdefault", default, deserialize_with = "de::flag")]
    pub is_default: bool,

    #[serde(rename = "macaddress", default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}
