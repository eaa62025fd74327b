//! 计算方案与磁盘方案

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;

label_enum! {
    /// 存储类型
    pub enum StorageType {
        Local => "local",
        Shared => "shared",
    }
}

/// 计算方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "displaytext", default)]
    pub display_text: String,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    #[serde(rename = "cpunumber", default, deserialize_with = "de::count")]
    pub cpu_number: u64,

    /// CPU 频率 (MHz)
    #[serde(rename = "cpuspeed", default, deserialize_with = "de::count")]
    pub cpu_speed: u64,

    /// 内存 (MB)
    #[serde(default, deserialize_with = "de::count")]
    pub memory: u64,

    #[serde(rename = "offerha", default, deserialize_with = "de::flag")]
    pub offer_ha: bool,

    #[serde(rename = "limitcpuuse", default, deserialize_with = "de::flag")]
    pub limit_cpu_use: bool,

    #[serde(rename = "issystem", default, deserialize_with = "de::flag")]
    pub is_system: bool,

    #[serde(rename = "defaultuse", default, deserialize_with = "de::flag")]
    pub default_use: bool,

    #[serde(rename = "storagetype", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,

    #[serde(rename = "systemvmtype", default, skip_serializing_if = "Option::is_none")]
    pub system_vm_type: Option<String>,

    /// 网络限速 (Mbps)
    #[serde(rename = "networkrate", default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub network_rate: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "domainid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub domain_id: Option<String>,

    /// 存储标签（逗号分隔）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// 磁盘方案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskOffering {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "displaytext", default)]
    pub display_text: String,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    /// 磁盘大小 (GB)，自定义大小的方案为 0
    #[serde(rename = "disksize", default, deserialize_with = "de::count")]
    pub disk_size: u64,

    #[serde(rename = "iscustomized", default, deserialize_with = "de::flag")]
    pub is_customized: bool,

    #[serde(rename = "storagetype", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "domainid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub domain_id: Option<String>,

    /// 存储标签（逗号分隔）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}
