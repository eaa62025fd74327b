//! 存储卷

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;
use super::tag::ResourceTag;
use super::virtual_machine::VirtualMachineState;

label_enum! {
    /// 卷类型
    pub enum VolumeType {
        Root => "ROOT",
        DataDisk => "DATADISK",
    }
}

label_enum! {
    /// 卷状态
    pub enum VolumeState {
        Allocated => "Allocated",
        Creating => "Creating",
        Ready => "Ready",
        Destroy => "Destroy",
        Expunging => "Expunging",
        Migrating => "Migrating",
        Uploaded => "Uploaded",
        Resizing => "Resizing",
    }
}

/// 存储卷信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "zoneid", default, deserialize_with = "de::id")]
    pub zone_id: String,

    #[serde(rename = "zonename", default)]
    pub zone_name: String,

    #[serde(rename = "type")]
    pub volume_type: VolumeType,

    #[serde(rename = "deviceid", default, with = "de::opt_u64", skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u64>,

    #[serde(rename = "virtualmachineid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub virtual_machine_id: Option<String>,

    #[serde(rename = "vmname", default, skip_serializing_if = "Option::is_none")]
    pub vm_name: Option<String>,

    #[serde(rename = "vmdisplayname", default, skip_serializing_if = "Option::is_none")]
    pub vm_display_name: Option<String>,

    #[serde(rename = "vmstate", default, skip_serializing_if = "Option::is_none")]
    pub vm_state: Option<VirtualMachineState>,

    /// 卷大小（字节）
    #[serde(default, deserialize_with = "de::count")]
    pub size: u64,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    pub state: VolumeState,

    #[serde(default)]
    pub account: String,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(default)]
    pub domain: String,

    #[serde(rename = "storagetype", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<String>,

    #[serde(rename = "diskofferingid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub disk_offering_id: Option<String>,

    #[serde(rename = "diskofferingname", default, skip_serializing_if = "Option::is_none")]
    pub disk_offering_name: Option<String>,

    #[serde(rename = "serviceofferingid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub service_offering_id: Option<String>,

    #[serde(rename = "snapshotid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub snapshot_id: Option<String>,

    /// 挂载时间
    #[serde(default, with = "de::timestamp", skip_serializing_if = "Option::is_none")]
    pub attached: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "de::flag")]
    pub destroyed: bool,

    #[serde(rename = "isextractable", default, deserialize_with = "de::flag")]
    pub is_extractable: bool,

    /// 所在主存储名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}

impl Volume {
    /// 是否已挂载到虚拟机
    pub fn is_attached(&self) -> bool {
        self.virtual_machine_id.is_some()
    }

    /// 卷大小 (GB)
    pub fn size_gb(&self) -> u64 {
        self.size / (1024 * 1024 * 1024)
    }
}
