//! 卷快照

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;
use super::tag::ResourceTag;
use super::volume::VolumeType;

label_enum! {
    /// 快照状态
    pub enum SnapshotState {
        BackedUp => "BackedUp",
        Creating => "Creating",
        BackingUp => "BackingUp",
        Allocated => "Allocated",
        Error => "Error",
    }
}

label_enum! {
    /// 快照类型
    pub enum SnapshotType {
        Manual => "MANUAL",
        Recurring => "RECURRING",
        Template => "TEMPLATE",
    }
}

/// 快照信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    #[serde(default)]
    pub account: String,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(default)]
    pub domain: String,

    #[serde(rename = "snapshottype")]
    pub snapshot_type: SnapshotType,

    #[serde(rename = "volumeid", default, deserialize_with = "de::id")]
    pub volume_id: String,

    #[serde(rename = "volumename", default)]
    pub volume_name: String,

    #[serde(rename = "volumetype", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<VolumeType>,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    #[serde(default)]
    pub name: String,

    /// 周期快照的间隔类型，如 HOURLY / DAILY
    #[serde(rename = "intervaltype", default, skip_serializing_if = "Option::is_none")]
    pub interval_type: Option<String>,

    pub state: SnapshotState,

    #[serde(rename = "zoneid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub zone_id: Option<String>,

    #[serde(default)]
    pub tags: Vec<ResourceTag>,
}
