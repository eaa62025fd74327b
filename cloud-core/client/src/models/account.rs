//! 账户与用户

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::de;

code_enum! {
    /// 账户类型
    pub enum AccountType {
        User => 0,
        Admin => 1,
        DomainAdmin => 2,
    }
}

label_enum! {
    /// 账户状态
    pub enum AccountState {
        Enabled => "enabled",
        Disabled => "disabled",
        Locked => "locked",
    }
}

label_enum! {
    /// 用户状态
    pub enum UserState {
        Enabled => "enabled",
        Disabled => "disabled",
        Locked => "locked",
    }
}

/// 账户信息
///
/// 配额字段为 `None` 表示无限制；用量字段总是存在且非负。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    pub name: String,

    #[serde(rename = "accounttype")]
    pub account_type: AccountType,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(default)]
    pub domain: String,

    #[serde(rename = "networkdomain", default, skip_serializing_if = "Option::is_none")]
    pub network_domain: Option<String>,

    #[serde(rename = "receivedbytes", default, deserialize_with = "de::count")]
    pub received_bytes: u64,

    #[serde(rename = "sentbytes", default, deserialize_with = "de::count")]
    pub sent_bytes: u64,

    #[serde(rename = "vmlimit", default, with = "de::limit")]
    pub vm_limit: Option<u64>,

    #[serde(rename = "vmtotal", default, deserialize_with = "de::count")]
    pub vm_total: u64,

    #[serde(rename = "vmavailable", default, with = "de::limit")]
    pub vm_available: Option<u64>,

    #[serde(rename = "iplimit", default, with = "de::limit")]
    pub ip_limit: Option<u64>,

    #[serde(rename = "iptotal", default, deserialize_with = "de::count")]
    pub ip_total: u64,

    #[serde(rename = "ipavailable", default, with = "de::limit")]
    pub ip_available: Option<u64>,

    #[serde(rename = "volumelimit", default, with = "de::limit")]
    pub volume_limit: Option<u64>,

    #[serde(rename = "volumetotal", default, deserialize_with = "de::count")]
    pub volume_total: u64,

    #[serde(rename = "volumeavailable", default, with = "de::limit")]
    pub volume_available: Option<u64>,

    #[serde(rename = "snapshotlimit", default, with = "de::limit")]
    pub snapshot_limit: Option<u64>,

    #[serde(rename = "snapshottotal", default, deserialize_with = "de::count")]
    pub snapshot_total: u64,

    #[serde(rename = "snapshotavailable", default, with = "de::limit")]
    pub snapshot_available: Option<u64>,

    #[serde(rename = "templatelimit", default, with = "de::limit")]
    pub template_limit: Option<u64>,

    #[serde(rename = "templatetotal", default, deserialize_with = "de::count")]
    pub template_total: u64,

    #[serde(rename = "templateavailable", default, with = "de::limit")]
    pub template_available: Option<u64>,

    #[serde(rename = "vmstopped", default, deserialize_with = "de::count")]
    pub vm_stopped: u64,

    #[serde(rename = "vmrunning", default, deserialize_with = "de::count")]
    pub vm_running: u64,

    pub state: AccountState,

    /// 账户下的用户
    #[serde(rename = "user", default)]
    pub users: Vec<User>,
}

/// 用户信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    pub username: String,

    #[serde(rename = "firstname", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(rename = "lastname", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,

    pub state: UserState,

    #[serde(default)]
    pub account: String,

    #[serde(rename = "accounttype")]
    pub account_type: AccountType,

    #[serde(rename = "domainid", default, deserialize_with = "de::id")]
    pub domain_id: String,

    #[serde(default)]
    pub domain: String,

    #[serde(rename = "apikey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(rename = "secretkey", default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Account {
    /// 虚拟机配额是否无限制
    pub fn is_vm_unlimited(&self) -> bool {
        self.vm_limit.is_none()
    }
}
