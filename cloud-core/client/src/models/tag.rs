//! 资源标签

use serde::{Deserialize, Serialize};

use super::{de, Identified};

label_enum! {
    /// 可打标签的资源类型
    pub enum ResourceType {
        UserVm => "UserVm",
        Template => "Template",
        Iso => "ISO",
        Volume => "Volume",
        Snapshot => "Snapshot",
        Network => "Network",
        Nic => "Nic",
        LoadBalancer => "LoadBalancer",
        PortForwardingRule => "PortForwardingRule",
        FirewallRule => "FirewallRule",
        SecurityGroup => "SecurityGroup",
        PublicIpAddress => "PublicIpAddress",
        Project => "Project",
        Vpc => "Vpc",
        NetworkAcl => "NetworkACL",
        StaticRoute => "StaticRoute",
    }
}

/// 资源标签
///
/// 标签没有独立标识，由 (资源类型, 资源 ID, 键) 唯一确定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTag {
    pub key: String,

    #[serde(default)]
    pub value: String,

    #[serde(rename = "resourcetype")]
    pub resource_type: ResourceType,

    #[serde(rename = "resourceid", deserialize_with = "de::id")]
    pub resource_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    #[serde(rename = "domainid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub domain_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "projectid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl ResourceTag {
    /// 构造不含归属信息的标签
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        resource_type: ResourceType,
        resource_id: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            resource_type,
            resource_id: resource_id.into(),
            account: None,
            domain_id: None,
            domain: None,
            project_id: None,
            project: None,
            customer: None,
        }
    }
}

impl Identified for ResourceTag {
    fn identity(&self) -> String {
        format!("{}/{}/{}", self.resource_type, self.resource_id, self.key)
    }
}
