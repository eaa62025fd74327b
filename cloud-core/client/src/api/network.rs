//! 网络管理 API
//!
//! 提供来宾网络管理功能，包括：
//! - 查询网络列表/详情
//! - 创建网络（同步返回网络对象）
//! - 删除网络（异步）

use std::collections::BTreeMap;

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{AsyncCreateResponse, GuestIpType, Network, TrafficType};
use crate::params::{Params, ToParams};

/// 网络查询选项
#[derive(Debug, Clone, Default)]
pub struct ListNetworksOptions {
    pub id: Option<String>,
    pub zone_id: Option<String>,
    pub traffic_type: Option<TrafficType>,
    pub guest_ip_type: Option<GuestIpType>,
    pub is_default: Option<bool>,
    pub is_system: Option<bool>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl ListNetworksOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_zone_id(mut self, zone_id: &str) -> Self {
        self.zone_id = Some(zone_id.to_string());
        self
    }

    pub fn with_traffic_type(mut self, traffic_type: TrafficType) -> Self {
        self.traffic_type = Some(traffic_type);
        self
    }

    pub fn with_guest_ip_type(mut self, guest_ip_type: GuestIpType) -> Self {
        self.guest_ip_type = Some(guest_ip_type);
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = Some(is_default);
        self
    }

    pub fn with_system(mut self, is_system: bool) -> Self {
        self.is_system = Some(is_system);
        self
    }

    pub fn with_account(mut self, account: &str, domain_id: &str) -> Self {
        self.account = Some(account.to_string());
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }
}

impl ToParams for ListNetworksOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("zoneid", self.zone_id.as_deref())
            .set_opt("traffictype", self.traffic_type)
            .set_opt("type", self.guest_ip_type)
            .set_opt("isdefault", self.is_default)
            .set_opt("issystem", self.is_system)
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref())
            .set_map("tags", "key", "value", &self.tags);
        params
    }
}

/// 创建网络选项
#[derive(Debug, Clone, Default)]
pub struct CreateNetworkOptions {
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub start_ip: Option<String>,
    pub end_ip: Option<String>,
    pub vlan: Option<String>,
    pub network_domain: Option<String>,
    /// `Account` 或 `Domain`
    pub acl_type: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
}

impl CreateNetworkOptions {
    /// 设置网关与掩码
    pub fn with_gateway(mut self, gateway: &str, netmask: &str) -> Self {
        self.gateway = Some(gateway.to_string());
        self.netmask = Some(netmask.to_string());
        self
    }

    pub fn with_ip_range(mut self, start_ip: &str, end_ip: &str) -> Self {
        self.start_ip = Some(start_ip.to_string());
        self.end_ip = Some(end_ip.to_string());
        self
    }

    pub fn with_vlan(mut self, vlan: &str) -> Self {
        self.vlan = Some(vlan.to_string());
        self
    }

    pub fn with_network_domain(mut self, network_domain: &str) -> Self {
        self.network_domain = Some(network_domain.to_string());
        self
    }

    pub fn with_acl_type(mut self, acl_type: &str) -> Self {
        self.acl_type = Some(acl_type.to_string());
        self
    }

    pub fn with_account(mut self, account: &str, domain_id: &str) -> Self {
        self.account = Some(account.to_string());
        self.domain_id = Some(domain_id.to_string());
        self
    }
}

impl ToParams for CreateNetworkOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("gateway", self.gateway.as_deref())
            .set_opt("netmask", self.netmask.as_deref())
            .set_opt("startip", self.start_ip.as_deref())
            .set_opt("endip", self.end_ip.as_deref())
            .set_opt("vlan", self.vlan.as_deref())
            .set_opt("networkdomain", self.network_domain.as_deref())
            .set_opt("acltype", self.acl_type.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref());
        params
    }
}

/// 网络管理 API
pub struct NetworkApi<'a> {
    client: &'a CloudClient,
}

impl<'a> NetworkApi<'a> {
    /// 创建新的网络 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出网络
    pub async fn list_networks(&self, options: ListNetworksOptions) -> Result<Vec<Network>> {
        info!("获取网络列表");
        self.client
            .list("listNetworks", &options.to_params(), "network")
            .await
    }

    /// 按 ID 获取网络
    pub async fn get_network(&self, id: &str) -> Result<Option<Network>> {
        info!("获取网络详情: {}", id);
        let params = ListNetworksOptions::default().with_id(id).to_params();
        let networks = self
            .client
            .list::<Network>("listNetworks", &params, "network")
            .await?;
        Ok(networks.into_iter().next())
    }

    /// 创建网络
    ///
    /// # Arguments
    /// * `zone_id` - 区域 ID
    /// * `network_offering_id` - 网络方案 ID
    /// * `name` - 网络名称
    /// * `display_text` - 显示文本
    pub async fn create_network(
        &self,
        zone_id: &str,
        network_offering_id: &str,
        name: &str,
        display_text: &str,
        options: CreateNetworkOptions,
    ) -> Result<Network> {
        info!("创建网络: {} (区域 {}, 网络方案 {})", name, zone_id, network_offering_id);
        let mut params = options.to_params();
        params
            .set("zoneid", zone_id)
            .set("networkofferingid", network_offering_id)
            .set("name", name)
            .set("displaytext", display_text);
        self.client
            .request_entity("createNetwork", &params, "network")
            .await
    }

    /// 删除网络
    pub async fn delete_network(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("删除网络: {}", id);
        let mut params = Params::new();
        params.set("id", id);
        self.client.request_async("deleteNetwork", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_networks_params() {
        let params = ListNetworksOptions::default()
            .with_zone_id("zone-1")
            .with_guest_ip_type(GuestIpType::Isolated)
            .with_traffic_type(TrafficType::Guest)
            .to_params();

        assert_eq!(params.get("zoneid"), Some("zone-1"));
        assert_eq!(params.get("type"), Some("Isolated"));
        assert_eq!(params.get("traffictype"), Some("Guest"));
    }

    #[test]
    fn test_create_network_options() {
        let params = CreateNetworkOptions::default()
            .with_gateway("10.1.1.1", "255.255.255.0")
            .with_ip_range("10.1.1.10", "10.1.1.100")
            .to_params();

        assert_eq!(params.get("gateway"), Some("10.1.1.1"));
        assert_eq!(params.get("netmask"), Some("255.255.255.0"));
        assert_eq!(params.get("startip"), Some("10.1.1.10"));
        assert_eq!(params.get("endip"), Some("10.1.1.100"));
    }
}
