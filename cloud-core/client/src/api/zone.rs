//! 区域 API

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{NetworkType, Zone};
use crate::params::{Params, ToParams};

/// 区域查询选项
#[derive(Debug, Clone, Default)]
pub struct ListZonesOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    /// 仅返回当前账户可用的区域
    pub available: Option<bool>,
    pub domain_id: Option<String>,
    pub network_type: Option<NetworkType>,
    pub keyword: Option<String>,
}

impl ListZonesOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    pub fn with_domain_id(mut self, domain_id: &str) -> Self {
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_network_type(mut self, network_type: NetworkType) -> Self {
        self.network_type = Some(network_type);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

impl ToParams for ListZonesOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("available", self.available)
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("networktype", self.network_type)
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 区域 API
pub struct ZoneApi<'a> {
    client: &'a CloudClient,
}

impl<'a> ZoneApi<'a> {
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出区域
    pub async fn list_zones(&self, options: ListZonesOptions) -> Result<Vec<Zone>> {
        info!("获取区域列表");
        self.client
            .list("listZones", &options.to_params(), "zone")
            .await
    }

    /// 按 ID 获取区域
    pub async fn get_zone(&self, id: &str) -> Result<Option<Zone>> {
        info!("获取区域详情: {}", id);
        let params = ListZonesOptions::default().with_id(id).to_params();
        let zones = self.client.list::<Zone>("listZones", &params, "zone").await?;
        Ok(zones.into_iter().next())
    }
}
