//! 计算方案与磁盘方案 API

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{DiskOffering, ServiceOffering};
use crate::params::{Params, ToParams};

/// 计算方案查询选项
#[derive(Debug, Clone, Default)]
pub struct ListServiceOfferingsOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domain_id: Option<String>,
    pub is_system: Option<bool>,
    pub system_vm_type: Option<String>,
    /// 仅返回可供该虚拟机更换的方案
    pub virtual_machine_id: Option<String>,
    pub keyword: Option<String>,
}

impl ListServiceOfferingsOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_domain_id(mut self, domain_id: &str) -> Self {
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_system(mut self, is_system: bool) -> Self {
        self.is_system = Some(is_system);
        self
    }

    pub fn with_system_vm_type(mut self, system_vm_type: &str) -> Self {
        self.system_vm_type = Some(system_vm_type.to_string());
        self
    }

    pub fn with_virtual_machine_id(mut self, vm_id: &str) -> Self {
        self.virtual_machine_id = Some(vm_id.to_string());
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

impl ToParams for ListServiceOfferingsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("issystem", self.is_system)
            .set_opt("systemvmtype", self.system_vm_type.as_deref())
            .set_opt("virtualmachineid", self.virtual_machine_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 磁盘方案查询选项
#[derive(Debug, Clone, Default)]
pub struct ListDiskOfferingsOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
}

impl ListDiskOfferingsOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_domain_id(mut self, domain_id: &str) -> Self {
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

impl ToParams for ListDiskOfferingsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 方案查询 API
pub struct OfferingApi<'a> {
    client: &'a CloudClient,
}

impl<'a> OfferingApi<'a> {
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出计算方案
    pub async fn list_service_offerings(
        &self,
        options: ListServiceOfferingsOptions,
    ) -> Result<Vec<ServiceOffering>> {
        info!("获取计算方案列表");
        self.client
            .list("listServiceOfferings", &options.to_params(), "serviceoffering")
            .await
    }

    /// 按 ID 获取计算方案
    pub async fn get_service_offering(&self, id: &str) -> Result<Option<ServiceOffering>> {
        info!("获取计算方案详情: {}", id);
        let params = ListServiceOfferingsOptions::default().with_id(id).to_params();
        let offerings = self
            .client
            .list::<ServiceOffering>("listServiceOfferings", &params, "serviceoffering")
            .await?;
        Ok(offerings.into_iter().next())
    }

    /// 列出磁盘方案
    pub async fn list_disk_offerings(&self, options: ListDiskOfferingsOptions) -> Result<Vec<DiskOffering>> {
        info!("获取磁盘方案列表");
        self.client
            .list("listDiskOfferings", &options.to_params(), "diskoffering")
            .await
    }

    /// 按 ID 获取磁盘方案
    pub async fn get_disk_offering(&self, id: &str) -> Result<Option<DiskOffering>> {
        info!("获取磁盘方案详情: {}", id);
        let params = ListDiskOfferingsOptions::default().with_id(id).to_params();
        let offerings = self
            .client
            .list::<DiskOffering>("listDiskOfferings", &params, "diskoffering")
            .await?;
        Ok(offerings.into_iter().next())
    }
}
