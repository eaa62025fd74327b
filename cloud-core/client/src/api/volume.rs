//! 存储卷管理 API
//!
//! 提供数据卷管理功能，包括：
//! - 查询卷列表/详情
//! - 从磁盘方案或快照创建卷
//! - 挂载/卸载卷
//! - 调整卷大小
//! - 删除卷
//!
//! 除查询外均为异步命令，结果键为 `volume`。

use std::collections::BTreeMap;

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{AsyncCreateResponse, Volume, VolumeType};
use crate::params::{Params, ToParams};

/// 异步任务结果中卷对象的键
pub const VOLUME_RESULT_KEY: &str = "volume";

/// 卷查询选项
#[derive(Debug, Clone, Default)]
pub struct ListVolumesOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub volume_type: Option<VolumeType>,
    pub virtual_machine_id: Option<String>,
    pub zone_id: Option<String>,
    pub host_id: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl ListVolumesOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_type(mut self, volume_type: VolumeType) -> Self {
        self.volume_type = Some(volume_type);
        self
    }

    pub fn with_virtual_machine_id(mut self, vm_id: &str) -> Self {
        self.virtual_machine_id = Some(vm_id.to_string());
        self
    }

    pub fn with_zone_id(mut self, zone_id: &str) -> Self {
        self.zone_id = Some(zone_id.to_string());
        self
    }

    pub fn with_host_id(mut self, host_id: &str) -> Self {
        self.host_id = Some(host_id.to_string());
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

impl ToParams for ListVolumesOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("type", self.volume_type)
            .set_opt("virtualmachineid", self.virtual_machine_id.as_deref())
            .set_opt("zoneid", self.zone_id.as_deref())
            .set_opt("hostid", self.host_id.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref())
            .set_map("tags", "key", "value", &self.tags);
        params
    }
}

/// 调整卷大小选项
///
/// 指定新的磁盘方案，或在可自定义大小的方案下直接指定大小（GB）。
#[derive(Debug, Clone, Default)]
pub struct ResizeVolumeOptions {
    pub disk_offering_id: Option<String>,
    /// 新大小（GB）
    pub size: Option<u64>,
    /// 允许缩小
    pub shrink_ok: Option<bool>,
}

impl ResizeVolumeOptions {
    pub fn with_disk_offering_id(mut self, disk_offering_id: &str) -> Self {
        self.disk_offering_id = Some(disk_offering_id.to_string());
        self
    }

    pub fn with_size(mut self, size_gb: u64) -> Self {
        self.size = Some(size_gb);
        self
    }

    pub fn with_shrink_ok(mut self, shrink_ok: bool) -> Self {
        self.shrink_ok = Some(shrink_ok);
        self
    }
}

impl ToParams for ResizeVolumeOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("diskofferingid", self.disk_offering_id.as_deref())
            .set_opt("size", self.size)
            .set_opt("shrinkok", self.shrink_ok);
        params
    }
}

/// 存储卷管理 API
pub struct VolumeApi<'a> {
    client: &'a CloudClient,
}

impl<'a> VolumeApi<'a> {
    /// 创建新的存储卷 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出卷
    pub async fn list_volumes(&self, options: ListVolumesOptions) -> Result<Vec<Volume>> {
        info!("获取卷列表");
        self.client
            .list("listVolumes", &options.to_params(), VOLUME_RESULT_KEY)
            .await
    }

    /// 按 ID 获取卷
    pub async fn get_volume(&self, id: &str) -> Result<Option<Volume>> {
        info!("获取卷详情: {}", id);
        let params = ListVolumesOptions::default().with_id(id).to_params();
        let volumes = self
            .client
            .list::<Volume>("listVolumes", &params, VOLUME_RESULT_KEY)
            .await?;
        Ok(volumes.into_iter().next())
    }

    /// 从磁盘方案创建数据卷
    pub async fn create_volume_from_disk_offering(
        &self,
        name: &str,
        disk_offering_id: &str,
        zone_id: &str,
    ) -> Result<AsyncCreateResponse> {
        info!("创建数据卷: {} (磁盘方案 {}, 区域 {})", name, disk_offering_id, zone_id);
        let mut params = Params::new();
        params
            .set("name", name)
            .set("diskofferingid", disk_offering_id)
            .set("zoneid", zone_id);
        self.client.request_async("createVolume", &params).await
    }

    /// 从快照创建数据卷
    pub async fn create_volume_from_snapshot(
        &self,
        name: &str,
        snapshot_id: &str,
        zone_id: &str,
    ) -> Result<AsyncCreateResponse> {
        info!("从快照创建数据卷: {} (快照 {}, 区域 {})", name, snapshot_id, zone_id);
        let mut params = Params::new();
        params
            .set("name", name)
            .set("snapshotid", snapshot_id)
            .set("zoneid", zone_id);
        self.client.request_async("createVolume", &params).await
    }

    /// 挂载卷到虚拟机
    pub async fn attach_volume(&self, volume_id: &str, virtual_machine_id: &str) -> Result<AsyncCreateResponse> {
        info!("挂载卷: {} -> {}", volume_id, virtual_machine_id);
        let mut params = Params::new();
        params
            .set("id", volume_id)
            .set("virtualmachineid", virtual_machine_id);
        self.client.request_async("attachVolume", &params).await
    }

    /// 从虚拟机卸载卷
    pub async fn detach_volume(&self, volume_id: &str) -> Result<AsyncCreateResponse> {
        info!("卸载卷: {}", volume_id);
        let mut params = Params::new();
        params.set("id", volume_id);
        self.client.request_async("detachVolume", &params).await
    }

    /// 调整卷大小
    pub async fn resize_volume(&self, volume_id: &str, options: ResizeVolumeOptions) -> Result<AsyncCreateResponse> {
        info!("调整卷大小: {} {:?}", volume_id, options);
        let mut params = options.to_params();
        params.set("id", volume_id);
        self.client.request_async("resizeVolume", &params).await
    }

    /// 删除卷（卷需处于卸载状态）
    pub async fn delete_volume(&self, volume_id: &str) -> Result<AsyncCreateResponse> {
        info!("删除卷: {}", volume_id);
        let mut params = Params::new();
        params.set("id", volume_id);
        self.client.request_async("deleteVolume", &params).await
    }
}
