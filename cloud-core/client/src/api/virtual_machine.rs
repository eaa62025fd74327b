//! 虚拟机管理 API
//!
//! 提供虚拟机生命周期管理功能，包括：
//! - 查询虚拟机列表/详情
//! - 部署虚拟机
//! - 启动/停止/重启/销毁虚拟机
//! - 修改计算方案
//!
//! 除查询与修改计算方案外均为异步命令，返回任务 ID，
//! 结果通过 [`AsyncJobApi`](crate::api::AsyncJobApi) 轮询获取，结果键为 `virtualmachine`。

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{AsyncCreateResponse, VirtualMachine, VirtualMachineState};
use crate::params::{Params, ToParams};

/// 异步任务结果中虚拟机对象的键
pub const VIRTUAL_MACHINE_RESULT_KEY: &str = "virtualmachine";

/// 虚拟机查询选项
#[derive(Debug, Clone, Default)]
pub struct ListVirtualMachinesOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<VirtualMachineState>,
    pub zone_id: Option<String>,
    pub host_id: Option<String>,
    pub network_id: Option<String>,
    pub group_id: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl ListVirtualMachinesOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_state(mut self, state: VirtualMachineState) -> Self {
        self.state = Some(state);
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

    pub fn with_network_id(mut self, network_id: &str) -> Self {
        self.network_id = Some(network_id.to_string());
        self
    }

    pub fn with_group_id(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
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

impl ToParams for ListVirtualMachinesOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("state", self.state)
            .set_opt("zoneid", self.zone_id.as_deref())
            .set_opt("hostid", self.host_id.as_deref())
            .set_opt("networkid", self.network_id.as_deref())
            .set_opt("groupid", self.group_id.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref())
            .set_map("tags", "key", "value", &self.tags);
        params
    }
}

/// 部署虚拟机选项
///
/// 区域、计算方案与模板为必填参数，由
/// [`VirtualMachineApi::deploy_virtual_machine`] 直接传入。
#[derive(Debug, Clone, Default)]
pub struct DeployVirtualMachineOptions {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub group: Option<String>,
    pub network_ids: Vec<String>,
    pub security_group_ids: Vec<String>,
    /// 数据盘方案
    pub disk_offering_id: Option<String>,
    /// 自定义磁盘大小（GB）
    pub size: Option<u64>,
    pub hypervisor: Option<String>,
    pub key_pair: Option<String>,
    /// Base64 编码后的用户数据
    pub user_data: Option<String>,
    pub ip_address: Option<String>,
    pub keyboard: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    /// 部署后是否立即启动，平台默认启动
    pub start_vm: Option<bool>,
    pub details: BTreeMap<String, String>,
}

impl DeployVirtualMachineOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_network_ids(mut self, network_ids: Vec<String>) -> Self {
        self.network_ids = network_ids;
        self
    }

    pub fn with_security_group_ids(mut self, ids: Vec<String>) -> Self {
        self.security_group_ids = ids;
        self
    }

    pub fn with_disk_offering(mut self, disk_offering_id: &str, size: Option<u64>) -> Self {
        self.disk_offering_id = Some(disk_offering_id.to_string());
        self.size = size;
        self
    }

    pub fn with_hypervisor(mut self, hypervisor: &str) -> Self {
        self.hypervisor = Some(hypervisor.to_string());
        self
    }

    pub fn with_key_pair(mut self, key_pair: &str) -> Self {
        self.key_pair = Some(key_pair.to_string());
        self
    }

    /// 设置用户数据（原文，发送前做 Base64 编码）
    pub fn with_user_data(mut self, data: &[u8]) -> Self {
        self.user_data = Some(BASE64.encode(data));
        self
    }

    pub fn with_ip_address(mut self, ip_address: &str) -> Self {
        self.ip_address = Some(ip_address.to_string());
        self
    }

    pub fn with_keyboard(mut self, keyboard: &str) -> Self {
        self.keyboard = Some(keyboard.to_string());
        self
    }

    pub fn with_account(mut self, account: &str, domain_id: &str) -> Self {
        self.account = Some(account.to_string());
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_start_vm(mut self, start: bool) -> Self {
        self.start_vm = Some(start);
        self
    }

    pub fn with_detail(mut self, key: &str, value: &str) -> Self {
        self.details.insert(key.to_string(), value.to_string());
        self
    }
}

impl ToParams for DeployVirtualMachineOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("name", self.name.as_deref())
            .set_opt("displayname", self.display_name.as_deref())
            .set_opt("group", self.group.as_deref())
            .set_list("networkids", &self.network_ids)
            .set_list("securitygroupids", &self.security_group_ids)
            .set_opt("diskofferingid", self.disk_offering_id.as_deref())
            .set_opt("size", self.size)
            .set_opt("hypervisor", self.hypervisor.as_deref())
            .set_opt("keypair", self.key_pair.as_deref())
            .set_opt("userdata", self.user_data.as_deref())
            .set_opt("ipaddress", self.ip_address.as_deref())
            .set_opt("keyboard", self.keyboard.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("startvm", self.start_vm)
            .set_map("details", "key", "value", &self.details);
        params
    }
}

/// 虚拟机管理 API
pub struct VirtualMachineApi<'a> {
    client: &'a CloudClient,
}

impl<'a> VirtualMachineApi<'a> {
    /// 创建新的虚拟机 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出虚拟机
    pub async fn list_virtual_machines(
        &self,
        options: ListVirtualMachinesOptions,
    ) -> Result<Vec<VirtualMachine>> {
        info!("获取虚拟机列表");
        self.client
            .list("listVirtualMachines", &options.to_params(), VIRTUAL_MACHINE_RESULT_KEY)
            .await
    }

    /// 按 ID 获取虚拟机
    pub async fn get_virtual_machine(&self, id: &str) -> Result<Option<VirtualMachine>> {
        info!("获取虚拟机详情: {}", id);
        let params = ListVirtualMachinesOptions::default().with_id(id).to_params();
        let vms = self
            .client
            .list::<VirtualMachine>("listVirtualMachines", &params, VIRTUAL_MACHINE_RESULT_KEY)
            .await?;
        Ok(vms.into_iter().next())
    }

    /// 部署虚拟机
    ///
    /// # Arguments
    /// * `zone_id` - 区域 ID
    /// * `service_offering_id` - 计算方案 ID
    /// * `template_id` - 模板 ID
    /// * `options` - 其余可选参数
    pub async fn deploy_virtual_machine(
        &self,
        zone_id: &str,
        service_offering_id: &str,
        template_id: &str,
        options: DeployVirtualMachineOptions,
    ) -> Result<AsyncCreateResponse> {
        info!(
            "部署虚拟机: 区域 {}, 计算方案 {}, 模板 {}",
            zone_id, service_offering_id, template_id
        );

        let mut params = options.to_params();
        params
            .set("zoneid", zone_id)
            .set("serviceofferingid", service_offering_id)
            .set("templateid", template_id);

        self.client.request_async("deployVirtualMachine", &params).await
    }

    /// 启动虚拟机
    pub async fn start_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("启动虚拟机: {}", id);
        self.client
            .request_async("startVirtualMachine", &id_params(id))
            .await
    }

    /// 停止虚拟机
    pub async fn stop_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("停止虚拟机: {}", id);
        self.client
            .request_async("stopVirtualMachine", &id_params(id))
            .await
    }

    /// 停止虚拟机，`forced` 为真时强制关机
    pub async fn stop_virtual_machine_forced(&self, id: &str, forced: bool) -> Result<AsyncCreateResponse> {
        info!("停止虚拟机: {} (强制: {})", id, forced);
        let mut params = id_params(id);
        params.set("forced", forced);
        self.client.request_async("stopVirtualMachine", &params).await
    }

    /// 重启虚拟机
    pub async fn reboot_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("重启虚拟机: {}", id);
        self.client
            .request_async("rebootVirtualMachine", &id_params(id))
            .await
    }

    /// 销毁虚拟机
    pub async fn destroy_virtual_machine(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("销毁虚拟机: {}", id);
        self.client
            .request_async("destroyVirtualMachine", &id_params(id))
            .await
    }

    /// 修改虚拟机计算方案（虚拟机需处于停止状态）
    pub async fn change_service_for_virtual_machine(
        &self,
        id: &str,
        service_offering_id: &str,
    ) -> Result<VirtualMachine> {
        info!("修改虚拟机计算方案: {} -> {}", id, service_offering_id);
        let mut params = id_params(id);
        params.set("serviceofferingid", service_offering_id);
        self.client
            .request_entity("changeServiceForVirtualMachine", &params, VIRTUAL_MACHINE_RESULT_KEY)
            .await
    }
}

fn id_params(id: &str) -> Params {
    let mut params = Params::new();
    params.set("id", id);
    params
}
