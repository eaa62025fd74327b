//! 云管理平台 API 客户端
//!
//! 提供与云管理平台 REST API 交互的客户端实现。所有请求均为带 HMAC-SHA1
//! 签名的 GET 请求，响应包裹在 `<command>response` 信封中。
//!
//! # 功能
//!
//! - **账户与用户** (`AccountApi`): 账户配额/用量、用户查询
//! - **虚拟机管理** (`VirtualMachineApi`): 部署、启动、停止、重启、销毁、修改计算方案
//! - **存储卷管理** (`VolumeApi`): 创建、挂载、卸载、调整大小、删除
//! - **网络管理** (`NetworkApi`): 网络查询、创建、删除
//! - **模板** (`TemplateApi`) / **方案** (`OfferingApi`) / **区域** (`ZoneApi`): 查询
//! - **快照管理** (`SnapshotApi`): 卷快照创建、删除
//! - **资源标签** (`TagApi`): 标签查询、创建、删除
//! - **异步任务** (`AsyncJobApi`): 按轮询策略等待任务完成并提取结果
//!
//! # 示例
//!
//! ```ignore
//! use cloud_client::{CloudClient, ClientConfig, DeployVirtualMachineOptions, VirtualMachine};
//!
//! let client = CloudClient::new(ClientConfig::load()?)?;
//!
//! // 部署虚拟机并等待完成
//! let job = client
//!     .virtual_machine()
//!     .deploy_virtual_machine("zone-id", "offering-id", "template-id",
//!         DeployVirtualMachineOptions::default().with_name("web-1"))
//!     .await?;
//! let vm: VirtualMachine = client
//!     .async_job()
//!     .wait_for_result(&job.job_id, "virtualmachine", client.poll_policy())
//!     .await?;
//!
//! // 挂载数据卷
//! let job = client.volume().attach_volume("volume-id", &vm.id).await?;
//! client.async_job().wait_for_success(&job.job_id, client.poll_policy()).await?;
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod poll;
pub mod signing;

pub use client::CloudClient;
pub use config::ClientConfig;
pub use error::{CloudError, Result};
pub use params::{Params, ToParams};
pub use poll::{PollConfig, PollPolicy};
pub use signing::RequestSigner;

// 导出 API 模块
pub use api::{
    account::AccountApi,
    async_job::{job_complete, AsyncJobApi},
    network::NetworkApi,
    offering::OfferingApi,
    snapshot::SnapshotApi,
    tag::TagApi,
    template::TemplateApi,
    virtual_machine::VirtualMachineApi,
    volume::VolumeApi,
    zone::ZoneApi,
};

// 导出请求选项
pub use api::{
    CreateNetworkOptions, CreateTagsOptions, DeleteTagsOptions, DeployVirtualMachineOptions,
    ListAccountsOptions, ListAsyncJobsOptions, ListDiskOfferingsOptions, ListNetworksOptions,
    ListServiceOfferingsOptions, ListSnapshotsOptions, ListTagsOptions, ListTemplatesOptions,
    ListUsersOptions, ListVirtualMachinesOptions, ListVolumesOptions, ListZonesOptions,
    ResizeVolumeOptions,
};

// 导出数据模型
pub use models::{
    // 账户
    Account, AccountState, AccountType, User, UserState,

    // 计算与存储
    Nic, VirtualMachine, VirtualMachineState,
    Volume, VolumeState, VolumeType,
    Snapshot, SnapshotState, SnapshotType,

    // 网络
    GuestIpType, Network, NetworkState, TrafficType,

    // 目录
    DiskOffering, ServiceOffering, StorageType,
    Template, TemplateFilter,
    NetworkType, Zone,

    // 标签
    ResourceTag, ResourceType,

    // 异步任务
    AsyncCreateResponse, AsyncJob, AsyncJobError, AsyncJobErrorCode, AsyncJobStatus,

    // 通用响应
    ApiErrorResponse, SuccessResponse,

    Identified,
};
