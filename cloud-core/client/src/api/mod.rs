//! 云平台 API 模块
//!
//! 每类资源对应一个借用客户端的 API 句柄：
//! - 账户与用户 (AccountApi)
//! - 虚拟机管理 (VirtualMachineApi)
//! - 存储卷管理 (VolumeApi)
//! - 网络管理 (NetworkApi)
//! - 模板查询 (TemplateApi)
//! - 计算/磁盘方案查询 (OfferingApi)
//! - 快照管理 (SnapshotApi)
//! - 资源标签 (TagApi)
//! - 区域查询 (ZoneApi)
//! - 异步任务 (AsyncJobApi)

pub mod account;
pub mod async_job;
pub mod network;
pub mod offering;
pub mod snapshot;
pub mod tag;
pub mod template;
pub mod virtual_machine;
pub mod volume;
pub mod zone;

pub use account::{AccountApi, ListAccountsOptions, ListUsersOptions};
pub use async_job::{job_complete, AsyncJobApi, ListAsyncJobsOptions};
pub use network::{CreateNetworkOptions, ListNetworksOptions, NetworkApi};
pub use offering::{ListDiskOfferingsOptions, ListServiceOfferingsOptions, OfferingApi};
pub use snapshot::{ListSnapshotsOptions, SnapshotApi};
pub use tag::{CreateTagsOptions, DeleteTagsOptions, ListTagsOptions, TagApi};
pub use template::{ListTemplatesOptions, TemplateApi};
pub use virtual_machine::{DeployVirtualMachineOptions, ListVirtualMachinesOptions, VirtualMachineApi};
pub use volume::{ListVolumesOptions, ResizeVolumeOptions, VolumeApi};
pub use zone::{ListZonesOptions, ZoneApi};
