//! 快照管理 API
//!
//! 提供卷快照管理功能，包括：
//! - 查询快照列表/详情
//! - 为卷创建快照（异步，结果键为 `snapshot`）
//! - 删除快照（异步）

use std::collections::BTreeMap;

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{AsyncCreateResponse, Snapshot, SnapshotType};
use crate::params::{Params, ToParams};

/// 异步任务结果中快照对象的键
pub const SNAPSHOT_RESULT_KEY: &str = "snapshot";

/// 快照查询选项
#[derive(Debug, Clone, Default)]
pub struct ListSnapshotsOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub volume_id: Option<String>,
    pub snapshot_type: Option<SnapshotType>,
    /// `HOURLY` / `DAILY` / `WEEKLY` / `MONTHLY`
    pub interval_type: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl ListSnapshotsOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_volume_id(mut self, volume_id: &str) -> Self {
        self.volume_id = Some(volume_id.to_string());
        self
    }

    pub fn with_snapshot_type(mut self, snapshot_type: SnapshotType) -> Self {
        self.snapshot_type = Some(snapshot_type);
        self
    }

    pub fn with_interval_type(mut self, interval_type: &str) -> Self {
        self.interval_type = Some(interval_type.to_string());
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

impl ToParams for ListSnapshotsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("volumeid", self.volume_id.as_deref())
            .set_opt("snapshottype", self.snapshot_type)
            .set_opt("intervaltype", self.interval_type.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref())
            .set_map("tags", "key", "value", &self.tags);
        params
    }
}

/// 快照管理 API
pub struct SnapshotApi<'a> {
    client: &'a CloudClient,
}

impl<'a> SnapshotApi<'a> {
    /// 创建新的快照 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出快照
    pub async fn list_snapshots(&self, options: ListSnapshotsOptions) -> Result<Vec<Snapshot>> {
        info!("获取快照列表");
        self.client
            .list("listSnapshots", &options.to_params(), SNAPSHOT_RESULT_KEY)
            .await
    }

    /// 按 ID 获取快照
    pub async fn get_snapshot(&self, id: &str) -> Result<Option<Snapshot>> {
        info!("获取快照详情: {}", id);
        let params = ListSnapshotsOptions::default().with_id(id).to_params();
        let snapshots = self
            .client
            .list::<Snapshot>("listSnapshots", &params, SNAPSHOT_RESULT_KEY)
            .await?;
        Ok(snapshots.into_iter().next())
    }

    /// 为卷创建快照
    pub async fn create_snapshot(&self, volume_id: &str) -> Result<AsyncCreateResponse> {
        info!("创建卷快照: {}", volume_id);
        let mut params = Params::new();
        params.set("volumeid", volume_id);
        self.client.request_async("createSnapshot", &params).await
    }

    /// 删除快照
    pub async fn delete_snapshot(&self, id: &str) -> Result<AsyncCreateResponse> {
        info!("删除快照: {}", id);
        let mut params = Params::new();
        params.set("id", id);
        self.client.request_async("deleteSnapshot", &params).await
    }
}
