//! 资源标签 API
//!
//! 标签以 (资源类型, 资源 ID, 键) 唯一确定，创建与删除均为异步命令，
//! 成功后任务结果仅包含 `success`。

use std::collections::BTreeMap;

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{AsyncCreateResponse, ResourceTag, ResourceType};
use crate::params::{Params, ToParams};

/// 标签查询选项
#[derive(Debug, Clone, Default)]
pub struct ListTagsOptions {
    pub resource_type: Option<ResourceType>,
    pub resource_id: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub customer: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
}

impl ListTagsOptions {
    pub fn with_resource(mut self, resource_type: ResourceType, resource_id: &str) -> Self {
        self.resource_type = Some(resource_type);
        self.resource_id = Some(resource_id.to_string());
        self
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(key.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_customer(mut self, customer: &str) -> Self {
        self.customer = Some(customer.to_string());
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
}

impl ToParams for ListTagsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("resourcetype", self.resource_type)
            .set_opt("resourceid", self.resource_id.as_deref())
            .set_opt("key", self.key.as_deref())
            .set_opt("value", self.value.as_deref())
            .set_opt("customer", self.customer.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 创建标签选项
#[derive(Debug, Clone)]
pub struct CreateTagsOptions {
    pub resource_type: ResourceType,
    pub resource_ids: Vec<String>,
    pub tags: BTreeMap<String, String>,
    pub customer: Option<String>,
}

impl CreateTagsOptions {
    pub fn new(resource_type: ResourceType, resource_ids: Vec<String>) -> Self {
        Self {
            resource_type,
            resource_ids,
            tags: BTreeMap::new(),
            customer: None,
        }
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_customer(mut self, customer: &str) -> Self {
        self.customer = Some(customer.to_string());
        self
    }
}

impl ToParams for CreateTagsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("resourcetype", self.resource_type)
            .set_list("resourceids", &self.resource_ids)
            .set_map("tags", "key", "value", &self.tags)
            .set_opt("customer", self.customer.as_deref());
        params
    }
}

/// 删除标签选项
///
/// 未指定标签时删除资源上的全部标签；只指定键时删除该键的任意取值。
#[derive(Debug, Clone)]
pub struct DeleteTagsOptions {
    pub resource_type: ResourceType,
    pub resource_ids: Vec<String>,
    /// 键 -> 取值（`None` 表示匹配任意取值）
    pub tags: BTreeMap<String, Option<String>>,
}

impl DeleteTagsOptions {
    pub fn new(resource_type: ResourceType, resource_ids: Vec<String>) -> Self {
        Self {
            resource_type,
            resource_ids,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.tags.insert(key.to_string(), None);
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), Some(value.to_string()));
        self
    }
}

impl ToParams for DeleteTagsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("resourcetype", self.resource_type)
            .set_list("resourceids", &self.resource_ids);

        for (i, (key, value)) in self.tags.iter().enumerate() {
            params
                .set(&format!("tags[{}].key", i), key)
                .set_opt(&format!("tags[{}].value", i), value.as_deref());
        }
        params
    }
}

/// 资源标签 API
pub struct TagApi<'a> {
    client: &'a CloudClient,
}

impl<'a> TagApi<'a> {
    /// 创建新的标签 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出标签
    pub async fn list_tags(&self, options: ListTagsOptions) -> Result<Vec<ResourceTag>> {
        info!("获取标签列表");
        self.client
            .list("listTags", &options.to_params(), "tag")
            .await
    }

    /// 为资源创建标签
    pub async fn create_tags(&self, options: CreateTagsOptions) -> Result<AsyncCreateResponse> {
        info!(
            "创建标签: {} {:?} ({} 个)",
            options.resource_type,
            options.resource_ids,
            options.tags.len()
        );
        self.client
            .request_async("createTags", &options.to_params())
            .await
    }

    /// 删除资源标签
    pub async fn delete_tags(&self, options: DeleteTagsOptions) -> Result<AsyncCreateResponse> {
        info!("删除标签: {} {:?}", options.resource_type, options.resource_ids);
        self.client
            .request_async("deleteTags", &options.to_params())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tags_params() {
        let params = CreateTagsOptions::new(
            ResourceType::UserVm,
            vec!["vm-1".into(), "vm-2".into()],
        )
        .with_tag("env", "prod")
        .with_tag("owner", "ops")
        .to_params();

        assert_eq!(params.get("resourcetype"), Some("UserVm"));
        assert_eq!(params.get("resourceids"), Some("vm-1,vm-2"));
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("tags[0].value"), Some("prod"));
        assert_eq!(params.get("tags[1].key"), Some("owner"));
        assert_eq!(params.get("tags[1].value"), Some("ops"));
    }

    #[test]
    fn test_delete_tags_key_only() {
        let params = DeleteTagsOptions::new(ResourceType::Volume, vec!["vol-1".into()])
            .with_key("env")
            .to_params();

        assert_eq!(params.get("resourcetype"), Some("Volume"));
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("tags[0].value"), None);
    }
}
