//! 模板 API

use std::collections::BTreeMap;

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{Template, TemplateFilter};
use crate::params::{Params, ToParams};

/// 模板查询选项
///
/// `templatefilter` 为平台必填参数，默认取 `executable`（当前账户可用于部署的模板）。
#[derive(Debug, Clone)]
pub struct ListTemplatesOptions {
    pub filter: TemplateFilter,
    pub id: Option<String>,
    pub name: Option<String>,
    pub zone_id: Option<String>,
    pub hypervisor: Option<String>,
    pub account: Option<String>,
    pub domain_id: Option<String>,
    pub keyword: Option<String>,
    pub tags: BTreeMap<String, String>,
}

impl Default for ListTemplatesOptions {
    fn default() -> Self {
        Self::new(TemplateFilter::Executable)
    }
}

impl ListTemplatesOptions {
    pub fn new(filter: TemplateFilter) -> Self {
        Self {
            filter,
            id: None,
            name: None,
            zone_id: None,
            hypervisor: None,
            account: None,
            domain_id: None,
            keyword: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_filter(mut self, filter: TemplateFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_zone_id(mut self, zone_id: &str) -> Self {
        self.zone_id = Some(zone_id.to_string());
        self
    }

    pub fn with_hypervisor(mut self, hypervisor: &str) -> Self {
        self.hypervisor = Some(hypervisor.to_string());
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

impl ToParams for ListTemplatesOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set("templatefilter", self.filter)
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("zoneid", self.zone_id.as_deref())
            .set_opt("hypervisor", self.hypervisor.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("keyword", self.keyword.as_deref())
            .set_map("tags", "key", "value", &self.tags);
        params
    }
}

/// 模板 API
pub struct TemplateApi<'a> {
    client: &'a CloudClient,
}

impl<'a> TemplateApi<'a> {
    /// 创建新的模板 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出模板
    ///
    /// 跨区域模板在每个区域各返回一条，结果按 (ID, 区域) 去重。
    pub async fn list_templates(&self, options: ListTemplatesOptions) -> Result<Vec<Template>> {
        info!("获取模板列表: {}", options.filter);
        self.client
            .list("listTemplates", &options.to_params(), "template")
            .await
    }

    /// 获取指定区域中的模板
    pub async fn get_template_in_zone(&self, template_id: &str, zone_id: &str) -> Result<Option<Template>> {
        info!("获取模板详情: {} (区域 {})", template_id, zone_id);
        let params = ListTemplatesOptions::default()
            .with_id(template_id)
            .with_zone_id(zone_id)
            .to_params();
        let templates = self
            .client
            .list::<Template>("listTemplates", &params, "template")
            .await?;
        Ok(templates.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let params = ListTemplatesOptions::default().to_params();
        assert_eq!(params.get("templatefilter"), Some("executable"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_self_filter_label() {
        let params = ListTemplatesOptions::new(TemplateFilter::SelfOwned)
            .with_zone_id("zone-1")
            .to_params();
        assert_eq!(params.get("templatefilter"), Some("self"));
        assert_eq!(params.get("zoneid"), Some("zone-1"));
    }
}
