//! 资源标签管理命令

use anyhow::Result;
use cloud_client::{CreateTagsOptions, DeleteTagsOptions, ListTagsOptions, ResourceTag, ResourceType};
use colored::Colorize;

use super::common::{parse_tag_filter, parse_tags, CommandContext};
use super::output::TableRow;
use crate::TagAction;

/// 解析资源类型，拒绝未知取值
fn resource_type(s: &str) -> Result<ResourceType> {
    match ResourceType::from(s.to_string()) {
        ResourceType::Unrecognized => anyhow::bail!("无效的资源类型: {}", s),
        t => Ok(t),
    }
}

pub async fn handle(action: TagAction, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client.tag();

    match action {
        TagAction::List {
            resource_type: rtype,
            resource_id,
            key,
        } => {
            let options = ListTagsOptions {
                resource_type: rtype.as_deref().map(resource_type).transpose()?,
                resource_id,
                key,
                ..Default::default()
            };
            let tags = api.list_tags(options).await?;
            ctx.print(&tags)
        }

        TagAction::Create {
            resource_type: rtype,
            resource_ids,
            tag,
            wait,
        } => {
            let options = CreateTagsOptions::new(resource_type(&rtype)?, resource_ids)
                .with_tags(parse_tags(&tag)?);
            let count = options.tags.len();

            let job = api.create_tags(options).await?;
            ctx.finish_job_success(job, wait, &format!("已创建 {} 个标签", count.to_string().cyan()))
                .await
        }

        TagAction::Delete {
            resource_type: rtype,
            resource_ids,
            tag,
            wait,
        } => {
            let mut options = DeleteTagsOptions::new(resource_type(&rtype)?, resource_ids);
            for item in &tag {
                options = match parse_tag_filter(item)? {
                    (key, Some(value)) => options.with_tag(&key, &value),
                    (key, None) => options.with_key(&key),
                };
            }

            let job = api.delete_tags(options).await?;
            ctx.finish_job_success(job, wait, "标签已删除").await
        }
    }
}

impl TableRow for ResourceTag {
    fn headers() -> Vec<&'static str> {
        vec!["RESOURCE TYPE", "RESOURCE ID", "KEY", "VALUE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.resource_type.to_string(),
            self.resource_id.clone(),
            self.key.clone(),
            self.value.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type() {
        assert_eq!(resource_type("uservm").unwrap(), ResourceType::UserVm);
        assert_eq!(resource_type("Volume").unwrap(), ResourceType::Volume);
        assert!(resource_type("Bucket").is_err());
    }
}
