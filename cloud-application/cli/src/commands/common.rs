//! 公共工具函数模块
//!
//! 提供各命令模块共享的功能，包括：
//! - 客户端创建与命令上下文
//! - 异步任务提交与等待
//! - `key=value` 参数解析

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use cloud_client::{AsyncCreateResponse, AsyncJob, AsyncJobStatus, CloudClient, PollPolicy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::output::{output_formatted, TableRow};
use crate::config::CliConfig;

/// 命令执行上下文
pub struct CommandContext {
    pub client: CloudClient,
    /// 输出格式 (table/json/yaml)
    pub format: String,
    /// 默认区域 ID
    pub default_zone: Option<String>,
}

impl CommandContext {
    /// 加载配置并创建客户端
    pub fn init(config_path: Option<&str>, format: Option<&str>) -> Result<Self> {
        let config = CliConfig::load(config_path)?;
        debug!("配置来源: {:?}", config.source);

        if config.source.is_none() && config.client.endpoint.is_empty() {
            anyhow::bail!(
                "未找到配置，请设置 CLOUD_API_ENDPOINT 等环境变量或创建 {:?}",
                CliConfig::user_config_path()?
            );
        }

        let client = CloudClient::new(config.client).context("创建客户端失败")?;

        Ok(Self {
            client,
            format: format
                .map(|f| f.to_string())
                .unwrap_or(config.settings.format),
            default_zone: config.settings.zone,
        })
    }

    /// 取命令行指定的区域，否则取配置中的默认区域
    pub fn zone(&self, zone: Option<String>) -> Result<String> {
        zone.or_else(|| self.default_zone.clone())
            .context("未指定区域，请使用 --zone 或在配置文件 [cli] 段设置 zone")
    }

    /// 输出列表
    pub fn print<T: TableRow + Serialize>(&self, items: &[T]) -> Result<()> {
        output_formatted(items, &self.format)
    }

    /// 等待任务，期间显示进度
    pub async fn wait_job(&self, job_id: &str, policy: &PollPolicy) -> Result<AsyncJob> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
        spinner.set_message(format!("等待任务 {}", job_id));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.client.async_job().wait(job_id, policy).await;
        spinner.finish_and_clear();

        result.with_context(|| format!("等待任务 {} 失败", job_id))
    }

    /// 处理异步命令的返回
    ///
    /// 未指定 `--wait` 时只打印任务 ID；否则等待任务结束，
    /// 成功时按 `key` 提取并输出结果对象。
    pub async fn finish_job<T>(&self, job: AsyncCreateResponse, wait: bool, key: &str) -> Result<()>
    where
        T: DeserializeOwned + TableRow + Serialize,
    {
        if !wait {
            print_submitted(&job);
            return Ok(());
        }

        let done = self.wait_job(&job.job_id, self.client.poll_policy()).await?;
        let entity: T = done
            .result(key)
            .with_context(|| format!("任务 {} 未成功", job.job_id))?;

        self.print(&[entity])
    }

    /// 处理只关心成败的异步命令
    pub async fn finish_job_success(&self, job: AsyncCreateResponse, wait: bool, what: &str) -> Result<()> {
        if !wait {
            print_submitted(&job);
            return Ok(());
        }

        let done = self.wait_job(&job.job_id, self.client.poll_policy()).await?;
        done.ensure_succeeded()
            .with_context(|| format!("任务 {} 未成功", job.job_id))?;

        println!("{} {}", "✓".green().bold(), what);
        Ok(())
    }
}

fn print_submitted(job: &AsyncCreateResponse) {
    match &job.id {
        Some(id) => println!(
            "{} 已提交任务 {} (资源 {})",
            "→".cyan(),
            job.job_id.yellow(),
            id.cyan()
        ),
        None => println!("{} 已提交任务 {}", "→".cyan(), job.job_id.yellow()),
    }
    println!("  使用 {} 查询进度", format!("cloudctl jobs wait {}", job.job_id).bright_black());
}

/// 任务状态的彩色标签
pub fn job_status_label(status: AsyncJobStatus) -> String {
    match status {
        AsyncJobStatus::InProgress => "InProgress".yellow().to_string(),
        AsyncJobStatus::Succeeded => "Succeeded".green().to_string(),
        AsyncJobStatus::Failed => "Failed".red().to_string(),
        AsyncJobStatus::Unrecognized => "Unknown".bright_black().to_string(),
    }
}

/// 解析 `key=value`
pub fn parse_tag(s: &str) -> Result<(String, String)> {
    let (key, value) = s
        .split_once('=')
        .with_context(|| format!("标签格式应为 key=value: {}", s))?;

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("标签键不能为空: {}", s);
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// 解析多个 `key=value`，重复的键以后者为准
pub fn parse_tags(items: &[String]) -> Result<BTreeMap<String, String>> {
    items.iter().map(|s| parse_tag(s)).collect()
}

/// 解析 `key` 或 `key=value`，只有键时值为 `None`
pub fn parse_tag_filter(s: &str) -> Result<(String, Option<String>)> {
    if s.contains('=') {
        let (k, v) = parse_tag(s)?;
        Ok((k, Some(v)))
    } else if s.trim().is_empty() {
        anyhow::bail!("标签键不能为空")
    } else {
        Ok((s.trim().to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag() {
        assert_eq!(
            parse_tag("env=prod").unwrap(),
            ("env".to_string(), "prod".to_string())
        );
        assert_eq!(
            parse_tag("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_tag("empty=").unwrap().1, "");
        assert!(parse_tag("novalue").is_err());
        assert!(parse_tag("=x").is_err());
    }

    #[test]
    fn test_parse_tags_last_wins() {
        let tags = parse_tags(&["env=dev".to_string(), "env=prod".to_string()]).unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags["env"], "prod");
    }

    #[test]
    fn test_parse_tag_filter() {
        assert_eq!(parse_tag_filter("env").unwrap(), ("env".to_string(), None));
        assert_eq!(
            parse_tag_filter("env=prod").unwrap(),
            ("env".to_string(), Some("prod".to_string()))
        );
        assert!(parse_tag_filter(" ").is_err());
    }
}
