//! 异步任务 API
//!
//! 提供异步任务查询与等待功能：
//! - 查询单个任务状态 (`queryAsyncJobResult`)
//! - 列出任务 (`listAsyncJobs`)
//! - 按轮询策略等待任务结束并提取结果

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::client::CloudClient;
use crate::error::{CloudError, Result};
use crate::models::de::TIMESTAMP_FORMAT;
use crate::models::{AsyncJob, AsyncJobError, AsyncJobErrorCode, AsyncJobStatus, SuccessResponse};
use crate::params::{Params, ToParams};
use crate::poll::PollPolicy;

/// 默认的任务完成判定：状态不再是 `InProgress`
pub fn job_complete(job: &AsyncJob) -> bool {
    job.status != AsyncJobStatus::InProgress
}

/// 任务查询选项
#[derive(Debug, Clone, Default)]
pub struct ListAsyncJobsOptions {
    pub account: Option<String>,
    pub domain_id: Option<String>,
    /// 仅返回该时间之后创建的任务
    pub start_date: Option<DateTime<FixedOffset>>,
    pub list_all: Option<bool>,
    pub keyword: Option<String>,
}

impl ListAsyncJobsOptions {
    pub fn with_account(mut self, account: &str, domain_id: &str) -> Self {
        self.account = Some(account.to_string());
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_start_date(mut self, start_date: DateTime<FixedOffset>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_list_all(mut self, list_all: bool) -> Self {
        self.list_all = Some(list_all);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

impl ToParams for ListAsyncJobsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("account", self.account.as_deref())
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt(
                "startdate",
                self.start_date.map(|d| d.format(TIMESTAMP_FORMAT).to_string()),
            )
            .set_opt("listall", self.list_all)
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 异步任务 API
pub struct AsyncJobApi<'a> {
    client: &'a CloudClient,
}

impl<'a> AsyncJobApi<'a> {
    /// 创建新的异步任务 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 查询任务状态
    pub async fn get_async_job(&self, job_id: &str) -> Result<AsyncJob> {
        debug!("查询异步任务: {}", job_id);
        let mut params = Params::new();
        params.set("jobid", job_id);
        self.client.request("queryAsyncJobResult", &params).await
    }

    /// 列出任务
    pub async fn list_async_jobs(&self, options: ListAsyncJobsOptions) -> Result<Vec<AsyncJob>> {
        info!("获取异步任务列表");
        self.client
            .list("listAsyncJobs", &options.to_params(), "asyncjobs")
            .await
    }

    /// 轮询任务直到 `predicate` 为真
    ///
    /// 每次查询后按策略等待，超过策略的总超时后返回 `CloudError::Timeout`。
    /// 查询本身出错时立即返回，不做重试。
    pub async fn wait_until<F>(&self, job_id: &str, policy: &PollPolicy, predicate: F) -> Result<AsyncJob>
    where
        F: Fn(&AsyncJob) -> bool,
    {
        info!("等待异步任务: {} (超时 {:?})", job_id, policy.timeout);

        let deadline = Instant::now() + policy.timeout;
        let mut attempt: u32 = 0;

        loop {
            let job = self.get_async_job(job_id).await?;
            debug!(
                "第 {} 次查询异步任务 {}: 状态 {:?}",
                attempt + 1,
                job_id,
                job.status
            );

            if predicate(&job) {
                return Ok(job);
            }

            let now = Instant::now();
            if now >= deadline {
                warn!("异步任务 {} 等待超时", job_id);
                return Err(CloudError::Timeout(format!(
                    "异步任务 {} 在 {:?} 内未完成",
                    job_id, policy.timeout
                )));
            }

            sleep(policy.delay(attempt).min(deadline - now)).await;
            attempt = attempt.saturating_add(1);
        }
    }

    /// 等待任务结束（成功或失败）
    pub async fn wait(&self, job_id: &str, policy: &PollPolicy) -> Result<AsyncJob> {
        self.wait_until(job_id, policy, job_complete).await
    }

    /// 等待任务结束并校验成功，适用于删除/卸载这类不关心结果对象的任务
    ///
    /// 结果不含 `success` 字段时视为成功；任务成功结束但 `success` 为 false 时
    /// 返回 `CloudError::JobFailed`，错误文本取自 `displaytext`。
    pub async fn wait_for_success(&self, job_id: &str, policy: &PollPolicy) -> Result<SuccessResponse> {
        let job = self.wait(job_id, policy).await?;
        job.ensure_succeeded()?;

        let response = job
            .result
            .as_ref()
            .and_then(|v| serde_json::from_value::<SuccessResponse>(v.clone()).ok())
            .unwrap_or(SuccessResponse {
                success: true,
                display_text: None,
            });

        if !response.success {
            warn!("异步任务 {} 已结束但操作未成功: {:?}", job_id, response.display_text);
            return Err(CloudError::JobFailed {
                job_id: job.job_id,
                error: AsyncJobError {
                    error_code: job
                        .result_code
                        .filter(|code| *code != 0)
                        .map(AsyncJobErrorCode::from_code)
                        .unwrap_or(AsyncJobErrorCode::Unrecognized),
                    error_text: response.display_text.unwrap_or_default(),
                },
            });
        }

        Ok(response)
    }

    /// 等待任务结束并提取类型化结果
    ///
    /// # Arguments
    /// * `job_id` - 任务 ID
    /// * `key` - 结果对象在 `jobresult` 中的键，如 `virtualmachine`
    /// * `policy` - 轮询策略
    pub async fn wait_for_result<T: DeserializeOwned>(
        &self,
        job_id: &str,
        key: &str,
        policy: &PollPolicy,
    ) -> Result<T> {
        let job = self.wait(job_id, policy).await?;
        job.result(key)
    }
}
