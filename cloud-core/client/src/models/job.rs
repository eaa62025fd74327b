//! 异步任务
//!
//! 部分修改类接口立即返回 `AsyncCreateResponse`（含任务 ID），
//! 调用方随后查询任务状态直到其离开 `InProgress`：
//! - `Succeeded`: `jobresult` 中按命令对应的键携带结果对象
//! - `Failed`: `jobresult` 中携带 `errorcode` / `errortext`

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de;
use crate::error::{CloudError, Result};

code_enum! {
    /// 任务状态
    pub enum AsyncJobStatus {
        InProgress => 0,
        Succeeded => 1,
        Failed => 2,
    }
}

code_enum! {
    /// 任务失败错误码
    pub enum AsyncJobErrorCode {
        InternalError => 530,
        AccountError => 531,
        AccountResourceLimitError => 532,
        InsufficientCapacityError => 533,
        ResourceUnavailableError => 534,
        ResourceAllocationError => 535,
        ResourceInUseError => 536,
        NetworkRuleConflictError => 537,
    }
}

/// 异步任务接受响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncCreateResponse {
    /// 被创建资源的 ID（仅创建类命令返回）
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub id: Option<String>,

    #[serde(rename = "jobid", deserialize_with = "de::id")]
    pub job_id: String,
}

/// 任务失败时的错误对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncJobError {
    #[serde(rename = "errorcode")]
    pub error_code: AsyncJobErrorCode,

    #[serde(rename = "errortext", default)]
    pub error_text: String,
}

impl fmt::Display for AsyncJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code.code(), self.error_text)
    }
}

/// 异步任务
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncJob {
    #[serde(rename = "jobid", deserialize_with = "de::id")]
    pub job_id: String,

    #[serde(rename = "accountid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub account_id: Option<String>,

    #[serde(rename = "userid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub user_id: Option<String>,

    /// 触发任务的命令类名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,

    #[serde(rename = "jobstatus")]
    pub status: AsyncJobStatus,

    #[serde(rename = "jobprocstatus", default, skip_serializing_if = "Option::is_none")]
    pub proc_status: Option<i64>,

    #[serde(rename = "jobresultcode", default, skip_serializing_if = "Option::is_none")]
    pub result_code: Option<i64>,

    /// 结果类型，如 `object`
    #[serde(rename = "jobresulttype", default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,

    /// 原始结果；成功时为结果对象，失败时为错误对象
    #[serde(rename = "jobresult", default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(rename = "jobinstancetype", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    #[serde(rename = "jobinstanceid", default, skip_serializing_if = "Option::is_none", deserialize_with = "de::opt_id")]
    pub instance_id: Option<String>,

    #[serde(default, with = "de::timestamp")]
    pub created: Option<DateTime<FixedOffset>>,
}

impl AsyncJob {
    /// 任务是否已结束（不再处于执行中）
    pub fn is_complete(&self) -> bool {
        self.status != AsyncJobStatus::InProgress
    }

    /// 任务是否成功
    pub fn is_succeeded(&self) -> bool {
        self.status == AsyncJobStatus::Succeeded
    }

    /// 失败任务的错误对象
    ///
    /// 仅当状态为 `Failed` 时返回；错误对象无法解析时以错误文本兜底。
    pub fn error(&self) -> Option<AsyncJobError> {
        if self.status != AsyncJobStatus::Failed {
            return None;
        }

        let parsed = self
            .result
            .as_ref()
            .and_then(|v| serde_json::from_value::<AsyncJobError>(v.clone()).ok());

        Some(parsed.unwrap_or_else(|| AsyncJobError {
            error_code: self
                .result_code
                .map(AsyncJobErrorCode::from_code)
                .unwrap_or(AsyncJobErrorCode::Unrecognized),
            error_text: self
                .result
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }))
    }

    /// 提取类型化结果
    ///
    /// # Arguments
    /// * `key` - 结果对象在 `jobresult` 中的键，如 `virtualmachine`、`volume`
    ///
    /// # Errors
    /// - 任务仍在执行: `CloudError::JobPending`
    /// - 任务失败: `CloudError::JobFailed`
    /// - 任务成功但结果为空或缺少该键: `CloudError::NullJobResult`
    /// - 结果无法解析为 `T`: `CloudError::ParseError`
    pub fn result<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        match self.status {
            AsyncJobStatus::InProgress => Err(CloudError::JobPending(self.job_id.clone())),
            AsyncJobStatus::Failed => Err(self.failure()),
            AsyncJobStatus::Succeeded => {
                let value = self
                    .result
                    .as_ref()
                    .and_then(|r| r.get(key))
                    .filter(|v| !v.is_null())
                    .ok_or_else(|| CloudError::NullJobResult(self.job_id.clone()))?;

                serde_json::from_value(value.clone()).map_err(|e| {
                    CloudError::ParseError(format!(
                        "任务 {} 结果 {} 解析失败: {}",
                        self.job_id, key, e
                    ))
                })
            }
            AsyncJobStatus::Unrecognized => Err(CloudError::ParseError(format!(
                "任务 {} 状态无法识别",
                self.job_id
            ))),
        }
    }

    /// 校验任务成功，忽略结果内容
    ///
    /// 适用于删除/分离这类只返回 `success` 的任务。
    pub fn ensure_succeeded(&self) -> Result<()> {
        match self.status {
            AsyncJobStatus::Succeeded => Ok(()),
            AsyncJobStatus::InProgress => Err(CloudError::JobPending(self.job_id.clone())),
            AsyncJobStatus::Failed => Err(self.failure()),
            AsyncJobStatus::Unrecognized => Err(CloudError::ParseError(format!(
                "任务 {} 状态无法识别",
                self.job_id
            ))),
        }
    }

    fn failure(&self) -> CloudError {
        CloudError::JobFailed {
            job_id: self.job_id.clone(),
            error: self.error().unwrap_or(AsyncJobError {
                error_code: AsyncJobErrorCode::Unrecognized,
                error_text: String::new(),
            }),
        }
    }
}
