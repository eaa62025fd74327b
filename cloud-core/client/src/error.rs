//! 云平台客户端错误定义

use thiserror::Error;

use crate::models::{ApiErrorResponse, AsyncJobError};

/// 云平台错误类型
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("HTTP 错误: {0}")]
    HttpError(String),

    /// 非 2xx 响应；若响应体携带平台错误对象则一并解析
    #[error("API 错误 [{status}]: {}", api_error_text(.error, .body))]
    ApiError {
        status: u16,
        error: Option<ApiErrorResponse>,
        body: String,
    },

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("超时错误: {0}")]
    Timeout(String),

    /// 异步任务仍在执行中
    #[error("异步任务尚未完成: {0}")]
    JobPending(String),

    /// 异步任务执行失败，携带平台返回的错误对象
    #[error("异步任务 {job_id} 失败: {error}")]
    JobFailed { job_id: String, error: AsyncJobError },

    /// 异步任务成功但结果为空
    #[error("异步任务 {0} 成功但未返回结果")]
    NullJobResult(String),
}

impl CloudError {
    /// 平台错误码（仅 API 错误或任务失败时存在）
    pub fn error_code(&self) -> Option<i64> {
        match self {
            CloudError::ApiError { error: Some(e), .. } => Some(e.error_code),
            CloudError::JobFailed { error, .. } => Some(error.error_code.code()),
            _ => None,
        }
    }
}

fn api_error_text<'a>(error: &'a Option<ApiErrorResponse>, body: &'a str) -> &'a str {
    error.as_ref().map(|e| e.error_text.as_str()).unwrap_or(body)
}

impl From<reqwest::Error> for CloudError {
    fn from(e: reqwest::Error) -> Self {
        CloudError::HttpError(e.to_string())
    }
}

/// 云平台结果类型
pub type Result<T> = std::result::Result<T, CloudError>;
