//! 异步任务命令

use std::time::Duration;

use anyhow::Result;
use cloud_client::{AsyncJob, AsyncJobStatus, ListAsyncJobsOptions};

use super::common::{job_status_label, CommandContext};
use super::output::{cell, TableRow};
use crate::JobAction;

pub async fn handle(action: JobAction, ctx: &CommandContext) -> Result<()> {
    match action {
        JobAction::Show { id } => {
            let job = ctx.client.async_job().get_async_job(&id).await?;
            ctx.print(&[job])
        }

        JobAction::Wait { id, timeout } => {
            let mut policy = ctx.client.poll_policy().clone();
            if let Some(secs) = timeout {
                policy = policy.with_timeout(Duration::from_secs(secs));
            }

            let job = ctx.wait_job(&id, &policy).await?;
            if ctx.format == "table" {
                println!("任务 {}: {}", job.job_id, job_status_label(job.status));
                if let Some(error) = job.error() {
                    println!("  错误: {}", error);
                }
            } else {
                ctx.print(std::slice::from_ref(&job))?;
            }

            // 失败任务以非零状态退出
            job.ensure_succeeded()?;
            Ok(())
        }

        JobAction::List { keyword } => {
            let options = ListAsyncJobsOptions {
                keyword,
                ..Default::default()
            };
            let jobs = ctx.client.async_job().list_async_jobs(options).await?;
            ctx.print(&jobs)
        }
    }
}

impl TableRow for AsyncJob {
    fn headers() -> Vec<&'static str> {
        vec!["JOB ID", "STATUS", "COMMAND", "INSTANCE", "RESULT CODE", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.job_id.clone(),
            match self.status {
                AsyncJobStatus::InProgress => "InProgress",
                AsyncJobStatus::Succeeded => "Succeeded",
                AsyncJobStatus::Failed => "Failed",
                AsyncJobStatus::Unrecognized => "Unknown",
            }
            .to_string(),
            cell(self.cmd.as_deref().map(|c| c.rsplit('.').next().unwrap_or(c))),
            cell(self.instance_id.as_deref()),
            cell(self.result_code),
            cell(self.created.map(|c| c.to_rfc3339())),
        ]
    }
}
