//! 卷快照管理命令

use anyhow::Result;
use cloud_client::api::snapshot::SNAPSHOT_RESULT_KEY;
use cloud_client::{ListSnapshotsOptions, Snapshot};
use colored::Colorize;

use super::common::CommandContext;
use super::output::{cell, TableRow};
use crate::SnapshotAction;

pub async fn handle(action: SnapshotAction, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client.snapshot();

    match action {
        SnapshotAction::List { volume, keyword } => {
            let options = ListSnapshotsOptions {
                volume_id: volume,
                keyword,
                ..Default::default()
            };
            let snapshots = api.list_snapshots(options).await?;
            ctx.print(&snapshots)
        }

        SnapshotAction::Create { volume, wait } => {
            let job = api.create_snapshot(&volume).await?;
            ctx.finish_job::<Snapshot>(job, wait, SNAPSHOT_RESULT_KEY).await
        }

        SnapshotAction::Delete { id, wait } => {
            let job = api.delete_snapshot(&id).await?;
            ctx.finish_job_success(job, wait, &format!("快照 {} 已删除", id.cyan()))
                .await
        }
    }
}

impl TableRow for Snapshot {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "VOLUME", "TYPE", "STATE", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.volume_name.clone(),
            self.snapshot_type.to_string(),
            self.state.to_string(),
            cell(self.created.map(|c| c.to_rfc3339())),
        ]
    }
}
