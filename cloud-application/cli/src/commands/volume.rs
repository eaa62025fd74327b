//! 存储卷管理命令

use anyhow::Result;
use cloud_client::api::volume::VOLUME_RESULT_KEY;
use cloud_client::{ListVolumesOptions, ResizeVolumeOptions, Volume, VolumeType};
use colored::Colorize;

use super::common::CommandContext;
use super::output::{cell, TableRow};
use crate::VolumeAction;

pub async fn handle(action: VolumeAction, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client.volume();

    match action {
        VolumeAction::List {
            vm,
            volume_type,
            zone,
            keyword,
        } => {
            let options = ListVolumesOptions {
                virtual_machine_id: vm,
                volume_type: volume_type.map(VolumeType::from),
                zone_id: zone,
                keyword,
                ..Default::default()
            };
            let volumes = api.list_volumes(options).await?;
            ctx.print(&volumes)
        }

        VolumeAction::Create {
            name,
            disk_offering,
            snapshot,
            zone,
            wait,
        } => {
            let zone = ctx.zone(zone)?;
            let job = match (disk_offering, snapshot) {
                (None, Some(snapshot)) => api.create_volume_from_snapshot(&name, &snapshot, &zone).await?,
                (Some(offering), None) => {
                    api.create_volume_from_disk_offering(&name, &offering, &zone).await?
                }
                (Some(_), Some(_)) => anyhow::bail!("--disk-offering 与 --snapshot 不能同时指定"),
                (None, None) => anyhow::bail!("需要指定 --disk-offering 或 --snapshot"),
            };
            ctx.finish_job::<Volume>(job, wait, VOLUME_RESULT_KEY).await
        }

        VolumeAction::Attach { id, vm, wait } => {
            let job = api.attach_volume(&id, &vm).await?;
            ctx.finish_job::<Volume>(job, wait, VOLUME_RESULT_KEY).await
        }

        VolumeAction::Detach { id, wait } => {
            let job = api.detach_volume(&id).await?;
            ctx.finish_job::<Volume>(job, wait, VOLUME_RESULT_KEY).await
        }

        VolumeAction::Resize {
            id,
            size,
            disk_offering,
            shrink_ok,
            wait,
        } => {
            if size.is_none() && disk_offering.is_none() {
                anyhow::bail!("需要指定 --size 或 --disk-offering");
            }

            let mut options = ResizeVolumeOptions::default();
            if let Some(size) = size {
                options = options.with_size(size);
            }
            if let Some(offering) = disk_offering.as_deref() {
                options = options.with_disk_offering_id(offering);
            }
            if shrink_ok {
                options = options.with_shrink_ok(true);
            }

            let job = api.resize_volume(&id, options).await?;
            ctx.finish_job::<Volume>(job, wait, VOLUME_RESULT_KEY).await
        }

        VolumeAction::Delete { id, wait } => {
            let job = api.delete_volume(&id).await?;
            ctx.finish_job_success(job, wait, &format!("卷 {} 已删除", id.cyan()))
                .await
        }
    }
}

impl TableRow for Volume {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TYPE", "SIZE(GB)", "STATE", "ZONE", "VM", "DEVICE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.volume_type.to_string(),
            self.size_gb().to_string(),
            self.state.to_string(),
            self.zone_name.clone(),
            cell(self.vm_name.as_deref()),
            cell(self.device_id),
        ]
    }
}
