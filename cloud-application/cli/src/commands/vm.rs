//! 虚拟机管理命令

use std::fs;

use anyhow::{Context, Result};
use cloud_client::api::virtual_machine::VIRTUAL_MACHINE_RESULT_KEY;
use cloud_client::{
    DeployVirtualMachineOptions, ListVirtualMachinesOptions, VirtualMachine, VirtualMachineState,
};
use colored::Colorize;

use super::common::{parse_tags, CommandContext};
use super::output::TableRow;
use crate::VmAction;

pub async fn handle(action: VmAction, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client.virtual_machine();

    match action {
        VmAction::List {
            state,
            zone,
            keyword,
            tag,
        } => {
            let options = ListVirtualMachinesOptions {
                state: state.map(VirtualMachineState::from),
                zone_id: zone,
                keyword,
                tags: parse_tags(&tag)?,
                ..Default::default()
            };
            let vms = api.list_virtual_machines(options).await?;
            ctx.print(&vms)
        }

        VmAction::Deploy {
            zone,
            service_offering,
            template,
            name,
            display_name,
            network,
            disk_offering,
            user_data,
            no_start,
            wait,
        } => {
            let zone = ctx.zone(zone)?;

            let mut options = DeployVirtualMachineOptions {
                name,
                display_name,
                network_ids: network,
                disk_offering_id: disk_offering,
                ..Default::default()
            };
            if let Some(path) = user_data {
                let data = fs::read(&path).with_context(|| format!("读取用户数据失败: {}", path))?;
                options = options.with_user_data(&data);
            }
            if no_start {
                options = options.with_start_vm(false);
            }

            let job = api
                .deploy_virtual_machine(&zone, &service_offering, &template, options)
                .await?;
            ctx.finish_job::<VirtualMachine>(job, wait, VIRTUAL_MACHINE_RESULT_KEY)
                .await
        }

        VmAction::Start { id, wait } => {
            let job = api.start_virtual_machine(&id).await?;
            ctx.finish_job::<VirtualMachine>(job, wait, VIRTUAL_MACHINE_RESULT_KEY)
                .await
        }

        VmAction::Stop { id, force, wait } => {
            let job = api.stop_virtual_machine_forced(&id, force).await?;
            ctx.finish_job::<VirtualMachine>(job, wait, VIRTUAL_MACHINE_RESULT_KEY)
                .await
        }

        VmAction::Reboot { id, wait } => {
            let job = api.reboot_virtual_machine(&id).await?;
            ctx.finish_job::<VirtualMachine>(job, wait, VIRTUAL_MACHINE_RESULT_KEY)
                .await
        }

        VmAction::Destroy { id, wait } => {
            let job = api.destroy_virtual_machine(&id).await?;
            ctx.finish_job_success(job, wait, &format!("虚拟机 {} 已销毁", id.cyan()))
                .await
        }
    }
}

impl TableRow for VirtualMachine {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "STATE", "ZONE", "OFFERING", "TEMPLATE", "IP"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.state.to_string(),
            self.zone_name.clone(),
            self.service_offering_name.clone(),
            self.template_name.clone(),
            self.default_nic()
                .and_then(|nic| nic.ip_address.clone())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}
