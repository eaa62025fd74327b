//! 模板、方案与区域查询命令

use anyhow::Result;
use cloud_client::{
    DiskOffering, ListDiskOfferingsOptions, ListServiceOfferingsOptions, ListTemplatesOptions,
    ListZonesOptions, ServiceOffering, Template, TemplateFilter, Zone,
};

use super::common::CommandContext;
use super::output::{cell, TableRow};
use crate::{OfferingAction, TemplateAction, ZoneAction};

pub async fn handle_templates(action: TemplateAction, ctx: &CommandContext) -> Result<()> {
    match action {
        TemplateAction::List {
            filter,
            zone,
            keyword,
        } => {
            let template_filter = TemplateFilter::from(filter.clone());
            if template_filter == TemplateFilter::Unrecognized {
                anyhow::bail!("无效的模板过滤器: {}", filter);
            }

            let options = ListTemplatesOptions {
                zone_id: zone,
                keyword,
                ..ListTemplatesOptions::new(template_filter)
            };
            let templates = ctx.client.template().list_templates(options).await?;
            ctx.print(&templates)
        }
    }
}

pub async fn handle_offerings(action: OfferingAction, ctx: &CommandContext) -> Result<()> {
    let api = ctx.client.offering();

    match action {
        OfferingAction::Service { keyword } => {
            let options = ListServiceOfferingsOptions {
                keyword,
                ..Default::default()
            };
            let offerings = api.list_service_offerings(options).await?;
            ctx.print(&offerings)
        }
        OfferingAction::Disk { keyword } => {
            let options = ListDiskOfferingsOptions {
                keyword,
                ..Default::default()
            };
            let offerings = api.list_disk_offerings(options).await?;
            ctx.print(&offerings)
        }
    }
}

pub async fn handle_zones(action: ZoneAction, ctx: &CommandContext) -> Result<()> {
    match action {
        ZoneAction::List { available } => {
            let mut options = ListZonesOptions::default();
            if available {
                options = options.with_available(true);
            }
            let zones = ctx.client.zone().list_zones(options).await?;
            ctx.print(&zones)
        }
    }
}

impl TableRow for Template {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "ZONE", "READY", "FORMAT", "HYPERVISOR", "OS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            cell(self.zone_name.as_deref().or(self.zone_id.as_deref())),
            self.is_ready.to_string(),
            cell(self.format.as_deref()),
            cell(self.hypervisor.as_deref()),
            cell(self.os_type_name.as_deref()),
        ]
    }
}

impl TableRow for ServiceOffering {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "CPU", "CPU(MHz)", "MEMORY(MB)", "STORAGE", "HA"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.cpu_number.to_string(),
            self.cpu_speed.to_string(),
            self.memory.to_string(),
            cell(self.storage_type),
            self.offer_ha.to_string(),
        ]
    }
}

impl TableRow for DiskOffering {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "SIZE(GB)", "CUSTOMIZED", "STORAGE", "TAGS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.disk_size.to_string(),
            self.is_customized.to_string(),
            cell(self.storage_type),
            cell(self.tags.as_deref()),
        ]
    }
}

impl TableRow for Zone {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "NETWORK", "ALLOCATION", "SECURITY GROUPS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.network_type.to_string(),
            cell(self.allocation_state.as_deref()),
            self.security_groups_enabled.to_string(),
        ]
    }
}
