//! 网络管理命令

use anyhow::Result;
use cloud_client::{ListNetworksOptions, Network};

use super::common::CommandContext;
use super::output::{cell, TableRow};
use crate::NetworkAction;

pub async fn handle(action: NetworkAction, ctx: &CommandContext) -> Result<()> {
    match action {
        NetworkAction::List { zone, keyword } => {
            let options = ListNetworksOptions {
                zone_id: zone,
                keyword,
                ..Default::default()
            };
            let networks = ctx.client.network().list_networks(options).await?;
            ctx.print(&networks)
        }
    }
}

impl TableRow for Network {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TYPE", "TRAFFIC", "STATE", "ZONE", "CIDR", "VLAN"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.guest_ip_type.to_string(),
            self.traffic_type.to_string(),
            self.state.to_string(),
            self.zone_name.clone().unwrap_or_else(|| self.zone_id.clone()),
            cell(self.cidr.as_deref()),
            cell(self.vlan.as_deref()),
        ]
    }
}
