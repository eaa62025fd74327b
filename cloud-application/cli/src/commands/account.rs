//! 账户与用户命令

use anyhow::Result;
use cloud_client::{Account, AccountType, ListAccountsOptions, ListUsersOptions, User};

use super::common::CommandContext;
use super::output::{limit_cell, TableRow};
use crate::{AccountAction, UserAction};

pub async fn handle_accounts(action: AccountAction, ctx: &CommandContext) -> Result<()> {
    match action {
        AccountAction::List {
            name,
            domain_id,
            keyword,
        } => {
            let options = ListAccountsOptions {
                name,
                domain_id,
                keyword,
                list_all: Some(true),
                ..Default::default()
            };
            let accounts = ctx.client.account().list_accounts(options).await?;
            ctx.print(&accounts)
        }
    }
}

pub async fn handle_users(action: UserAction, ctx: &CommandContext) -> Result<()> {
    match action {
        UserAction::List {
            account,
            domain_id,
            username,
        } => {
            // clap 保证指定 account 时同时指定了 domain_id
            let options = ListUsersOptions {
                account,
                domain_id,
                username,
                ..Default::default()
            };
            let users = ctx.client.account().list_users(options).await?;
            ctx.print(&users)
        }
    }
}

fn account_type_label(t: AccountType) -> &'static str {
    match t {
        AccountType::User => "User",
        AccountType::Admin => "Admin",
        AccountType::DomainAdmin => "DomainAdmin",
        AccountType::Unrecognized => "Unknown",
    }
}

impl TableRow for Account {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TYPE", "DOMAIN", "STATE", "VMS", "VM LIMIT", "VOLUMES", "VOLUME LIMIT"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            account_type_label(self.account_type).to_string(),
            self.domain.clone(),
            self.state.to_string(),
            self.vm_total.to_string(),
            limit_cell(self.vm_limit),
            self.volume_total.to_string(),
            limit_cell(self.volume_limit),
        ]
    }
}

impl TableRow for User {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "USERNAME", "ACCOUNT", "TYPE", "DOMAIN", "STATE", "EMAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            self.account.clone(),
            account_type_label(self.account_type).to_string(),
            self.domain.clone(),
            self.state.to_string(),
            self.email.clone().unwrap_or_default(),
        ]
    }
}
