//! 账户与用户 API
//!
//! 提供账户、用户查询功能，包括：
//! - 按条件列出账户（含配额与用量）
//! - 按条件列出用户
//! - 按 ID 获取单个账户/用户

use tracing::info;

use crate::client::CloudClient;
use crate::error::Result;
use crate::models::{Account, AccountState, AccountType, User, UserState};
use crate::params::{Params, ToParams};

/// 账户查询选项
#[derive(Debug, Clone, Default)]
pub struct ListAccountsOptions {
    pub id: Option<String>,
    pub name: Option<String>,
    pub account_type: Option<AccountType>,
    pub state: Option<AccountState>,
    pub domain_id: Option<String>,
    /// 是否包含子域
    pub is_recursive: Option<bool>,
    pub list_all: Option<bool>,
    pub keyword: Option<String>,
}

impl ListAccountsOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn with_state(mut self, state: AccountState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_domain_id(mut self, domain_id: &str) -> Self {
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.is_recursive = Some(recursive);
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

impl ToParams for ListAccountsOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("name", self.name.as_deref())
            .set_opt("accounttype", self.account_type.map(|t| t.code()))
            .set_opt("state", self.state)
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("isrecursive", self.is_recursive)
            .set_opt("listall", self.list_all)
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 用户查询选项
#[derive(Debug, Clone, Default)]
pub struct ListUsersOptions {
    pub id: Option<String>,
    pub username: Option<String>,
    pub account: Option<String>,
    pub account_type: Option<AccountType>,
    pub domain_id: Option<String>,
    pub state: Option<UserState>,
    pub keyword: Option<String>,
}

impl ListUsersOptions {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// 按账户过滤，平台要求同时指定域
    pub fn with_account(mut self, account: &str, domain_id: &str) -> Self {
        self.account = Some(account.to_string());
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn with_domain_id(mut self, domain_id: &str) -> Self {
        self.domain_id = Some(domain_id.to_string());
        self
    }

    pub fn with_state(mut self, state: UserState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }
}

impl ToParams for ListUsersOptions {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_opt("id", self.id.as_deref())
            .set_opt("username", self.username.as_deref())
            .set_opt("account", self.account.as_deref())
            .set_opt("accounttype", self.account_type.map(|t| t.code()))
            .set_opt("domainid", self.domain_id.as_deref())
            .set_opt("state", self.state)
            .set_opt("keyword", self.keyword.as_deref());
        params
    }
}

/// 账户与用户 API
pub struct AccountApi<'a> {
    client: &'a CloudClient,
}

impl<'a> AccountApi<'a> {
    /// 创建新的账户 API 实例
    pub(crate) fn new(client: &'a CloudClient) -> Self {
        Self { client }
    }

    /// 列出账户
    pub async fn list_accounts(&self, options: ListAccountsOptions) -> Result<Vec<Account>> {
        info!("获取账户列表");
        self.client
            .list("listAccounts", &options.to_params(), "account")
            .await
    }

    /// 按 ID 获取账户
    pub async fn get_account(&self, id: &str) -> Result<Option<Account>> {
        info!("获取账户详情: {}", id);
        let accounts = self
            .client
            .list::<Account>("listAccounts", &ListAccountsOptions::default().with_id(id).to_params(), "account")
            .await?;
        Ok(accounts.into_iter().next())
    }

    /// 列出用户
    pub async fn list_users(&self, options: ListUsersOptions) -> Result<Vec<User>> {
        info!("获取用户列表");
        self.client
            .list("listUsers", &options.to_params(), "user")
            .await
    }

    /// 按 ID 获取用户
    pub async fn get_user(&self, id: &str) -> Result<Option<User>> {
        info!("获取用户详情: {}", id);
        let users = self
            .client
            .list::<User>("listUsers", &ListUsersOptions::default().with_id(id).to_params(), "user")
            .await?;
        Ok(users.into_iter().next())
    }
}
