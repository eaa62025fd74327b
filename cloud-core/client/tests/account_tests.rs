//! 账户与用户接口测试

mod common;

use chrono::DateTime;
use cloud_client::{
    Account, AccountState, AccountType, ListAccountsOptions, ListUsersOptions, User, UserState,
};
use common::{command, json_response, setup};
use wiremock::matchers::query_param;

fn ts(s: &str) -> Option<DateTime<chrono::FixedOffset>> {
    Some(DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z").unwrap())
}

#[tokio::test]
async fn test_list_accounts() {
    let (server, client) = setup().await;

    command("listAccounts")
        .respond_with(json_response(200, include_str!("fixtures/list_accounts.json")))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = client
        .account()
        .list_accounts(ListAccountsOptions::default())
        .await
        .unwrap();

    // 重复的 505 被去重
    assert_eq!(accounts.len(), 2);

    let expected = Account {
        id: "505".into(),
        name: "jclouds".into(),
        account_type: AccountType::User,
        domain_id: "457".into(),
        domain: "AA000062-jclouds-dev".into(),
        network_domain: None,
        received_bytes: 318211,
        sent_bytes: 23236,
        vm_limit: None,
        vm_total: 2,
        vm_available: None,
        ip_limit: None,
        ip_total: 0,
        ip_available: None,
        volume_limit: None,
        volume_total: 2,
        volume_available: None,
        snapshot_limit: None,
        snapshot_total: 0,
        snapshot_available: None,
        template_limit: None,
        template_total: 0,
        template_available: None,
        vm_stopped: 0,
        vm_running: 2,
        state: AccountState::Enabled,
        users: vec![User {
            id: "505".into(),
            username: "jclouds".into(),
            first_name: Some("Adrian".into()),
            last_name: Some("Cole".into()),
            email: Some("adrian@jclouds.org".into()),
            created: ts("2011-12-14T15:18:48-0800"),
            state: UserState::Enabled,
            account: "jclouds".into(),
            account_type: AccountType::User,
            domain_id: "457".into(),
            domain: "AA000062-jclouds-dev".into(),
            api_key: Some("APIKEY".into()),
            secret_key: Some("SECRETKEY".into()),
            timezone: None,
        }],
    };
    assert_eq!(accounts[0], expected);
    assert!(accounts[0].is_vm_unlimited());
}

#[tokio::test]
async fn test_list_accounts_numeric_quota_strings() {
    let (server, client) = setup().await;

    command("listAccounts")
        .respond_with(json_response(200, include_str!("fixtures/list_accounts.json")))
        .mount(&server)
        .await;

    let accounts = client
        .account()
        .list_accounts(ListAccountsOptions::default())
        .await
        .unwrap();
    let ops = accounts.iter().find(|a| a.id == "506").unwrap();

    assert_eq!(ops.account_type, AccountType::DomainAdmin);
    assert_eq!(ops.vm_limit, Some(20));
    assert_eq!(ops.vm_total, 5);
    assert_eq!(ops.vm_available, Some(15));
    assert_eq!(ops.ip_limit, Some(10));
    assert_eq!(ops.volume_limit, None);
    // 缺失的用量字段为 0
    assert_eq!(ops.volume_total, 0);
    assert_eq!(ops.received_bytes, 0);
    // 大小写不敏感
    assert_eq!(ops.state, AccountState::Locked);
    assert!(ops.users.is_empty());
}

#[tokio::test]
async fn test_list_accounts_numeric_ids() {
    let (server, client) = setup().await;

    command("listAccounts")
        .respond_with(json_response(
            200,
            include_str!("fixtures/list_accounts_numeric_ids.json"),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let accounts = client
        .account()
        .list_accounts(ListAccountsOptions::default())
        .await
        .unwrap();

    // 数字 ID 与字符串 ID 解析结果一致，去重同样生效
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].id, "505");
    assert_eq!(accounts[0].domain_id, "457");
    assert_eq!(accounts[0].users[0].id, "505");
    assert_eq!(accounts[0].users[0].domain_id, "457");
    assert_eq!(accounts[1].id, "506");

    let (server, client) = setup().await;
    command("listAccounts")
        .respond_with(json_response(200, include_str!("fixtures/list_accounts.json")))
        .mount(&server)
        .await;
    let with_string_ids = client
        .account()
        .list_accounts(ListAccountsOptions::default())
        .await
        .unwrap();
    assert_eq!(accounts, with_string_ids);
}

#[tokio::test]
async fn test_get_account_by_id() {
    let (server, client) = setup().await;

    command("listAccounts")
        .and(query_param("id", "505"))
        .respond_with(json_response(200, include_str!("fixtures/list_accounts.json")))
        .expect(1)
        .mount(&server)
        .await;

    let account = client.account().get_account("505").await.unwrap().unwrap();
    assert_eq!(account.name, "jclouds");
}

#[tokio::test]
async fn test_list_users_filtered() {
    let (server, client) = setup().await;

    command("listUsers")
        .and(query_param("accounttype", "1"))
        .respond_with(json_response(200, include_str!("fixtures/list_users.json")))
        .expect(1)
        .mount(&server)
        .await;

    let users = client
        .account()
        .list_users(ListUsersOptions::default().with_account_type(AccountType::Admin))
        .await
        .unwrap();

    assert_eq!(
        users,
        vec![User {
            id: "1".into(),
            username: "admin".into(),
            first_name: Some("admin".into()),
            last_name: Some("cloud".into()),
            email: None,
            created: ts("2012-06-05T16:31:47-0700"),
            state: UserState::Enabled,
            account: "admin".into(),
            account_type: AccountType::Admin,
            domain_id: "1".into(),
            domain: "ROOT".into(),
            api_key: None,
            secret_key: None,
            timezone: Some("America/Los_Angeles".into()),
        }]
    );
}

#[tokio::test]
async fn test_get_user_missing() {
    let (server, client) = setup().await;

    command("listUsers")
        .and(query_param("id", "42"))
        .respond_with(json_response(200, r#"{"listusersresponse":{}}"#))
        .mount(&server)
        .await;

    assert_eq!(client.account().get_user("42").await.unwrap(), None);
}
