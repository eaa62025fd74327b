//! 测试公共模块：模拟平台端点与客户端构造

#![allow(dead_code)]

use std::time::Duration;

use cloud_client::{ClientConfig, CloudClient, PollPolicy};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const API_PATH: &str = "/client/api";

/// 启动模拟端点并创建指向它的客户端
pub async fn setup() -> (MockServer, CloudClient) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let config = ClientConfig::new(
        &format!("{}{}", server.uri(), API_PATH),
        "test-api-key",
        "test-secret-key",
    );
    let client = CloudClient::new(config)
        .unwrap()
        .with_poll_policy(fast_policy());

    (server, client)
}

/// 测试用的快速轮询策略
pub fn fast_policy() -> PollPolicy {
    PollPolicy::fixed(Duration::from_millis(10), Duration::from_secs(5))
}

/// 匹配指定命令的签名 GET 请求
pub fn command(name: &str) -> MockBuilder {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("command", name))
        .and(query_param("apiKey", "test-api-key"))
        .and(query_param("response", "json"))
}

/// 返回 JSON 正文的响应
pub fn json_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json")
}
