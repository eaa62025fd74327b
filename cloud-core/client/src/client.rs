//! 云平台客户端核心实现

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{
    AccountApi, AsyncJobApi, NetworkApi, OfferingApi, SnapshotApi, TagApi, TemplateApi,
    VirtualMachineApi, VolumeApi, ZoneApi,
};
use crate::config::ClientConfig;
use crate::error::{CloudError, Result};
use crate::models::{dedup_by_identity, ApiErrorResponse, AsyncCreateResponse, Identified};
use crate::params::Params;
use crate::poll::PollPolicy;
use crate::signing::RequestSigner;

/// 云平台客户端
///
/// 不持有可变状态，可放入 `Arc` 在多个任务间共享。
#[derive(Debug)]
pub struct CloudClient {
    /// API 端点
    endpoint: String,

    /// HTTP 客户端
    http_client: Client,

    /// 请求签名器
    signer: RequestSigner,

    /// 默认轮询策略
    poll_policy: PollPolicy,
}

impl CloudClient {
    /// 创建新的云平台客户端
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| CloudError::HttpError(e.to_string()))?;

        let mut signer = RequestSigner::new(&config.api_key, &config.secret_key);
        if let Some(secs) = config.signature_expiry {
            signer = signer.with_expiry(Duration::from_secs(secs));
        }

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches(['?', '/']).to_string(),
            http_client,
            signer,
            poll_policy: config.poll.policy(),
        })
    }

    /// 按环境变量与配置文件加载配置并创建客户端
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::load()?)
    }

    /// 替换默认轮询策略
    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = policy;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 默认轮询策略
    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll_policy
    }

    /// 获取账户与用户 API
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// 获取虚拟机管理 API
    pub fn virtual_machine(&self) -> VirtualMachineApi<'_> {
        VirtualMachineApi::new(self)
    }

    /// 获取存储卷管理 API
    pub fn volume(&self) -> VolumeApi<'_> {
        VolumeApi::new(self)
    }

    /// 获取网络管理 API
    pub fn network(&self) -> NetworkApi<'_> {
        NetworkApi::new(self)
    }

    /// 获取模板 API
    pub fn template(&self) -> TemplateApi<'_> {
        TemplateApi::new(self)
    }

    /// 获取计算/磁盘方案 API
    pub fn offering(&self) -> OfferingApi<'_> {
        OfferingApi::new(self)
    }

    /// 获取快照管理 API
    pub fn snapshot(&self) -> SnapshotApi<'_> {
        SnapshotApi::new(self)
    }

    /// 获取资源标签 API
    pub fn tag(&self) -> TagApi<'_> {
        TagApi::new(self)
    }

    /// 获取区域 API
    pub fn zone(&self) -> ZoneApi<'_> {
        ZoneApi::new(self)
    }

    /// 获取异步任务 API
    pub fn async_job(&self) -> AsyncJobApi<'_> {
        AsyncJobApi::new(self)
    }

    /// 发送签名请求，返回拆开信封后的响应体
    pub(crate) async fn request_raw(&self, command: &str, params: &Params) -> Result<Value> {
        let query = self.signer.sign(command, params)?;
        let url = format!("{}?{}", self.endpoint, query);

        let unsigned = query.split("&signature=").next().unwrap_or_default();
        debug!("云平台 API 请求: {} {}?{}", command, self.endpoint, unsigned);

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CloudError::HttpError(e.to_string()))?;

        if !status.is_success() {
            warn!("API 请求失败: {} {} - {}", command, status, body);
            return Err(CloudError::ApiError {
                status: status.as_u16(),
                error: decode_error_response(&body),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| CloudError::ParseError(format!("{} 响应不是合法 JSON: {}", command, e)))?;

        let (key, inner) = unwrap_envelope(command, value)?;
        if key == "errorresponse" {
            let error = serde_json::from_value::<ApiErrorResponse>(inner).ok();
            warn!("API 请求失败: {} {} - {}", command, status, body);
            return Err(CloudError::ApiError {
                status: status.as_u16(),
                error,
                body,
            });
        }

        Ok(inner)
    }

    /// 发送请求并将信封内容解析为 `R`
    pub(crate) async fn request<R: DeserializeOwned>(&self, command: &str, params: &Params) -> Result<R> {
        let value = self.request_raw(command, params).await?;
        serde_json::from_value(value)
            .map_err(|e| CloudError::ParseError(format!("{} 响应解析失败: {}", command, e)))
    }

    /// 发送请求并提取信封中 `key` 对应的对象
    pub(crate) async fn request_entity<R: DeserializeOwned>(
        &self,
        command: &str,
        params: &Params,
        key: &str,
    ) -> Result<R> {
        let mut value = self.request_raw(command, params).await?;
        let entity = value
            .get_mut(key)
            .map(Value::take)
            .filter(|v| !v.is_null())
            .ok_or_else(|| CloudError::ParseError(format!("{} 响应缺少 {}", command, key)))?;

        serde_json::from_value(entity)
            .map_err(|e| CloudError::ParseError(format!("{} 响应 {} 解析失败: {}", command, key, e)))
    }

    /// 列表请求：提取 `item_key` 下的数组，缺失视为空列表，并按身份去重
    pub(crate) async fn list<T: DeserializeOwned + Identified>(
        &self,
        command: &str,
        params: &Params,
        item_key: &str,
    ) -> Result<Vec<T>> {
        let mut value = self.request_raw(command, params).await?;
        let items = match value.get_mut(item_key).map(Value::take) {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(items) => items,
        };

        let items: Vec<T> = serde_json::from_value(items)
            .map_err(|e| CloudError::ParseError(format!("{} 列表解析失败: {}", command, e)))?;

        Ok(dedup_by_identity(items))
    }

    /// 异步命令：返回任务接受响应
    pub(crate) async fn request_async(&self, command: &str, params: &Params) -> Result<AsyncCreateResponse> {
        self.request(command, params).await
    }
}

/// 拆开 `{"<command>response": {...}}` 信封
fn unwrap_envelope(command: &str, value: Value) -> Result<(String, Value)> {
    let Value::Object(map) = value else {
        return Err(CloudError::ParseError(format!("{} 响应不是 JSON 对象", command)));
    };

    let expected = format!("{}response", command.to_lowercase());
    let key = if map.contains_key(&expected) {
        Some(expected)
    } else if map.len() == 1 {
        map.keys().next().cloned()
    } else {
        map.keys().find(|k| k.ends_with("response")).cloned()
    };

    key.and_then(|k| {
        let mut map = map;
        map.remove(&k).map(|v| (k, v))
    })
    .ok_or_else(|| CloudError::ParseError(format!("{} 响应缺少信封对象", command)))
}

/// 从错误响应体中解析平台错误对象
fn decode_error_response(body: &str) -> Option<ApiErrorResponse> {
    let value: Value = serde_json::from_str(body).ok()?;
    let Value::Object(map) = value else {
        return None;
    };

    map.into_iter()
        .filter(|(k, _)| k.ends_with("response"))
        .find_map(|(_, v)| serde_json::from_value::<ApiErrorResponse>(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = CloudClient::new(ClientConfig::new(
            "http://192.168.1.11:8080/client/api/",
            "key",
            "secret",
        ))
        .unwrap();
        assert_eq!(client.endpoint(), "http://192.168.1.11:8080/client/api");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CloudClient>();
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let result = CloudClient::new(ClientConfig::new("", "key", "secret"));
        assert!(matches!(result, Err(CloudError::ConfigError(_))));
    }

    #[test]
    fn test_unwrap_envelope() {
        let (key, inner) = unwrap_envelope(
            "listZones",
            json!({ "listzonesresponse": { "count": 1, "zone": [] } }),
        )
        .unwrap();
        assert_eq!(key, "listzonesresponse");
        assert_eq!(inner["count"], 1);

        // 信封键与命令不一致时取唯一对象
        let (key, _) = unwrap_envelope("deployVirtualMachine", json!({ "deployvmresponse": {} })).unwrap();
        assert_eq!(key, "deployvmresponse");

        assert!(unwrap_envelope("listZones", json!([])).is_err());
        assert!(unwrap_envelope("listZones", json!({})).is_err());
    }

    #[test]
    fn test_decode_error_response() {
        let body = r#"{"listvolumesresponse":{"errorcode":431,"cserrorcode":9999,"errortext":"Unable to execute API command"}}"#;
        let error = decode_error_response(body).unwrap();
        assert_eq!(error.error_code, 431);
        assert_eq!(error.cs_error_code, Some(9999));
        assert_eq!(error.error_text, "Unable to execute API command");

        assert!(decode_error_response("<html>bad gateway</html>").is_none());
    }
}
