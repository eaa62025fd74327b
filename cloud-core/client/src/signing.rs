//! 请求签名
//!
//! 平台使用基于共享密钥的查询参数签名：
//!
//! 1. 参数按键名（不区分大小写）排序
//! 2. 每个值做 URL 编码（保留 RFC 3986 非保留字符，空格编码为 `%20`）
//! 3. 以 `key=value` 形式用 `&` 连接，整体转为小写
//! 4. 使用密钥计算 HMAC-SHA1，结果 Base64 编码即为签名
//!
//! 签名本身再次 URL 编码后以 `signature` 参数附加到查询串末尾。

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::{CloudError, Result};
use crate::models::de::TIMESTAMP_FORMAT;
use crate::params::Params;

type HmacSha1 = Hmac<Sha1>;

/// 请求签名器
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    secret_key: String,
    /// 设置后启用签名版本 3，并附加过期时间
    expiry: Option<Duration>,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("secret_key", &"***")
            .field("expiry", &self.expiry)
            .finish()
    }
}

impl RequestSigner {
    /// 创建签名器
    pub fn new(api_key: &str, secret_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            expiry: None,
        }
    }

    /// 启用带过期时间的签名（签名版本 3）
    pub fn with_expiry(mut self, expiry: Duration) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 为命令参数签名，返回可直接拼接到端点后的查询串
    ///
    /// 会补充 `command`、`apiKey`、`response=json`，启用过期签名时还会补充
    /// `signatureVersion` 与 `expires`。
    pub fn sign(&self, command: &str, params: &Params) -> Result<String> {
        self.sign_at(command, params, Utc::now())
    }

    /// 以指定时间为基准签名（过期时间由此计算）
    pub fn sign_at(&self, command: &str, params: &Params, now: DateTime<Utc>) -> Result<String> {
        let mut params = params.clone();
        params.set("command", command);
        params.set("apiKey", &self.api_key);
        params.set("response", "json");

        if let Some(expiry) = self.expiry {
            let expiry = chrono::Duration::from_std(expiry)
                .map_err(|e| CloudError::ConfigError(format!("签名过期时间无效: {}", e)))?;
            let expires = (now + expiry).format(TIMESTAMP_FORMAT).to_string();
            params.set("signatureVersion", "3");
            params.set("expires", &expires);
        }

        let query = canonical_query(&params);
        let signature = self.signature(&query.to_lowercase())?;

        Ok(format!("{}&signature={}", query, urlencoding::encode(&signature)))
    }

    /// 计算待签字符串的签名（Base64）
    pub fn signature(&self, string_to_sign: &str) -> Result<String> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| CloudError::ConfigError(format!("无效的密钥: {}", e)))?;
        mac.update(string_to_sign.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

/// 规范化查询串：按键名排序，值做 URL 编码
///
/// 键名本身不编码，平台的参数名只包含字母、数字与 `[].`。
pub fn canonical_query(params: &Params) -> String {
    let mut pairs: Vec<(&str, &str)> = params.iter().collect();
    pairs.sort_by(|a, b| {
        a.0.to_lowercase()
            .cmp(&b.0.to_lowercase())
            .then_with(|| a.0.cmp(b.0))
    });

    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // 固定的测试密钥对
    const API_KEY: &str =
        "miVr6X7u6bN_sdahOBpjNejPgEsT35eXq-jB8CG20YI3yaxXcgpyuaIRmFI_EJTVwZ0nUkkJbPmY3y2bciKwFQ";
    const SECRET_KEY: &str =
        "Lxx1DM40AjcXU_Lp3bd8JmddDeBMT4GXjd4UqHT-pEmmlO2vx3QW7PxL1JhLV9b6xG8ia_aRCDS-A98F8K5pFQ";

    #[test]
    fn test_canonical_query_sorted_and_encoded() {
        let mut params = Params::new();
        params.set("zoneId", "1");
        params.set("name", "my vm/1");
        params.set("Account", "admin");

        assert_eq!(
            canonical_query(&params),
            "Account=admin&name=my%20vm%2F1&zoneId=1"
        );
    }

    #[test]
    fn test_known_signature() {
        let signer = RequestSigner::new(API_KEY, SECRET_KEY);
        let string_to_sign = format!(
            "apikey={}&command=listusers&response=json",
            API_KEY.to_lowercase()
        );
        assert_eq!(
            signer.signature(&string_to_sign).unwrap(),
            "07PVD/VIa6Ss4IvOPH44tr52/c4="
        );
    }

    #[test]
    fn test_sign_appends_encoded_signature() {
        let signer = RequestSigner::new(API_KEY, SECRET_KEY);
        let query = signer.sign("listUsers", &Params::new()).unwrap();

        assert_eq!(
            query,
            format!(
                "apiKey={}&command=listUsers&response=json&signature=07PVD%2FVIa6Ss4IvOPH44tr52%2Fc4%3D",
                API_KEY
            )
        );
    }

    #[test]
    fn test_sign_with_expiry() {
        let signer = RequestSigner::new("key", "secret").with_expiry(Duration::from_secs(600));
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let query = signer.sign_at("listZones", &Params::new(), now).unwrap();

        assert!(query.contains("expires=2024-01-01T12%3A10%3A00%2B0000"));
        assert!(query.contains("signatureVersion=3"));
        assert!(query.contains("&signature="));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let signer = RequestSigner::new("key", "super-secret");
        assert!(!format!("{:?}", signer).contains("super-secret"));
    }
}
