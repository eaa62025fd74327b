//! 客户端配置管理
//!
//! 支持从多个源加载配置:
//! - 环境变量 (优先级最高)
//! - 配置文件 (TOML/YAML/JSON)
//! - 默认值 (优先级最低)
//!
//! 配置文件搜索路径 (按优先级):
//! 1. `CLOUD_CONFIG` 环境变量指定的路径
//! 2. `./cloud.toml` / `./cloud.yaml` / `./cloud.json` (当前目录)
//! 3. `~/.config/cloudctl/config.toml` (用户配置目录)
//! 4. `/etc/cloudctl/config.toml` (系统配置目录)

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CloudError, Result};
use crate::poll::PollConfig;

/// 客户端配置
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API 端点，如 `http://mgmt:8080/client/api`
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub secret_key: String,

    /// 连接超时（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// 请求超时（秒）
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// 是否验证 SSL 证书
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,

    /// 签名有效期（秒），设置后启用签名版本 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_expiry: Option<u64>,

    /// 异步任务轮询配置
    #[serde(default)]
    pub poll: PollConfig,
}

fn default_connect_timeout() -> u64 {
    10
}
fn default_request_timeout() -> u64 {
    30
}
fn default_verify_ssl() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            secret_key: String::new(),
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            verify_ssl: default_verify_ssl(),
            signature_expiry: None,
            poll: PollConfig::default(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("secret_key", &"***")
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("verify_ssl", &self.verify_ssl)
            .field("signature_expiry", &self.signature_expiry)
            .field("poll", &self.poll)
            .finish()
    }
}

impl ClientConfig {
    /// 以端点和密钥对构造配置，其余取默认值
    pub fn new(endpoint: &str, api_key: &str, secret_key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            ..Default::default()
        }
    }

    /// 从多个源加载配置 (优先级: 环境变量 > 配置文件 > 默认值)
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                debug!("加载配置文件: {:?}", path);
                Self::load_from_file(&path)?
            }
            None => {
                debug!("未找到配置文件，使用默认配置");
                Self::default()
            }
        };

        config.apply_env_vars()?;
        Ok(config)
    }

    /// 从指定文件加载配置，格式由扩展名决定
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CloudError::ConfigError(format!("读取配置文件失败 {:?}: {}", path, e)))?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| CloudError::ConfigError(format!("解析 TOML 配置失败 {:?}: {}", path, e))),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| CloudError::ConfigError(format!("解析 YAML 配置失败 {:?}: {}", path, e))),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| CloudError::ConfigError(format!("解析 JSON 配置失败 {:?}: {}", path, e))),
            _ => Err(CloudError::ConfigError(format!(
                "不支持的配置文件格式: {:?}",
                path
            ))),
        }
    }

    /// 查找配置文件 (按优先级搜索)
    pub fn find_config_file() -> Option<PathBuf> {
        if let Ok(path) = env::var("CLOUD_CONFIG") {
            let p = PathBuf::from(path);
            if p.exists() {
                return Some(p);
            }
        }

        let mut candidates = vec![
            PathBuf::from("./cloud.toml"),
            PathBuf::from("./cloud.yaml"),
            PathBuf::from("./cloud.json"),
        ];

        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".config/cloudctl/config.toml"));
            candidates.push(home.join(".config/cloudctl/config.yaml"));
        }

        #[cfg(target_os = "linux")]
        candidates.push(PathBuf::from("/etc/cloudctl/config.toml"));

        candidates.into_iter().find(|p| p.exists())
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_vars(&mut self) -> Result<()> {
        if let Ok(endpoint) = env::var("CLOUD_API_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Ok(key) = env::var("CLOUD_API_KEY") {
            self.api_key = key;
        }
        if let Ok(secret) = env::var("CLOUD_SECRET_KEY") {
            self.secret_key = secret;
        }
        if let Ok(verify) = env::var("CLOUD_VERIFY_SSL") {
            self.verify_ssl = verify.parse().map_err(|_| {
                CloudError::ConfigError(format!("CLOUD_VERIFY_SSL 取值无效: {}", verify))
            })?;
        }
        if let Ok(timeout) = env::var("CLOUD_REQUEST_TIMEOUT") {
            self.request_timeout = timeout.parse().map_err(|_| {
                CloudError::ConfigError(format!("CLOUD_REQUEST_TIMEOUT 取值无效: {}", timeout))
            })?;
        }
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(CloudError::ConfigError("未配置 API 端点".to_string()));
        }

        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| CloudError::ConfigError(format!("API 端点无效 {}: {}", self.endpoint, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CloudError::ConfigError(format!(
                "API 端点协议不受支持: {}",
                url.scheme()
            )));
        }

        if self.api_key.is_empty() {
            return Err(CloudError::ConfigError("未配置 API Key".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(CloudError::ConfigError("未配置 Secret Key".to_string()));
        }
        if self.request_timeout == 0 {
            return Err(CloudError::ConfigError("请求超时必须大于 0".to_string()));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
