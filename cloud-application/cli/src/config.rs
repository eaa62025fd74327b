//! CLI 配置管理
//!
//! 客户端连接参数与命令行默认值共用一个配置文件：
//!
//! ```toml
//! endpoint = "http://mgmt:8080/client/api"
//! api_key = "..."
//! secret_key = "..."
//!
//! [cli]
//! format = "table"
//! zone = "1"
//! ```
//!
//! 顶层字段由 `ClientConfig` 解析，`[cli]` 段只影响命令行行为。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cloud_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// 命令行默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliSettings {
    /// 默认输出格式
    #[serde(default = "default_format")]
    pub format: String,

    /// 默认区域 ID
    #[serde(default)]
    pub zone: Option<String>,
}

fn default_format() -> String {
    "table".to_string()
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            zone: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CliSection {
    #[serde(default)]
    cli: CliSettings,
}

/// CLI 配置
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub client: ClientConfig,
    pub settings: CliSettings,
    /// 实际加载的配置文件
    pub source: Option<PathBuf>,
}

impl CliConfig {
    /// 加载配置
    ///
    /// 指定路径时只读取该文件，否则按客户端库的搜索顺序查找；
    /// 两种情况下环境变量都会覆盖文件中的连接参数。
    pub fn load(path: Option<&str>) -> Result<Self> {
        let source = match path {
            Some(p) => {
                let expanded = PathBuf::from(shellexpand::tilde(p).as_ref());
                if !expanded.exists() {
                    anyhow::bail!("配置文件不存在: {:?}", expanded);
                }
                Some(expanded)
            }
            None => ClientConfig::find_config_file(),
        };

        let (mut client, settings) = match &source {
            Some(p) => (
                ClientConfig::load_from_file(p)
                    .with_context(|| format!("加载客户端配置失败: {:?}", p))?,
                Self::load_settings(p)?,
            ),
            None => (ClientConfig::default(), CliSettings::default()),
        };

        client.apply_env_vars().context("环境变量配置无效")?;

        Ok(Self {
            client,
            settings,
            source,
        })
    }

    /// 读取 `[cli]` 段，格式由扩展名决定
    fn load_settings(path: &Path) -> Result<CliSettings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        let section: CliSection = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("解析配置文件失败: {:?}", path))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("解析配置文件失败: {:?}", path))?,
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("解析配置文件失败: {:?}", path))?,
            _ => anyhow::bail!("不支持的配置文件格式: {:?}", path),
        };

        Ok(section.cli)
    }

    /// 默认用户配置文件路径
    pub fn user_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("无法获取用户主目录")?;
        Ok(home.join(".config").join("cloudctl").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_settings() {
        let settings = CliSettings::default();
        assert_eq!(settings.format, "table");
        assert_eq!(settings.zone, None);
    }

    #[test]
    fn test_load_toml_with_cli_section() {
        let file = write_config(
            ".toml",
            r#"
endpoint = "http://mgmt:8080/client/api"
api_key = "key"
secret_key = "secret"

[cli]
format = "json"
zone = "zone-1"
"#,
        );

        let settings = CliConfig::load_settings(file.path()).unwrap();
        assert_eq!(settings.format, "json");
        assert_eq!(settings.zone.as_deref(), Some("zone-1"));

        let client = ClientConfig::load_from_file(file.path()).unwrap();
        assert_eq!(client.endpoint, "http://mgmt:8080/client/api");
        assert_eq!(client.api_key, "key");
    }

    #[test]
    fn test_load_yaml_without_cli_section() {
        let file = write_config(
            ".yaml",
            "endpoint: http://mgmt:8080/client/api\napi_key: key\nsecret_key: secret\n",
        );

        let settings = CliConfig::load_settings(file.path()).unwrap();
        assert_eq!(settings, CliSettings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".ini", "endpoint=http://x");
        assert!(CliConfig::load_settings(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_path() {
        let result = CliConfig::load(Some("/nonexistent/cloudctl.toml"));
        assert!(result.is_err());
    }
}
