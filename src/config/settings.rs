// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::domain::models::scraper_config::ScraperConfig;

const DEFAULT_BASE_URL: &str = "https://www.instagram.com/api/v1/users/web_profile_info/";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse instagram.headers: {0}")]
    InvalidHeaders(String),

    #[error("Invalid instagram.base_url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// Instagram 上游配置
    pub instagram: InstagramSettings,
    /// 出站 HTTP 客户端配置
    pub http: HttpClientSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// Instagram 上游配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramSettings {
    /// 上游接口地址，为空表示未配置
    pub base_url: String,
    /// User-Agent 请求头
    pub user_agent: String,
    /// 额外请求头，JSON 对象字符串
    pub headers: Option<String>,
    /// 会话 ID，设置后作为 `sessionid` cookie 发送
    pub session_id: Option<String>,
    /// 默认返回条数，无法解析时记为 0，请求时回退到 12
    #[serde(deserialize_with = "lenient_limit")]
    pub default_limit: i64,
}

/// 出站 HTTP 客户端配置设置
#[derive(Debug, Deserialize)]
pub struct HttpClientSettings {
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 最大重定向次数
    pub max_redirects: usize,
}

/// 指标导出配置设置
#[derive(Debug, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `FEEDRS` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("instagram.base_url", DEFAULT_BASE_URL)?
            .set_default("instagram.user_agent", DEFAULT_USER_AGENT)?
            .set_default("instagram.default_limit", 12)?
            .set_default("http.timeout_secs", 10)?
            .set_default("http.max_redirects", 3)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("FEEDRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl InstagramSettings {
    /// 构造抓取配置
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ScraperConfig))` - 配置完整
    /// * `Ok(None)` - 未配置上游地址
    /// * `Err(SettingsError)` - 上游地址或请求头无效
    pub fn scraper_config(&self) -> Result<Option<ScraperConfig>, SettingsError> {
        let raw_url = self.base_url.trim();
        if raw_url.is_empty() {
            return Ok(None);
        }

        let base_url = Url::parse(raw_url).map_err(|e| SettingsError::InvalidBaseUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut headers = HashMap::new();
        insert_header(&mut headers, "User-Agent".to_string(), self.user_agent.clone());
        for (k, v) in parse_headers(self.headers.as_deref())? {
            insert_header(&mut headers, k, v);
        }

        if let Some(session_id) = self.session_id.as_deref().filter(|s| !s.is_empty()) {
            insert_header(
                &mut headers,
                "Cookie".to_string(),
                format!("sessionid={}", session_id),
            );
        }

        Ok(Some(ScraperConfig::new(
            base_url,
            headers,
            self.default_limit,
        )))
    }
}

/// 宽松解析默认条数
///
/// 环境变量中的值是字符串；非数字、布尔或其他类型都记为 0，
/// 由 [`ScraperConfig::effective_limit`] 回退到默认值
fn lenient_limit<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let from_float = |f: f64| f.is_finite().then(|| f.trunc() as i64);
    let limit = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(from_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        _ => None,
    };
    Ok(limit.unwrap_or(0))
}

/// 请求头名称大小写不敏感，后写入的覆盖先写入的
fn insert_header(headers: &mut HashMap<String, String>, name: String, value: String) {
    headers.retain(|k, _| !k.eq_ignore_ascii_case(&name));
    headers.insert(name, value);
}

/// 解析额外请求头
///
/// 必须是 JSON 对象，非字符串的值被忽略
fn parse_headers(raw: Option<&str>) -> Result<HashMap<String, String>, SettingsError> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(HashMap::new());
    };

    let parsed: Value =
        serde_json::from_str(raw).map_err(|e| SettingsError::InvalidHeaders(e.to_string()))?;
    let Value::Object(map) = parsed else {
        return Err(SettingsError::InvalidHeaders(
            "headers must be a JSON object string".to_string(),
        ));
    };

    Ok(map
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
