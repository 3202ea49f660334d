use super::error::{CatalogError, CatalogResult};
use crate::catalog::UnresolvedPolicy;
use std::fmt;
use std::str::FromStr;

/// Published sheet export used when the remote origin is enabled
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR2fCcZ6ISWdh44AkDlFQKN9SFH8VRu0y8uBZaRXRnai2Whvp3HT7eYK7VMsYTUZwljZJ19JefWPLef/pub?output=csv";

/// Catalog configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | CATALOG_USE_REMOTE_SHEET | false | 使用远程表格导出而不是本地文件 |
/// | CATALOG_DATA_DIR | data | 本地 CSV 目录 |
/// | CATALOG_SHEET_URL | [`DEFAULT_SHEET_URL`] | 远程导出地址 |
/// | CATALOG_REQUEST_TIMEOUT_MS | 30000 | 远程请求超时(毫秒) |
/// | CATALOG_UNRESOLVED_POLICY | drop | drop / reject |
/// | CATALOG_WHATSAPP_NUMBER | 244923259580 | 请求接收号码 |
/// | CATALOG_CURRENCY | AOA | 货币后缀 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (可选) |
///
/// # 示例
///
/// ```ignore
/// CATALOG_USE_REMOTE_SHEET=true cargo run -- list --search sala
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin flag: remote sheet export when true, local files otherwise
    pub use_remote_sheet: bool,
    pub data_dir: String,
    pub sheet_url: String,
    pub request_timeout_ms: u64,
    pub unresolved_policy: UnresolvedPolicy,
    pub whatsapp_number: String,
    pub currency: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// Unset variables keep their defaults; a set but invalid value is a
    /// [`CatalogError::Config`].
    pub fn from_env() -> CatalogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup (environment, `.env` map, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("CATALOG_USE_REMOTE_SHEET") {
            config.use_remote_sheet = parse_value("CATALOG_USE_REMOTE_SHEET", &v)?;
        }
        if let Some(v) = lookup("CATALOG_DATA_DIR") {
            config.data_dir = v;
        }
        if let Some(v) = lookup("CATALOG_SHEET_URL") {
            config.sheet_url = v;
        }
        if let Some(v) = lookup("CATALOG_REQUEST_TIMEOUT_MS") {
            config.request_timeout_ms = parse_value("CATALOG_REQUEST_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("CATALOG_UNRESOLVED_POLICY") {
            config.unresolved_policy = v.parse()?;
        }
        if let Some(v) = lookup("CATALOG_WHATSAPP_NUMBER") {
            config.whatsapp_number = v;
        }
        if let Some(v) = lookup("CATALOG_CURRENCY") {
            config.currency = v;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        config.log_dir = lookup("LOG_DIR").filter(|d| !d.is_empty());

        Ok(config)
    }

    /// Default configuration rooted at `data_dir`
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, use_remote_sheet: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            use_remote_sheet,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_remote_sheet: false,
            data_dir: "data".into(),
            sheet_url: DEFAULT_SHEET_URL.into(),
            request_timeout_ms: 30000,
            unresolved_policy: UnresolvedPolicy::default(),
            whatsapp_number: "244923259580".into(),
            currency: "AOA".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

fn parse_value<T>(key: &str, raw: &str) -> CatalogResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CatalogError::Config(format!("{}='{}': {}", key, raw, e)))
}
