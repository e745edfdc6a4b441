use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Photo service access key (may be empty - this is a fact, not an error)
    /// 图片服务访问密钥（可能为空）
    pub access_key: String,

    /// Photo service base URL (empty means "not configured")
    pub api_url: String,

    /// Number of photos requested by a random fetch (0 means "not configured")
    pub random_count: u32,

    /// Page size of a search (0 means "not configured")
    pub per_page: u32,

    /// Directory downloaded photos are written to (no existence check)
    pub download_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            access_key: Self::read_str(toml_value, "unsplash", "access_key").to_string(),
            api_url: Self::read_str(toml_value, "unsplash", "api_url").to_string(),
            random_count: Self::read_u32(toml_value, "session", "random_count"),
            per_page: Self::read_u32(toml_value, "session", "per_page"),
            download_dir: PathBuf::from(Self::read_str(toml_value, "download", "directory")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            access_key: String::new(),
            api_url: String::new(),
            random_count: 0,
            per_page: 0,
            download_dir: PathBuf::new(),
        }
    }

    fn read_str<'a>(toml_value: &'a toml::Value, section: &str, key: &str) -> &'a str {
        toml_value
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }

    fn read_u32(toml_value: &toml::Value, section: &str, key: &str) -> u32 {
        toml_value
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_integer())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    }
}
