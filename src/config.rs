use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// 覆盖数据库地址的环境变量
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// 服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 连接字符串，例如 `sqlite:test.db`
    pub url: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 是否写入文件日志
    pub file_output: bool,
    /// 日志目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8081,
            timeout_seconds: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:test.db".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: false,
            log_dir: PathBuf::from("./logs"),
            file_prefix: "product-server".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))
    }

    /// 用环境变量覆盖数据库地址
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }
        self.http.socket_addr()?;

        if self.database.url.is_empty() {
            return Err(ConfigError::Validation("数据库地址不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }
        if self.logging.file_output && self.logging.file_prefix.is_empty() {
            return Err(ConfigError::Validation("日志文件前缀不能为空".to_string()));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并应用环境变量覆盖
///
/// 日志系统此时尚未初始化，返回值中带上配置来源供调用方记录。
pub fn load_config() -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    let config_paths = ["config.toml", "./config/config.toml"];

    let mut loaded = None;
    for path in &config_paths {
        if Path::new(path).exists() {
            loaded = Some((AppConfig::load_from_file(path)?, Some(PathBuf::from(path))));
            break;
        }
    }

    let (mut config, source) = loaded.unwrap_or_else(|| (AppConfig::default(), None));
    config.apply_env_overrides();
    Ok((config, source))
}

/// 记录配置来源
pub fn log_config_source(source: Option<&Path>) {
    match source {
        Some(path) => info!("从配置文件加载: {}", path.display()),
        None => info!("未找到配置文件，使用默认配置"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// 串行化对进程环境变量的读写
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.http.port, 8081);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        config.http.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = AppConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.database.url.clear();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.http.bind_address = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.http.port = 9090;
        config.database.url = "sqlite:products.db".to_string();
        config.save_to_file(&config_path).unwrap();

        let loaded = AppConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 9090);
        assert_eq!(loaded.database.url, "sqlite:products.db");
        assert_eq!(loaded.logging.file_prefix, config.logging.file_prefix);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[http]\nport = 8000\n").unwrap();

        let loaded = AppConfig::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 8000);
        assert_eq!(loaded.http.timeout_seconds, 30);
        assert_eq!(loaded.database.url, "sqlite:test.db");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[http\nport = ").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&config_path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            AppConfig::load_from_file(dir.path().join("absent.toml")),
            Err(ConfigError::FileRead(_))
        ));
    }

    #[test]
    fn test_database_url_env_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = std::env::var(DATABASE_URL_ENV).ok();

        std::env::set_var(DATABASE_URL_ENV, "sqlite:override.db");
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.database.url, "sqlite:override.db");

        // 空值不覆盖
        std::env::set_var(DATABASE_URL_ENV, "");
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        assert_eq!(config.database.url, "sqlite:test.db");

        std::env::remove_var(DATABASE_URL_ENV);
        let mut config = AppConfig::default();
        config.database.url = "sqlite:from-file.db".to_string();
        config.apply_env_overrides();
        assert_eq!(config.database.url, "sqlite:from-file.db");

        match previous {
            Some(value) => std::env::set_var(DATABASE_URL_ENV, value),
            None => std::env::remove_var(DATABASE_URL_ENV),
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 8081);
    }
}
