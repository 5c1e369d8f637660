//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `DATABASE_URL` / `PORT`
//! 2. `HOLOCRON_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 部署平台约定的无前缀环境变量
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub database_url: Option<String>,
    pub port: Option<String>,
}

impl EnvOverrides {
    /// 从进程环境读取
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").ok(),
            port: std::env::var("PORT").ok(),
        }
    }
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `DATABASE_URL=sqlite:data/holocron.db?mode=rwc`
/// - `PORT=8080`
/// - `HOLOCRON_SERVER__HOST=127.0.0.1`
/// - `HOLOCRON_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None, &EnvOverrides::from_env())
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `overrides` - `DATABASE_URL` / `PORT` 的值
pub fn load_config_from_path(
    config_path: Option<&Path>,
    overrides: &EnvOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("database.max_connections", 5)?
        .set_default("log.level", "info")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，例如 HOLOCRON_SERVER__HOST=127.0.0.1
    builder = builder.add_source(
        Environment::with_prefix("HOLOCRON")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 无前缀环境变量（最高优先级）
    builder = builder
        .set_override_option("database.url", overrides.database_url.clone())?
        .set_override_option("server.port", overrides.port.clone())?;

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "Database max connections cannot be 0".to_string(),
        ));
    }

    if config.database.url.as_deref().is_some_and(str::is_empty) {
        return Err(ConfigError::ValidationError(
            "Database URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    match &config.database.url {
        Some(_) => tracing::info!("Database: from DATABASE_URL"),
        None => tracing::info!("Database: {} (default)", config.database.database_url()),
    }
    tracing::info!("Database Max Connections: {}", config.database.max_connections);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_database_url() {
        let mut config = AppConfig::default();
        config.database.url = Some(String::new());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_file_values_are_loaded() {
        let file = config_file(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [log]
            level = "debug"
            "#,
        );

        let config = load_config_from_path(Some(file.path()), &EnvOverrides::default()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_unprefixed_env_overrides_file() {
        let file = config_file(
            r#"
            [server]
            port = 8080

            [database]
            url = "sqlite:from-file.db"
            "#,
        );
        let overrides = EnvOverrides {
            database_url: Some("postgres://db/catalog".to_string()),
            port: Some("4000".to_string()),
        };

        let config = load_config_from_path(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(
            config.database.database_url(),
            "postgresql://db/catalog"
        );
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let file = config_file("");
        let overrides = EnvOverrides {
            database_url: None,
            port: Some("not-a-port".to_string()),
        };
        assert!(load_config_from_path(Some(file.path()), &overrides).is_err());
    }
}
