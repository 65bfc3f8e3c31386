use anyhow::Context;
use contracts::enums::viewer_role::ViewerRole;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub board: BoardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid server address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Каталог логов; относительный путь считается от каталога исполняемого файла
    pub dir: String,
    /// Фильтр по умолчанию, если не задан RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "logs".to_string(),
            level: "info,tower_http=warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoardConfig {
    /// Роль, если запрос её не передал
    pub default_role: ViewerRole,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_role: ViewerRole::Seller,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[logging]
dir = "logs"
level = "info,tower_http=warn"

[board]
default_role = "seller"
"#;

/// Откуда взята конфигурация
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Embedded => write!(f, "embedded defaults"),
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    toml::from_str(contents).context("Failed to parse config.toml")
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Вызывается до инициализации логирования, поэтому источник
/// возвращается вызывающей стороне, а не пишется в лог здесь.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(config_path) = exe_dir().map(|dir| dir.join("config.toml")) {
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read {}", config_path.display()))?;
            let config = parse_config(&contents)?;
            return Ok((config, ConfigSource::File(config_path)));
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        return path;
    }
    match exe_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
}
