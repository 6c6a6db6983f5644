use std::env;
use std::path::PathBuf;

const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 38889;
const DEFAULT_IMAGES_PER_PAGE: usize = 20;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 250 * 1024 * 1024;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upload_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub images_per_page: usize,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            images_per_page: DEFAULT_IMAGES_PER_PAGE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Reads the process environment; call `dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let images_per_page = parse_or(&lookup, "IMAGES_PER_PAGE", defaults.images_per_page)?;
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;

        if images_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                key: "IMAGES_PER_PAGE".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(Self {
            upload_dir,
            host,
            port,
            images_per_page,
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
