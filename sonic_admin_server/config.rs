use dotenvy::dotenv;
use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_LOG_FILTER: &str = "info,sonic_admin=debug";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub fixtures_dir: Option<PathBuf>,
    pub version: String,
    pub page_size: u32,
    /// Directory of the daily rolling log file.
    pub log_dir: PathBuf,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fixtures_dir: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = match env::var("SONIC_ADMIN_PREVIEW_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(DEFAULT_PORT),
            Err(_) => DEFAULT_PORT,
        };

        let fixtures_dir = match env::var("SONIC_ADMIN_FIXTURES_DIR") {
            Ok(val) if !val.trim().is_empty() => Some(PathBuf::from(val)),
            _ => None,
        };

        let version = match env::var("SONIC_ADMIN_VERSION") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => env!("CARGO_PKG_VERSION").to_string(),
        };

        let page_size = match env::var("SONIC_ADMIN_PAGE_SIZE") {
            Ok(val) => val
                .parse::<u32>()
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(1, 100),
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        let log_dir = match env::var("SONIC_ADMIN_LOG_DIR") {
            Ok(val) if !val.trim().is_empty() => PathBuf::from(val),
            _ => PathBuf::from(DEFAULT_LOG_DIR),
        };

        let log_filter = match env::var("SONIC_ADMIN_LOG_FILTER") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => DEFAULT_LOG_FILTER.to_string(),
        };

        Self {
            port,
            fixtures_dir,
            version,
            page_size,
            log_dir,
            log_filter,
        }
    }
}
