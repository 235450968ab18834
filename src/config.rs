use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_DATA_PATH: &str = "data/courses.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// `.env` を読み込んでから環境変数で設定を組み立てる
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("CATALOG_DATA_PATH")
            .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        let bind_addr = env::var("CATALOG_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self::from_parts(data_path, &bind_addr)
    }

    pub fn from_parts(data_path: impl Into<PathBuf>, bind_addr: &str) -> Result<Self, AppError> {
        let bind_addr = bind_addr.parse().map_err(|e| {
            AppError::Config(format!("CATALOG_BIND_ADDR '{}' is invalid: {}", bind_addr, e))
        })?;

        Ok(Self {
            data_path: data_path.into(),
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bind_addr() {
        let config = AppConfig::from_parts("courses.json", "0.0.0.0:8080").unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.data_path, PathBuf::from("courses.json"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = AppConfig::from_parts(DEFAULT_DATA_PATH, "localhost").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
