use std::{env, net::SocketAddr, path::PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub static_root: PathBuf,
    pub distance_unit: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let static_root = env::var("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let distance_unit = env::var("DISTANCE_UNIT")
            .ok()
            .map(|unit| unit.trim().to_string())
            .filter(|unit| !unit.is_empty())
            .unwrap_or_else(|| "km".to_string());

        Ok(Self {
            listen_addr,
            static_root,
            distance_unit,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_root: PathBuf::from("static"),
            distance_unit: "km".into(),
        }
    }
}
