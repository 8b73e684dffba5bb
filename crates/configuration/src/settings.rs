use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every field carries a serde default so the application runs without a
/// `config.toml` at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub snapshot: SnapshotConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Bind parameters for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the snapshot provider finds the per-exchange JSON files.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    #[serde(default = "default_orderbooks_dir")]
    pub orderbooks_dir: PathBuf,
}

/// Bounds applied to incoming plan requests at the service boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// The largest base-asset quantity a single request may ask for.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: Decimal,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_orderbooks_dir() -> PathBuf {
    PathBuf::from("./orderbooks")
}

fn default_max_quantity() -> Decimal {
    dec!(1000)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            orderbooks_dir: default_orderbooks_dir(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_quantity: default_max_quantity(),
        }
    }
}
