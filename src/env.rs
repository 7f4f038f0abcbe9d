use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub server: ServerSettings,
    pub game: GameSettings,
    pub flights: FlightSettings,
    pub redis: RedisSettings,
    pub hub: HubSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        println!("Loading configuration for RUN_MODE: {}", &run_mode);

        let s = Config::builder()
            // Load environment-specific file (e.g., development.toml, production.toml)
            .add_source(
                File::with_name(&format!("config/{}", run_mode))
                    .format(FileFormat::Toml)
                    .required(true),
            )
            // Add environment variables (e.g., APP_FLIGHTS__API_KEY=...)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
    pub metrics_auth_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub directory: String,
    pub filename: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameSettings {
    pub total_rounds: usize,
    /// Fixed seed for every random draw in the process. Unset means entropy.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightSettings {
    pub poll_interval_seconds: u64,
    pub cache_ttl_seconds: u64,
    pub api_base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub request_timeout_seconds: u64,
    pub fetch_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub enabled: bool,
    pub max_reconnect_attempts: u32,
    pub initial_reconnect_delay_ms: u64,
    pub max_reconnect_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
    /// Outbound queue length per viewer before it is treated as stalled.
    pub queue_capacity: usize,
    pub heartbeat_interval_seconds: u64,
    pub client_timeout_seconds: u64,
}
