use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Искусственная задержка перед каждым API-запросом (имитация сети)
#[derive(Debug, Deserialize, Clone)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_delay_ms: 300,
            max_delay_ms: 800,
        }
    }
}

impl LatencyConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Случайная задержка в диапазоне `[min, max]`, `None` если выключено
    pub fn sample(&self) -> Option<Duration> {
        if !self.enabled || self.max_delay_ms == 0 {
            return None;
        }
        let lo = self.min_delay_ms.min(self.max_delay_ms);
        let hi = self.min_delay_ms.max(self.max_delay_ms);
        let ms = rand::Rng::gen_range(&mut rand::thread_rng(), lo..=hi);
        Some(Duration::from_millis(ms))
    }
}

/// Параметры детерминированного генератора начальных данных
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub teams_per_department: usize,
    pub target_user_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teams_per_department: 5,
            target_user_count: 1000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct JournalConfig {
    pub capacity: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self { capacity: 500 }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[latency]
enabled = true
min_delay_ms = 300
max_delay_ms = 800

[seed]
teams_per_department = 5
target_user_count = 1000

[journal]
capacity = 500
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Разбор и проверка конфигурации
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.latency.min_delay_ms > config.latency.max_delay_ms {
        anyhow::bail!(
            "latency.min_delay_ms ({}) is greater than latency.max_delay_ms ({})",
            config.latency.min_delay_ms,
            config.latency.max_delay_ms
        );
    }
    if config.journal.capacity == 0 {
        anyhow::bail!("journal.capacity must be positive");
    }
    Ok(config)
}

/// Адрес, на котором слушает сервер
pub fn get_bind_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    addr.parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address {}: {}", addr, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.latency.enabled);
        assert_eq!(config.latency.min_delay_ms, 300);
        assert_eq!(config.latency.max_delay_ms, 800);
        assert_eq!(config.seed.target_user_count, 1000);
        assert_eq!(config.journal.capacity, 500);
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.seed.teams_per_department, 5);
        assert_eq!(config.latency.max_delay_ms, 800);
        assert_eq!(
            get_bind_address(&config).unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_inverted_latency_range_is_rejected() {
        let contents = r#"
[server]
host = "0.0.0.0"
port = 3000

[latency]
enabled = true
min_delay_ms = 900
max_delay_ms = 100
"#;
        assert!(parse_config(contents).is_err());
    }

    #[test]
    fn test_latency_sample_stays_in_range() {
        let latency = LatencyConfig::default();
        for _ in 0..50 {
            let delay = latency.sample().unwrap();
            assert!(delay >= Duration::from_millis(300));
            assert!(delay <= Duration::from_millis(800));
        }
        assert_eq!(LatencyConfig::disabled().sample(), None);
    }
}
