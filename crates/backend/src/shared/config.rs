use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Имитация запроса в реестр BKI
#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    pub delay_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub demo_assets: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_assets: true }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubmissionConfig {
    /// Запрещать подачу без обязательных документов
    #[serde(default)]
    pub strict_documents: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[lookup]
delay_ms = 1000

[seed]
demo_assets = true

[submission]
strict_documents = false
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

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.lookup.delay_ms, 1000);
        assert!(config.seed.demo_assets);
        assert!(!config.submission.strict_documents);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_optional_sections_default() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.lookup.delay_ms, 1000);
        assert!(config.seed.demo_assets);
    }

    #[test]
    fn test_missing_server_section_fails() {
        assert!(parse_config("[lookup]\ndelay_ms = 5\n").is_err());
    }
}
