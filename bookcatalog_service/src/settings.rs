use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
/// Service settings read from environment variables (and an optional `.env` file)
pub struct AppSettings {
    /// `DATABASE_URL`, required
    pub database_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// `CORS_ALLOWED_ORIGINS`, comma separated
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    /// `JAEGER_ENABLED`, exports spans to a local jaeger agent
    #[serde(default)]
    pub jaeger_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl AppSettings {
    /// Loads `.env` if there is one and then reads the process environment
    pub fn load() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("Failed to read .env file");
            }
        }
        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration, DATABASE_URL must be set")
    }
}
