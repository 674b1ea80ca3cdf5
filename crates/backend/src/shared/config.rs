use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

/// Apps Script web app acting as the data store
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    pub url: String,
    /// Bearer credential sent with every upstream call
    pub secret: String,
}

impl UpstreamConfig {
    /// Blank URLs and the deployment template placeholder count as unset
    pub fn is_configured(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty()
            && !PLACEHOLDER_MARKERS
                .iter()
                .any(|marker| url.to_ascii_lowercase().contains(marker))
    }
}

const PLACEHOLDER_MARKERS: [&str; 2] = ["your_script_id", "your-script-id"];

/// Static bearer expected on the admin resource routes
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    pub secret: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    /// HMAC key for session tokens
    pub secret: String,
    pub max_age_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            max_age_days: 7,
        }
    }
}

/// Sheet (tab) names inside the spreadsheet
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SheetsConfig {
    pub branches: String,
    pub categories: String,
    pub suppliers: String,
    pub users: String,
    pub products: String,
    pub transactions: String,
    pub cash_logs: String,
    pub store_expenses: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            branches: "branches".into(),
            categories: "categories".into(),
            suppliers: "suppliers".into(),
            users: "users".into(),
            products: "products".into(),
            transactions: "transactions".into(),
            cash_logs: "cash_logs".into(),
            store_expenses: "store_expenses".into(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[upstream]
url = "https://script.google.com/macros/s/YOUR_SCRIPT_ID/exec"
secret = ""

[session]
max_age_days = 7
"#;

/// Load configuration.
///
/// Search order:
/// 1. `LANGGENG_CONFIG` environment variable
/// 2. `config.toml` next to the executable
/// 3. `config.toml` in the working directory
/// 4. Embedded default
///
/// Secrets can then be overridden from the environment.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            parse_config(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse_config(DEFAULT_CONFIG)?
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if !config.upstream.is_configured() {
        tracing::warn!("Upstream URL is not configured, data requests will fail with 500");
    }
    if config.session.secret.is_empty() {
        tracing::warn!("Session secret is empty, logins will be rejected");
    }

    Ok(config)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn find_config_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("LANGGENG_CONFIG") {
        let path = PathBuf::from(explicit);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("LANGGENG_CONFIG points to missing file: {}", path.display());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    let local = Path::new("config.toml");
    local.exists().then(|| local.to_path_buf())
}

/// Environment wins over the file for deploy-time secrets
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("APPS_SCRIPT_URL") {
        config.upstream.url = url;
    }
    if let Some(secret) = lookup("APPS_SCRIPT_SECRET") {
        config.upstream.secret = secret;
    }
    if let Some(secret) = lookup("API_SECRET") {
        config.api.secret = secret;
    }
    if let Some(secret) = lookup("SESSION_SECRET") {
        config.session.secret = secret;
    }
    if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
        config.server.port = port;
    }
}
