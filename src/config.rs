use std::env;
use anyhow::{Context, Result};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    /// Scheme, host and port prepended to issued keys, without a trailing slash
    pub public_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}", service_port));
        let parsed = Url::parse(&public_base_url)
            .context("PUBLIC_BASE_URL must be an absolute URL like 'http://localhost:8080'")?;
        anyhow::ensure!(
            parsed.has_host(),
            "PUBLIC_BASE_URL must include a host, got '{}'",
            public_base_url
        );
        let public_base_url = public_base_url.trim_end_matches('/').to_string();

        Ok(Config {
            service_port,
            service_host,
            public_base_url,
        })
    }

    /// Address the listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// Fully-qualified short URL for `key`
    pub fn short_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.listen_addr());
        tracing::info!("  Public base URL: {}", self.public_base_url);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            service_port: 8080,
            service_host: "0.0.0.0".to_string(),
            public_base_url: "http://localhost:8080".to_string(),
        }
    }
}
