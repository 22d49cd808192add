use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::pwa::PwaSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub routes: RouteTable,
    /// Startup PWA settings; the `[pwa]` section is the initial
    /// `configure(...)` call.
    #[serde(default)]
    pub pwa: PwaSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Path prefixes for the PWA endpoints, supplied by the host's routing table.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RouteTable {
    pub prefix: String,
    pub worker: String,
    pub manifest: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            worker: default_worker(),
            manifest: default_manifest(),
        }
    }
}

impl RouteTable {
    pub fn worker_path(&self) -> String {
        format!("{}{}", self.prefix, self.worker)
    }

    pub fn manifest_path(&self) -> String {
        format!("{}{}", self.prefix, self.manifest)
    }
}

fn default_prefix() -> String {
    "/_/pwa".to_string()
}

fn default_worker() -> String {
    "/service-worker.js".to_string()
}

fn default_manifest() -> String {
    "/manifest.webmanifest".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PWA_DELIVERY__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PWA_DELIVERY")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        for (name, value) in [
            ("prefix", &self.routes.prefix),
            ("worker", &self.routes.worker),
            ("manifest", &self.routes.manifest),
        ] {
            if !value.starts_with('/') {
                return Err(format!("Route {} must start with '/'", name));
            }
        }
        Ok(())
    }
}
