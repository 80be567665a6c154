//! Server and CORS configuration.

use serde::{Deserialize, Serialize};

/// Origin of the bundled development front-end; always allowed.
const LOCAL_ORIGIN: &str = "http://localhost:8080";

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Address of the browser client allowed to call the API cross-origin.
    #[serde(default = "default_client_origin")]
    pub client_origin: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub request_body_limit_bytes: usize,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// All origins the CORS layer should accept, without duplicates.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![LOCAL_ORIGIN.to_string(), self.client_origin.clone()];
        origins.extend(self.cors.allowed_origins.iter().cloned());
        origins.sort();
        origins.dedup();
        origins
    }

    /// The `host:port` string to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            client_origin: default_client_origin(),
            request_body_limit_bytes: default_body_limit(),
            cors: CorsConfig::default(),
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Extra allowed origins on top of `client_origin`.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Max age for preflight cache in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_client_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_max_age() -> u64 {
    3600
}
