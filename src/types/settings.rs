use serde::{Deserialize, Serialize};

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkstackSettings {
    pub server: ServerSettings,
    pub endpoint: EndpointSettings,
    pub http: HttpSettings,
    pub storage: StorageSettings,
    pub log_level: String,
}

impl Default for LinkstackSettings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            endpoint: EndpointSettings::default(),
            http: HttpSettings::default(),
            storage: StorageSettings::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Where the metadata endpoint listens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

/// Where widgets reach the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointSettings {
    /// Site root; the function path is appended to it.
    pub base_url: String,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8888/".to_string(),
        }
    }
}

/// Outbound HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpSettings {
    pub user_agent: String,
    /// No timeout is applied when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: format!("linkstack/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// SQLite file holding the bookmark keys. Defaults to the platform data dir.
    pub database_path: Option<String>,
}
