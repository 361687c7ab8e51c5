// src/config.rs
use url::Url;

use crate::errors::{ConfigError, ConnectionError};
use crate::models::view::Viewer;

/// Client configuration: which host to attach to, who is watching, and
/// whether the feed keeps a bounded history.
///
/// The socket path is fixed relative to the host; only the host and the
/// scheme vary between deployments.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub secure: bool,
    pub notification_path: String,
    pub viewer: Viewer,
    /// `None` keeps the observed unbounded behavior; `Some(n)` evicts the
    /// oldest entry once the feed holds `n` items.
    pub store_capacity: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("BELLBIRD_HOST").unwrap_or_else(|_| "localhost:8000".to_string()),
            secure: false,
            notification_path: "/notification/".to_string(),
            viewer: Viewer::new(0),
            store_capacity: None,
        }
    }
}

impl ClientConfig {
    /// Strict environment loading: the viewer identity is mandatory, the
    /// rest falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let viewer_id = std::env::var("BELLBIRD_VIEWER_ID")
            .map_err(|_| ConfigError::MissingVar("BELLBIRD_VIEWER_ID"))?;
        let viewer_id = viewer_id.parse().map_err(|_| ConfigError::InvalidVar {
            name: "BELLBIRD_VIEWER_ID",
            value: viewer_id,
        })?;

        let mut config = Self {
            viewer: Viewer::new(viewer_id),
            ..Default::default()
        };

        if let Ok(secure) = std::env::var("BELLBIRD_SECURE") {
            config.secure = secure.parse().map_err(|_| ConfigError::InvalidVar {
                name: "BELLBIRD_SECURE",
                value: secure,
            })?;
        }

        if let Ok(capacity) = std::env::var("BELLBIRD_FEED_CAPACITY") {
            config.store_capacity =
                Some(capacity.parse().map_err(|_| ConfigError::InvalidVar {
                    name: "BELLBIRD_FEED_CAPACITY",
                    value: capacity,
                })?);
        }

        Ok(config)
    }

    /// `ws[s]://{host}{notification_path}` — the one persistent socket of
    /// the session.
    pub fn notification_endpoint(&self) -> Result<Url, ConnectionError> {
        let scheme = if self.secure { "wss" } else { "ws" };
        self.parse_endpoint(format!("{}://{}{}", scheme, self.host, self.notification_path))
    }

    /// `http[s]://{host}/forum/write/lessons/` — the class listing fetched
    /// once at startup.
    pub fn lessons_endpoint(&self) -> Result<Url, ConnectionError> {
        let scheme = if self.secure { "https" } else { "http" };
        self.parse_endpoint(format!("{}://{}/forum/write/lessons/", scheme, self.host))
    }

    fn parse_endpoint(&self, endpoint: String) -> Result<Url, ConnectionError> {
        Url::parse(&endpoint).map_err(|source| ConnectionError::InvalidEndpoint {
            endpoint,
            source,
        })
    }
}
