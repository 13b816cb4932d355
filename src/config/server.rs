//! HTTP listener configuration.

use std::env;

/// Configuration for the HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);

        Self { port }
    }

    /// Address the server binds to, e.g. `0.0.0.0:3000`
    pub fn bind_addr(&self) -> (String, u16) {
        ("0.0.0.0".to_string(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(ServerConfig::default().port, 3000);
    }
}
