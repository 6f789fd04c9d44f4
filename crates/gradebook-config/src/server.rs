use std::env;

use crate::env_util::parse_or;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub metrics_port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("APP_PORT", 3000),
            metrics_port: parse_or("METRICS_PORT", 9090),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn metrics_addr(&self) -> String {
        format!("{}:{}", self.host, self.metrics_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            metrics_port: 9100,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.metrics_addr(), "127.0.0.1:9100");
    }
}
