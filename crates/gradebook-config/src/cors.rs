use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
const WILDCARD_ORIGIN: &str = "*";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());
        Self::from_list(&raw)
    }

    /// Parses a comma-separated origin list, skipping blanks.
    ///
    /// `*` is dropped; the CORS layer allows credentials, which rules out a
    /// wildcard origin.
    pub fn from_list(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter(|s| {
                if *s == WILDCARD_ORIGIN {
                    tracing::warn!("Ignoring wildcard origin in ALLOWED_ORIGINS; list origins explicitly");
                    false
                } else {
                    true
                }
            })
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::from_list(DEFAULT_ALLOWED_ORIGINS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_trims_and_skips_blanks() {
        let config = CorsConfig::from_list(" https://a.test , ,https://b.test,");
        assert_eq!(config.allowed_origins, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_wildcard_origin_is_dropped() {
        let config = CorsConfig::from_list("*, https://a.test");
        assert_eq!(config.allowed_origins, vec!["https://a.test"]);

        assert!(CorsConfig::from_list("*").allowed_origins.is_empty());
    }

    #[test]
    fn test_default_origins() {
        let config = CorsConfig::default();
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.allowed_origins.contains(&"http://localhost:5173".to_string()));
    }
}
