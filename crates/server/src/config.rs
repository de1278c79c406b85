use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server settings read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// Admin routes require a bearer token from this issuer when set
    pub oidc_issuer_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            oidc_issuer_url: non_empty("OIDC_ISSUER_URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.oidc_issuer_url, None);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("OIDC_ISSUER_URL", "https://idp.example.edu/realms/fsc"),
        ]);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(
            config.oidc_issuer_url.as_deref(),
            Some("https://idp.example.edu/realms/fsc")
        );
    }

    #[test]
    fn test_blank_issuer_disables_auth() {
        assert_eq!(config(&[("OIDC_ISSUER_URL", "  ")]).oidc_issuer_url, None);
    }
}
