//! API Server Configuration
//!
//! Reads server, CORS and feature settings from environment variables.
//! `.env` is loaded by `main` before this runs.

use anyhow::Context;
use auth::AuthConfig;
use lotto::LottoConfig;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub lotto: LottoConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            frontend_origins: split_origins(DEFAULT_FRONTEND_ORIGINS),
            auth: AuthConfig::default(),
            lotto: LottoConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables fall back to their defaults; set but invalid
    /// variables are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("API_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .context("API_HOST must be an IP address")?;

        let port = match lookup("API_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("API_PORT must be a port number (got {raw:?})"))?,
            None => defaults.port,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.frontend_origins);

        let auth = match (lookup("AUTH_ACCOUNT_EMAIL"), lookup("AUTH_ACCOUNT_PASSWORD")) {
            (None, None) => defaults.auth,
            (email, password) => AuthConfig::new(
                email.unwrap_or(defaults.auth.account_email),
                password.unwrap_or(defaults.auth.account_password),
            )
            .context("AUTH_ACCOUNT_EMAIL / AUTH_ACCOUNT_PASSWORD are invalid")?,
        };

        let draw_count = parse_dimension(&lookup, "LOTTO_DRAW_COUNT", defaults.lotto.draw_count)?;
        let numbers_per_draw = parse_dimension(
            &lookup,
            "LOTTO_NUMBERS_PER_DRAW",
            defaults.lotto.numbers_per_draw,
        )?;
        let lotto = LottoConfig::new(draw_count, numbers_per_draw)
            .context("LOTTO_DRAW_COUNT / LOTTO_NUMBERS_PER_DRAW are out of range")?;

        Ok(Self {
            host,
            port,
            frontend_origins,
            auth,
            lotto,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_dimension<F>(lookup: &F, key: &str, default: usize) -> anyhow::Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a positive integer (got {raw:?})")),
        None => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(config.auth.account_email, "example@example.com");
        assert_eq!(config.lotto, LottoConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("API_HOST", "127.0.0.1"),
            ("API_PORT", "9000"),
            ("FRONTEND_ORIGINS", " https://lotto.example.com , ,http://localhost:5173"),
            ("AUTH_ACCOUNT_EMAIL", "admin@example.org"),
            ("LOTTO_DRAW_COUNT", "3"),
            ("LOTTO_NUMBERS_PER_DRAW", "6"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.frontend_origins,
            vec!["https://lotto.example.com", "http://localhost:5173"]
        );
        assert_eq!(config.auth.account_email, "admin@example.org");
        assert_eq!(config.auth.account_password, "password123");
        assert_eq!(config.lotto.draw_count, 3);
        assert_eq!(config.lotto.numbers_per_draw, 6);
    }

    #[test]
    fn test_invalid_values_fail() {
        let cases: [&[(&str, &str)]; 6] = [
            &[("API_HOST", "localhost")],
            &[("API_PORT", "http")],
            &[("API_PORT", "70000")],
            &[("AUTH_ACCOUNT_EMAIL", "no-at-sign")],
            &[("LOTTO_DRAW_COUNT", "0")],
            &[("LOTTO_NUMBERS_PER_DRAW", "101")],
        ];

        for pairs in cases {
            assert!(
                ApiConfig::from_lookup(lookup_from(pairs)).is_err(),
                "{pairs:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_names_the_variable() {
        let err = ApiConfig::from_lookup(lookup_from(&[("LOTTO_DRAW_COUNT", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("LOTTO_DRAW_COUNT"));
    }
}
