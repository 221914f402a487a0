//! Service configuration from environment variables.

/// Runtime configuration for the hubstats binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string; required for any command that touches
    /// the store.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Bearer token required on every dashboard route. `None` fails closed:
    /// the dashboard stays unreachable rather than silently open.
    pub admin_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty(std::env::var("DATABASE_URL").ok()),
            host: std::env::var("HUBSTATS_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned()),
            port: parse_or_default(
                "HUBSTATS_PORT",
                std::env::var("HUBSTATS_PORT").ok().as_deref(),
                8087,
            ),
            admin_token: non_empty(std::env::var("HUBSTATS_ADMIN_TOKEN").ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a raw env value with a default fallback.
///
/// Unset values fall back silently (the expected case); set-but-unparsable
/// values log a warning instead of being swallowed.
fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(var, value = %v, default = %default, "invalid env var value, using default");
                default
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let port: u16 = parse_or_default("HUBSTATS_PORT", Some("9000"), 8087);
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_invalid_value_falls_back() {
        let port: u16 = parse_or_default("HUBSTATS_PORT", Some("banana"), 8087);
        assert_eq!(port, 8087);
    }

    #[test]
    fn test_parse_missing_value_falls_back() {
        let port: u16 = parse_or_default("HUBSTATS_PORT", None, 8087);
        assert_eq!(port, 8087);
    }

    #[test]
    fn test_non_empty_filters_blank_tokens() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("secret".to_owned())), Some("secret".to_owned()));
        assert_eq!(non_empty(None), None);
    }
}
