//! Runtime configuration of the console.
//!
//! Values come from compile-time environment variables when set, otherwise
//! they are derived from the page location the bundle is served from.

use std::sync::OnceLock;

const DEFAULT_API_PORT: u16 = 5000;
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the REST backend, without a trailing slash.
    pub api_base: String,
    /// Timeout for requests wired to an abort controller.
    pub request_timeout_ms: u32,
    pub toast_timeout_ms: u32,
}

impl AppConfig {
    /// Builds the config from raw inputs. `protocol` is `"http:"`/`"https:"` as
    /// reported by `window.location`.
    pub fn resolve(
        api_base: Option<&str>,
        request_timeout: Option<&str>,
        protocol: &str,
        hostname: &str,
    ) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT));

        let request_timeout_ms = request_timeout
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            api_base,
            request_timeout_ms,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }

    fn from_environment() -> Self {
        let (protocol, hostname) = match web_sys::window() {
            Some(w) => {
                let location = w.location();
                (
                    location.protocol().unwrap_or_else(|_| "http:".to_string()),
                    location
                        .hostname()
                        .unwrap_or_else(|_| "127.0.0.1".to_string()),
                )
            }
            None => ("http:".to_string(), "127.0.0.1".to_string()),
        };

        let config = Self::resolve(
            option_env!("UNIFORM_API_BASE"),
            option_env!("UNIFORM_REQUEST_TIMEOUT_MS"),
            &protocol,
            &hostname,
        );
        log::info!(
            "api base {} (request timeout {} ms)",
            config.api_base,
            config.request_timeout_ms
        );
        config
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_location() {
        let c = AppConfig::resolve(None, None, "https:", "admin.example.az");
        assert_eq!(c.api_base, "https://admin.example.az:5000");
        assert_eq!(c.request_timeout_ms, 15_000);
    }

    #[test]
    fn explicit_base_wins_and_loses_trailing_slash() {
        let c = AppConfig::resolve(Some("http://10.0.0.5:8080/"), None, "https:", "x");
        assert_eq!(c.api_base, "http://10.0.0.5:8080");
    }

    #[test]
    fn blank_or_bad_values_fall_back() {
        let c = AppConfig::resolve(Some("  "), Some("soon"), "http:", "localhost");
        assert_eq!(c.api_base, "http://localhost:5000");
        assert_eq!(c.request_timeout_ms, 15_000);

        let c = AppConfig::resolve(None, Some("0"), "http:", "localhost");
        assert_eq!(c.request_timeout_ms, 15_000);

        let c = AppConfig::resolve(None, Some("2500"), "http:", "localhost");
        assert_eq!(c.request_timeout_ms, 2_500);
    }
}
