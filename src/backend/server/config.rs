/**
 * Server Configuration
 *
 * Typed configuration loaded once at startup from environment variables
 * (a `.env` file is honored via dotenv in `main`). Unlike optional
 * integrations, the store and the session key material are required: the
 * server refuses to start without them rather than limping along with an
 * embedded default secret.
 *
 * # Variables
 *
 * - `DATABASE_URL`           (required) PostgreSQL connection string
 * - `SESSION_KEYS`           (required) comma-separated signing secrets;
 *                            the first signs, all verify (rotation)
 * - `PORT`                   default 5000
 * - `CORS_ORIGIN`            default http://localhost:5173
 * - `UPLOAD_DIR`             default ./uploads
 * - `COOKIE_SECURE`          default false; set true behind TLS
 * - `GOOGLE_PLACES_API_KEY`  optional; enables the Google nearby search
 * - `DEV_PLACES_FALLBACK`    default false; serve mock places when the
 *                            lookups return nothing (development only)
 */

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Active session secrets; first entry signs new tokens.
    pub session_secrets: Vec<String>,
    pub cors_origin: String,
    pub upload_dir: PathBuf,
    pub cookie_secure: bool,
    pub google_places_api_key: Option<String>,
    pub dev_places_fallback: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let raw_keys =
            std::env::var("SESSION_KEYS").map_err(|_| ConfigError::Missing("SESSION_KEYS"))?;
        let session_secrets = parse_secrets(&raw_keys)
            .ok_or_else(|| ConfigError::Invalid("SESSION_KEYS", "no non-empty secrets".into()))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 5000,
        };

        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let cookie_secure = env_flag("COOKIE_SECURE");
        let dev_places_fallback = env_flag("DEV_PLACES_FALLBACK");

        let google_places_api_key = std::env::var("GOOGLE_PLACES_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(Config {
            port,
            database_url,
            session_secrets,
            cors_origin,
            upload_dir,
            cookie_secure,
            google_places_api_key,
            dev_places_fallback,
        })
    }
}

/// Split a comma-separated secret list, dropping empty entries. Returns
/// `None` when nothing usable remains.
fn parse_secrets(raw: &str) -> Option<Vec<String>> {
    let secrets: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if secrets.is_empty() {
        None
    } else {
        Some(secrets)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secrets_single() {
        assert_eq!(parse_secrets("abc"), Some(vec!["abc".to_string()]));
    }

    #[test]
    fn test_parse_secrets_rotation_list() {
        assert_eq!(
            parse_secrets("new-key, old-key"),
            Some(vec!["new-key".to_string(), "old-key".to_string()])
        );
    }

    #[test]
    fn test_parse_secrets_rejects_empty() {
        assert_eq!(parse_secrets(""), None);
        assert_eq!(parse_secrets(" , ,"), None);
    }
}
