//! Runtime configuration loaded from the environment.

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_COOKIE_NAME: &str = "session_token";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Provider session database. `None` falls back to in-process sessions.
    pub database_url: Option<String>,
    /// Cookie carrying the provider's session token.
    pub session_cookie_name: String,
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_owned(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Read `PORT`, `DATABASE_URL`, `SESSION_COOKIE_NAME`, `DB_MAX_CONNECTIONS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match non_blank("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => DEFAULT_PORT,
        };
        let db_max_connections = match non_blank("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_number("DB_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        Ok(Self {
            port,
            database_url: non_blank("DATABASE_URL"),
            session_cookie_name: non_blank("SESSION_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE_NAME.to_owned()),
            db_max_connections,
        })
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default,
{
    raw.parse::<T>()
        .ok()
        .filter(|n| *n != T::default())
        .ok_or_else(|| ConfigError::InvalidNumber { key, value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
