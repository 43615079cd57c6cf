//! Database connection settings
//!
//! `DATABASE_URL` wins when set. Otherwise connect options are built from
//! the discrete `DATABASE_*` variables.

use anyhow::{bail, Context, Result};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Discrete connection settings read from `DATABASE_*` variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl DatabaseSettings {
    /// Read settings through `lookup`. Host and port default to
    /// `localhost:5432`; user and database name are required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(user) = lookup("DATABASE_USER") else {
            bail!("DATABASE_URL not set. Set via --database-url, DATABASE_URL, or DATABASE_USER/DATABASE_NAME in .env");
        };
        let Some(name) = lookup("DATABASE_NAME") else {
            bail!("DATABASE_NAME not set");
        };

        let port = match lookup("DATABASE_PORT") {
            Some(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => bail!("DATABASE_PORT '{}' is not a valid port", raw),
            },
            None => 5432,
        };

        Ok(Self {
            user,
            password: lookup("DATABASE_PASSWORD").unwrap_or_default(),
            host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".to_string()),
            port,
            name,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Connect options with TLS disabled. Credentials are passed as-is and
    /// never spliced into a URL.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name)
            .ssl_mode(PgSslMode::Disable);

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    /// Connection target without credentials, for logs
    pub fn display_target(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

/// Resolve connect options from the explicit URL or the environment.
pub fn resolve_connect_options(explicit_url: Option<String>) -> Result<PgConnectOptions> {
    match explicit_url {
        Some(url) => url
            .parse::<PgConnectOptions>()
            .context("DATABASE_URL is not a valid postgres connection URL"),
        None => {
            let settings = DatabaseSettings::from_env()?;
            tracing::info!(target = %settings.display_target(), "using DATABASE_* settings");
            Ok(settings.connect_options())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn builds_options_from_parts() {
        let settings = DatabaseSettings::from_lookup(lookup(&[
            ("DATABASE_USER", "roster"),
            ("DATABASE_PASSWORD", "hunter2"),
            ("DATABASE_HOST", "db"),
            ("DATABASE_PORT", "6543"),
            ("DATABASE_NAME", "school"),
        ]))
        .unwrap();

        let options = settings.connect_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "roster");
        assert_eq!(options.get_database(), Some("school"));
        assert!(!settings.display_target().contains("hunter2"));
    }

    #[test]
    fn reserved_characters_in_credentials_keep_the_target() {
        let settings = DatabaseSettings::from_lookup(lookup(&[
            ("DATABASE_USER", "ro@ster"),
            ("DATABASE_PASSWORD", "p@ss/w#rd:?"),
            ("DATABASE_HOST", "db"),
            ("DATABASE_NAME", "school"),
        ]))
        .unwrap();

        let options = settings.connect_options();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "ro@ster");
        assert_eq!(options.get_database(), Some("school"));
    }

    #[test]
    fn host_and_port_default() {
        let settings = DatabaseSettings::from_lookup(lookup(&[
            ("DATABASE_USER", "roster"),
            ("DATABASE_NAME", "school"),
        ]))
        .unwrap();

        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5432);
        assert!(settings.password.is_empty());
    }

    #[test]
    fn missing_user_is_an_error() {
        let err = DatabaseSettings::from_lookup(lookup(&[("DATABASE_NAME", "school")])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = DatabaseSettings::from_lookup(lookup(&[
            ("DATABASE_USER", "roster"),
            ("DATABASE_NAME", "school"),
            ("DATABASE_PORT", "postgres"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("not a valid port"));
    }

    #[test]
    fn explicit_url_wins() {
        let options = resolve_connect_options(Some("postgres://x@y:5433/z".into())).unwrap();
        assert_eq!(options.get_host(), "y");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("z"));
    }

    #[test]
    fn malformed_url_is_an_error() {
        let err = resolve_connect_options(Some("not a url".into())).unwrap_err();
        assert!(err.to_string().contains("not a valid postgres connection URL"));
    }
}
