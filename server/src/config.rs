//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;

/// Error produced when environment configuration cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set to something that is not a 16-bit port number.
    #[error("invalid PORT {value:?}: expected a 16-bit port number")]
    InvalidPort { value: String },
}

/// Typed server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but does not
    /// parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    /// Listen address for the HTTP server.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(value) = raw else {
        return Ok(DEFAULT_PORT);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }

    trimmed
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidPort { value: value.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
