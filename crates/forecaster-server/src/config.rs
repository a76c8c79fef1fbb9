use std::net::SocketAddr;

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed for reproducible predictions; `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `FORECASTER_HOST`, `FORECASTER_PORT` and `FORECASTER_SEED`.
    #[allow(clippy::missing_errors_doc)]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset variables fall back to defaults.
    #[allow(clippy::missing_errors_doc)]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("FORECASTER_HOST").unwrap_or(defaults.host);
        let port = match lookup("FORECASTER_PORT") {
            Some(value) => parse("FORECASTER_PORT", value)?,
            None => defaults.port,
        };
        let seed = lookup("FORECASTER_SEED")
            .map(|value| parse("FORECASTER_SEED", value))
            .transpose()?;
        Ok(Self { host, port, seed })
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        match self.host.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
