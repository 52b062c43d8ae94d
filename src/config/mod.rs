use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5004;

/// Application configuration and constants
pub struct Config {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub port: u16,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("pages"),
            template_dir: PathBuf::from("templates"),
            port: DEFAULT_PORT,
        }
    }

    /// Create configuration from the environment, falling back to defaults.
    ///
    /// Recognized variables: `FOLIO_DATA`, `FOLIO_TEMPLATES`, `FOLIO_PORT`.
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(dir) = std::env::var("FOLIO_DATA") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("FOLIO_TEMPLATES") {
            config.template_dir = PathBuf::from(dir);
        }
        if let Ok(port) = std::env::var("FOLIO_PORT") {
            if let Ok(port) = port.parse() {
                config.port = port;
            } else {
                log::warn!("Ignoring unparseable FOLIO_PORT value: '{}'", port);
            }
        }
        config
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.data_dir, PathBuf::from("pages"));
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.socket_addr().port(), DEFAULT_PORT);
    }
}
