//! Configuration module
//!
//! Resolved CLI settings shared by every command.

use tagshift_core::Mode;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Shape of the input document
    pub mode: Mode,

    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl Config {
    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        let mut config = Config {
            mode: Mode::Task,
            verbosity: 0,
        };
        assert_eq!(config.default_log_filter(), "warn");

        config.verbosity = 1;
        assert_eq!(config.default_log_filter(), "info");

        config.verbosity = 4;
        assert_eq!(config.default_log_filter(), "debug");
    }
}
