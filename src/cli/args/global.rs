//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are folded in by
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.c2c/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.c2c/session.yaml)
    pub session: Option<String>,

    /// Backend base URL override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            session: cli.session.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Resolve the output format against a config preference
    pub fn format_or(&self, preference: Option<&str>) -> OutputFormat {
        self.format
            .or_else(|| preference.and_then(OutputFormat::from_preference))
            .unwrap_or_default()
    }
}
