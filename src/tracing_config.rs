//! Tracing setup for hosts that want to see what the checker is doing.
//!
//! Logging is off unless a filter is given, either through the environment
//! or through the `log` section of a config file:
//!
//! ```bash
//! CONTRA_LOG=debug CONTRA_LOG_FORMAT=tree my-host classes.json
//! CONTRA_LOG="contra_checker=trace,contra_solver=debug" my-host classes.json
//! ```
//!
//! ```jsonc
//! { "log": { "filter": "contra_checker=debug", "format": "json" } }
//! ```
//!
//! `CONTRA_LOG` wins over `RUST_LOG`, and either wins over the config file.
//! Formats: `text` (default), `tree` (`tracing-tree`, one class per block)
//! and `json` (one object per span/event). Output always goes to stderr.

use crate::config::RawLogOptions;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "CONTRA_LOG";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const LOG_FORMAT_ENV: &str = "CONTRA_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings. `filter` uses `RUST_LOG` syntax; `None` means
/// logging stays off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracingConfig {
    pub filter: Option<String>,
    pub format: LogFormat,
    /// Whether the format was picked explicitly rather than defaulted.
    format_set: bool,
}

impl TracingConfig {
    pub fn new(filter: impl Into<String>, format: LogFormat) -> Self {
        Self {
            filter: Some(filter.into()),
            format,
            format_set: true,
        }
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let format = non_blank(LOG_FORMAT_ENV);
        Self {
            filter: non_blank(LOG_ENV).or_else(|| non_blank(FALLBACK_LOG_ENV)),
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
            format_set: format.is_some(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Fill whatever the environment left unset from a config file's `log`
    /// section.
    pub fn or_file(mut self, raw: Option<&RawLogOptions>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        if self.filter.is_none() {
            self.filter = raw.filter.clone().filter(|f| !f.trim().is_empty());
        }
        if !self.format_set
            && let Some(format) = raw.format.as_deref()
        {
            self.format = LogFormat::parse(format);
            self.format_set = true;
        }
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.filter.is_some()
    }

    /// Install the global subscriber. Returns false when logging is off or a
    /// subscriber was already installed, so calling this twice is harmless.
    pub fn install(&self) -> bool {
        let Some(filter) = self.filter.as_deref() else {
            return false;
        };
        let filter = EnvFilter::builder().parse_lossy(filter);

        let installed = match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_writer(std::io::stderr)
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        };

        match installed {
            Ok(()) => {
                tracing::debug!(format = ?self.format, "tracing subscriber installed");
                true
            }
            Err(_) => false,
        }
    }
}

/// Install a subscriber from the environment alone. Returns whether one was
/// installed.
pub fn init_tracing() -> bool {
    TracingConfig::from_env().install()
}
