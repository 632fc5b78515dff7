//! Checker configuration files.
//!
//! A config file is JSON with comments and trailing commas allowed, the same
//! dialect as `tsconfig.json`:
//!
//! ```jsonc
//! {
//!   // all keys optional
//!   "checkerOptions": {
//!     "strict": "true",
//!     "fieldSatisfiesWriteOnly": false,
//!   },
//!   // tracing for hosts that call `ContraConfig::tracing().install()`
//!   "log": { "filter": "contra_checker=debug", "format": "tree" }
//! }
//! ```

use crate::tracing_config::TracingConfig;
use anyhow::{Context, Result};
use contra_checker::CheckerOptions;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Accepts `true`/`false` as booleans or as common string spellings.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContraConfig {
    #[serde(default)]
    pub checker_options: Option<RawCheckerOptions>,
    #[serde(default)]
    pub log: Option<RawLogOptions>,
}

impl ContraConfig {
    pub fn checker_options(&self) -> CheckerOptions {
        resolve_checker_options(self.checker_options.as_ref())
    }

    /// Logging settings: the environment first, then this file's `log`
    /// section.
    pub fn tracing(&self) -> TracingConfig {
        TracingConfig::from_env().or_file(self.log.as_ref())
    }
}

/// The `log` section. `filter` uses `RUST_LOG` syntax; `format` is `text`,
/// `tree` or `json`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct RawLogOptions {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Checker options as written in the file. Unset keys keep their defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawCheckerOptions {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub report_abstract_in_concrete_class: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub report_accessor_abstractness: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub field_satisfies_write_only: Option<bool>,
}

/// Explicit settings win; `strict` only fills in what was left unset.
pub fn resolve_checker_options(raw: Option<&RawCheckerOptions>) -> CheckerOptions {
    let mut resolved = CheckerOptions::default();
    let Some(raw) = raw else {
        return resolved;
    };

    if let Some(strict) = raw.strict {
        resolved.strict = strict;
        resolved = resolved.apply_strict_defaults();
    }
    if let Some(report) = raw.report_abstract_in_concrete_class {
        resolved.report_abstract_in_concrete_class = report;
    }
    if let Some(report) = raw.report_accessor_abstractness {
        resolved.report_accessor_abstractness = report;
    }
    if let Some(symmetric) = raw.field_satisfies_write_only {
        resolved.field_satisfies_write_only = symmetric;
    }

    resolved
}

pub fn parse_config(source: &str) -> Result<ContraConfig> {
    let stripped = strip_jsonc(source);
    let normalized = remove_trailing_commas(&stripped);
    let config = serde_json::from_str(&normalized).context("failed to parse contra config JSON")?;
    Ok(config)
}

/// Parse a config document straight to resolved checker options.
pub fn parse_checker_config(source: &str) -> Result<CheckerOptions> {
    let options = parse_config(source)?.checker_options();
    tracing::debug!(?options, "resolved checker options");
    Ok(options)
}

/// Load a whole config file, for hosts that also want its `log` section.
pub fn load_config(path: &Path) -> Result<ContraConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read contra config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse contra config: {}", path.display()))
}

pub fn load_checker_config(path: &Path) -> Result<CheckerOptions> {
    let options = load_config(path)?.checker_options();
    tracing::debug!(?options, path = %path.display(), "resolved checker options");
    Ok(options)
}

fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;
    let mut in_line_comment = false;
    let mut in_block_comment = false;

    while let Some(ch) = chars.next() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(ch);
            }
            continue;
        }

        if in_block_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                in_block_comment = false;
            } else if ch == '\n' {
                out.push(ch);
            }
            continue;
        }

        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('"', _) => in_string = true,
            ('/', Some('/')) => {
                chars.next();
                in_line_comment = true;
                continue;
            }
            ('/', Some('*')) => {
                chars.next();
                in_block_comment = true;
                continue;
            }
            _ => {}
        }

        out.push(ch);
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == ',' {
            let next = chars.clone().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                continue;
            }
        }

        out.push(ch);
    }

    out
}
