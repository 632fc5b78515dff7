//! JSON boundary.
//!
//! Hosts hand over class declarations as JSON and get the check results back
//! as JSON. Malformed input is a host error, never a diagnostic. Spans and
//! events from these calls show up once the host installs a subscriber with
//! [`crate::TracingConfig::install`].

use anyhow::{Context, Result};
use contra_checker::{CheckerOptions, ClassCheckResult, check_classes, check_hierarchy};
use contra_solver::ClassDeclaration;

pub fn parse_classes(input: &str) -> Result<Vec<ClassDeclaration>> {
    serde_json::from_str(input).context("failed to parse class declarations")
}

/// Check a JSON array of independent class declarations.
pub fn check_classes_json(input: &str, options: &CheckerOptions) -> Result<String> {
    let classes = parse_classes(input)?;
    tracing::debug!(classes = classes.len(), "checking classes from JSON");
    let results = check_classes(&classes, options);
    serialize_results(&results)
}

/// Like [`check_classes_json`], but classes are in dependency order and
/// abstract classes hand their pending obligations to later subclasses.
pub fn check_hierarchy_json(input: &str, options: &CheckerOptions) -> Result<String> {
    let classes = parse_classes(input)?;
    tracing::debug!(classes = classes.len(), "checking class hierarchy from JSON");
    let results = check_hierarchy(&classes, options);
    serialize_results(&results)
}

fn serialize_results(results: &[ClassCheckResult]) -> Result<String> {
    serde_json::to_string(results).context("failed to serialize check results")
}
