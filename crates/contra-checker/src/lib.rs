//! Member contract checker.
//!
//! This crate is organized into several modules:
//! - `context` - `CheckerOptions` and the per-class `CheckerContext`
//! - `diagnostics` - structured diagnostic records
//! - `obligation` - the obligation/implementation shapes of one member name
//! - `member_checker` - the per-name compatibility rules
//! - `class_checker` - builds the member table and runs the rules per name
//! - `batch` - checking many classes, in parallel or in dependency order

pub mod batch;
pub mod class_checker;
pub mod context;
pub mod diagnostics;
pub mod member_checker;
mod obligation;

pub use batch::{check_classes, check_hierarchy};
pub use class_checker::{ClassCheckResult, check_class};
pub use context::{CheckerContext, CheckerOptions};
pub use diagnostics::{Diagnostic, DiagnosticArg};
