//! Abstract member contract checking.
//!
//! Re-exports the workspace crates under one roof and adds the host-facing
//! pieces: JSON input/output, config files and tracing setup.
//!
//! ```
//! use contra::{CheckerOptions, ClassDeclaration, Declaration, ValueType, check_class};
//!
//! let class = ClassDeclaration::new("Point")
//!     .with_member(Declaration::field("Point", "x", ValueType::Number).make_abstract())
//!     .with_member(Declaration::field("Point", "x", ValueType::number_literal(0.0)));
//!
//! assert!(check_class(&class, &CheckerOptions::default()).is_clean());
//! ```
//!
//! A host usually loads a config file once, installs tracing from it and then
//! goes through the JSON boundary:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! let config = contra::load_config(std::path::Path::new("contra.json"))?;
//! config.tracing().install();
//! let output = contra::check_hierarchy_json(r#"[]"#, &config.checker_options())?;
//! # let _ = output;
//! # Ok(())
//! # }
//! ```

pub use contra_checker as checker;
pub use contra_common as common;
pub use contra_solver as solver;

pub use contra_checker::{
    CheckerOptions, ClassCheckResult, Diagnostic, DiagnosticArg, check_class, check_classes,
    check_hierarchy,
};
pub use contra_common::{DiagnosticCategory, DiagnosticCode, MemberKind};
pub use contra_solver::{Ancestor, AncestorKind, ClassDeclaration, Declaration, ValueType};

pub mod api;
pub mod config;
pub mod tracing_config;

pub use api::{check_classes_json, check_hierarchy_json};
pub use config::{ContraConfig, load_checker_config, load_config, parse_checker_config};
pub use tracing_config::{LogFormat, TracingConfig, init_tracing};
