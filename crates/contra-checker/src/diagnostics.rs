//! Structured diagnostic records.
//!
//! Diagnostics carry what was expected and what was found as data, not text.
//! Turning them into messages, source positions and exit codes belongs to the
//! reporting side.

use contra_common::{DiagnosticCategory, DiagnosticCode, MemberKind};
use contra_solver::ValueType;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use contra_common::diagnostics::diagnostic_codes;

/// One side of a diagnostic's expected/actual payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DiagnosticArg {
    None,
    Kind(MemberKind),
    Type(ValueType),
    Count(usize),
}

impl fmt::Display for DiagnosticArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticArg::None => f.write_str("-"),
            DiagnosticArg::Kind(kind) => write!(f, "{kind}"),
            DiagnosticArg::Type(ty) => write!(f, "{ty}"),
            DiagnosticArg::Count(n) => write!(f, "{n}"),
        }
    }
}

/// A member contract violation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub member_name: String,
    pub category: DiagnosticCategory,
    pub code: DiagnosticCode,
    /// The class being checked.
    pub owner_class: String,
    /// The class or interface that declared the violated obligation, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub declared_in: Option<String>,
    pub expected: DiagnosticArg,
    pub actual: DiagnosticArg,
}

impl Diagnostic {
    pub fn ts_code(&self) -> u32 {
        self.code.ts_code()
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.category, DiagnosticCategory::Error)
    }
}
