//! Diagnostic categories and codes for the member-contract checker.
//!
//! Code data lives in `data.rs`. Each `DiagnosticCode` maps to the numeric
//! TypeScript code the reporting side uses when it renders a message.
//!
//! The checker never produces message text; it hands structured records to
//! whoever reports them.

use serde::{Deserialize, Serialize};
use std::fmt;

mod data;
pub use data::{DIAGNOSTIC_CODES, diagnostic_codes};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// The kind of contract violation a diagnostic reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// A required abstract member (or one half of it) has no implementation.
    ErrUnimplementedAbstractMember,
    /// Field vs method vs accessor incompatibility.
    ErrKindMismatch,
    /// Value type differs from the obligation's type.
    ErrTypeMismatch,
    /// Getter and setter of one name disagree on the property type.
    ErrAccessorTypeMismatch,
    /// Write capability added where only reading was permitted.
    ErrReadonlyViolation,
    /// More than one declaration for one name/kind slot.
    ErrDuplicateDeclaration,
    /// Non-abstract method or accessor without an implementation.
    ErrMissingBody,
    /// Abstract member declared in a class that is not abstract.
    ErrAbstractMemberInConcreteClass,
    /// Getter and setter of one name where only one is abstract.
    ErrAccessorAbstractnessMismatch,
}

impl DiagnosticCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::ErrUnimplementedAbstractMember => "ERR_UNIMPLEMENTED_ABSTRACT_MEMBER",
            DiagnosticCode::ErrKindMismatch => "ERR_KIND_MISMATCH",
            DiagnosticCode::ErrTypeMismatch => "ERR_TYPE_MISMATCH",
            DiagnosticCode::ErrAccessorTypeMismatch => "ERR_ACCESSOR_TYPE_MISMATCH",
            DiagnosticCode::ErrReadonlyViolation => "ERR_READONLY_VIOLATION",
            DiagnosticCode::ErrDuplicateDeclaration => "ERR_DUPLICATE_DECLARATION",
            DiagnosticCode::ErrMissingBody => "ERR_MISSING_BODY",
            DiagnosticCode::ErrAbstractMemberInConcreteClass => {
                "ERR_ABSTRACT_MEMBER_IN_CONCRETE_CLASS"
            }
            DiagnosticCode::ErrAccessorAbstractnessMismatch => {
                "ERR_ACCESSOR_ABSTRACTNESS_MISMATCH"
            }
        }
    }

    /// Numeric TypeScript code (e.g. `2515`) for this diagnostic.
    #[must_use]
    pub fn ts_code(self) -> u32 {
        get_code_entry(self).map_or(0, |entry| entry.ts_code)
    }

    /// Category the code is reported with.
    #[must_use]
    pub fn category(self) -> DiagnosticCategory {
        get_code_entry(self).map_or(DiagnosticCategory::Error, |entry| entry.category)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic code definition: symbolic code, numeric code and category.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticCodeEntry {
    pub code: DiagnosticCode,
    pub ts_code: u32,
    pub category: DiagnosticCategory,
}

/// Look up the code definition for a diagnostic code.
#[must_use]
pub fn get_code_entry(code: DiagnosticCode) -> Option<&'static DiagnosticCodeEntry> {
    DIAGNOSTIC_CODES.iter().find(|entry| entry.code == code)
}

/// Reverse lookup from a numeric TypeScript code.
#[must_use]
pub fn code_from_ts_code(ts_code: u32) -> Option<DiagnosticCode> {
    DIAGNOSTIC_CODES
        .iter()
        .find(|entry| entry.ts_code == ts_code)
        .map(|entry| entry.code)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
