//! Checker options and per-class checking state.

use crate::diagnostics::{Diagnostic, DiagnosticArg};
use contra_common::{DiagnosticCode, MemberKind};
use contra_solver::{ClassDeclaration, Declaration, ValueType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckerOptions {
    pub strict: bool,
    /// Report abstract members declared in a class that is not abstract.
    pub report_abstract_in_concrete_class: bool,
    /// Report getter/setter pairs where only one half is abstract.
    pub report_accessor_abstractness: bool,
    /// Whether a mutable field satisfies a write-only (setter-only)
    /// obligation, mirroring how a readonly field satisfies a get-only one.
    pub field_satisfies_write_only: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            strict: false,
            report_abstract_in_concrete_class: false,
            report_accessor_abstractness: false,
            field_satisfies_write_only: true,
        }
    }
}

impl CheckerOptions {
    /// `strict` turns on the strict family of checks unless the caller
    /// already enabled them individually; it never turns anything off.
    pub fn apply_strict_defaults(mut self) -> Self {
        if self.strict {
            self.report_abstract_in_concrete_class = true;
            self.report_accessor_abstractness = true;
        }
        self
    }

    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
        .apply_strict_defaults()
    }
}

/// State for checking one class: its declaration, the options, and what the
/// rules have produced so far.
pub struct CheckerContext<'a> {
    pub class: &'a ClassDeclaration,
    pub options: &'a CheckerOptions,
    pub diagnostics: Vec<Diagnostic>,
    /// Obligations this (abstract) class leaves for its subclasses.
    pub pending: Vec<Declaration>,
}

impl<'a> CheckerContext<'a> {
    pub fn new(class: &'a ClassDeclaration, options: &'a CheckerOptions) -> Self {
        Self {
            class,
            options,
            diagnostics: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub const fn is_abstract_class(&self) -> bool {
        self.class.is_abstract
    }

    /// Record an error for `member_name`.
    pub(crate) fn error(
        &mut self,
        member_name: &str,
        code: DiagnosticCode,
        declared_in: Option<&str>,
        expected: DiagnosticArg,
        actual: DiagnosticArg,
    ) {
        tracing::debug!(
            class = %self.class.name,
            member = member_name,
            code = %code,
            "member contract violation"
        );
        self.diagnostics.push(Diagnostic {
            member_name: member_name.to_string(),
            category: code.category(),
            code,
            owner_class: self.class.name.clone(),
            declared_in: declared_in.map(str::to_string),
            expected,
            actual,
        });
    }

    /// Defer an obligation to subclasses.
    pub(crate) fn defer(&mut self, obligation: Declaration) {
        tracing::trace!(
            class = %self.class.name,
            member = %obligation.name,
            kind = %obligation.kind,
            "deferring obligation"
        );
        if !self.pending.contains(&obligation) {
            self.pending.push(obligation);
        }
    }

    /// Defer the `kind` half of an obligation, keeping the original owner.
    pub(crate) fn defer_half(&mut self, source: &Declaration, kind: MemberKind, ty: &ValueType) {
        let half = Declaration {
            name: source.name.clone(),
            kind,
            is_abstract: true,
            is_readonly: false,
            value_type: ty.clone(),
            owner_class: source.owner_class.clone(),
            has_body: false,
        };
        self.defer(half);
    }
}
