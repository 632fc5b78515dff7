//! Class Checking
//!
//! Builds the member table for one class, runs the member rules over every
//! name in table order, and collects the result. Checking is pure: the same
//! class and options always produce the same diagnostics in the same order.

use crate::context::{CheckerContext, CheckerOptions};
use crate::diagnostics::Diagnostic;
use crate::member_checker::MemberChecker;
use contra_common::DiagnosticCode;
use contra_solver::{Ancestor, ClassDeclaration, Declaration, MemberTableBuilder};
use serde::{Deserialize, Serialize};

/// Outcome of checking one class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCheckResult {
    pub class_name: String,
    pub is_abstract: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Obligations an abstract class leaves unimplemented. Always empty for
    /// concrete classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pending: Vec<Declaration>,
}

impl ClassCheckResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn codes(&self) -> Vec<DiagnosticCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }

    pub fn diagnostics_for<'s>(&'s self, member: &'s str) -> impl Iterator<Item = &'s Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.member_name == member)
    }

    /// The class as seen by its subclasses: an ancestor carrying the pending
    /// obligations.
    pub fn as_ancestor(&self) -> Ancestor {
        Ancestor::from_pending(self.class_name.clone(), self.pending.clone())
    }
}

/// Check one class against its own declarations and its ancestor chain.
pub fn check_class(class: &ClassDeclaration, options: &CheckerOptions) -> ClassCheckResult {
    let _span = tracing::debug_span!("check_class", class = %class.name).entered();

    let table = MemberTableBuilder::new(class).build();
    let mut ctx = CheckerContext::new(class, options);
    {
        let mut checker = MemberChecker::new(&mut ctx);
        for group in table.groups() {
            checker.check_group(group);
        }
    }

    // An abstract class also hands its own abstract members down.
    if class.is_abstract {
        for decl in class.members.iter().filter(|d| d.is_abstract) {
            ctx.defer(decl.clone());
        }
    }

    tracing::debug!(
        class = %class.name,
        diagnostics = ctx.diagnostics.len(),
        pending = ctx.pending.len(),
        "checked class"
    );

    ClassCheckResult {
        class_name: class.name.clone(),
        is_abstract: class.is_abstract,
        diagnostics: ctx.diagnostics,
        pending: ctx.pending,
    }
}

#[cfg(test)]
#[path = "tests/class_checker_tests.rs"]
mod tests;
