//! Checking many classes at once.
//!
//! Classes are independent of each other once their ancestor chains are
//! flattened, so large batches are checked on the rayon pool. Results always
//! come back in input order.

use crate::class_checker::{ClassCheckResult, check_class};
use crate::context::CheckerOptions;
use contra_common::limits::PARALLEL_CHECK_THRESHOLD;
use contra_solver::ClassDeclaration;
use rayon::prelude::*;

pub fn check_classes(classes: &[ClassDeclaration], options: &CheckerOptions) -> Vec<ClassCheckResult> {
    let _span = tracing::info_span!("check_classes", classes = classes.len()).entered();

    if classes.len() < PARALLEL_CHECK_THRESHOLD {
        return classes.iter().map(|class| check_class(class, options)).collect();
    }

    classes
        .par_iter()
        .map(|class| check_class(class, options))
        .collect()
}

/// Check classes given in dependency order (every class after the abstract
/// classes it extends), re-raising each abstract class's pending obligations
/// into the ancestor chains of later classes that extend it.
///
/// An ancestor whose name matches an already-checked abstract class is
/// replaced by that class's pending obligations, then the concrete members it
/// declared itself, then any further concrete members the caller supplied.
/// The concrete members keep claiming their names, so obligations the
/// abstract class already met stay met when the caller also lists the
/// farther ancestors it implemented.
pub fn check_hierarchy(classes: &[ClassDeclaration], options: &CheckerOptions) -> Vec<ClassCheckResult> {
    let _span = tracing::info_span!("check_hierarchy", classes = classes.len()).entered();
    let mut results: Vec<ClassCheckResult> = Vec::with_capacity(classes.len());

    for class in classes {
        let mut resolved = class.clone();
        for ancestor in &mut resolved.ancestors {
            let checked = results
                .iter()
                .zip(classes)
                .find(|(r, _)| r.is_abstract && r.class_name == ancestor.name);
            if let Some((checked, declared)) = checked {
                let mut members = checked.pending.clone();
                let concrete = declared
                    .members
                    .iter()
                    .chain(&ancestor.members)
                    .filter(|d| !d.is_abstract);
                for decl in concrete {
                    if !members.contains(decl) {
                        members.push(decl.clone());
                    }
                }
                tracing::debug!(
                    ancestor = %ancestor.name,
                    pending = checked.pending.len(),
                    members = members.len(),
                    "substituted checked ancestor"
                );
                ancestor.members = members;
            }
        }
        results.push(check_class(&resolved, options));
    }

    results
}

#[cfg(test)]
#[path = "tests/batch_tests.rs"]
mod tests;
