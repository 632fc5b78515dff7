//! Assignability between value types.
//!
//! This is the relation the checker uses for covariant positions (a getter or
//! readonly field implementing an obligation, a method's return type) and for
//! contravariant positions (a setter's parameter). Mutable fields use
//! `is_identical` instead, since they are both read and written.

use crate::types::{FunctionType, LiteralValue, ValueType};
use contra_common::limits::MAX_RELATION_DEPTH;

/// Is `source` assignable to `target`?
pub fn is_assignable(source: &ValueType, target: &ValueType) -> bool {
    RelationChecker::new().is_assignable(source, target)
}

/// Are `a` and `b` the same type? Union member order does not matter.
pub fn is_identical(a: &ValueType, b: &ValueType) -> bool {
    RelationChecker::new().is_identical(a, b)
}

struct RelationChecker {
    depth: u32,
}

impl RelationChecker {
    const fn new() -> Self {
        Self { depth: 0 }
    }

    fn is_assignable(&mut self, source: &ValueType, target: &ValueType) -> bool {
        if self.depth >= MAX_RELATION_DEPTH {
            tracing::trace!(%source, %target, "relation depth limit reached");
            return true;
        }
        self.depth += 1;
        let result = self.is_assignable_inner(source, target);
        self.depth -= 1;
        result
    }

    /// Shares the depth budget with assignability.
    fn is_identical(&mut self, a: &ValueType, b: &ValueType) -> bool {
        if self.depth >= MAX_RELATION_DEPTH {
            tracing::trace!(%a, %b, "identity depth limit reached");
            return true;
        }
        self.depth += 1;
        let result = self.is_identical_inner(a, b);
        self.depth -= 1;
        result
    }

    fn is_identical_inner(&mut self, a: &ValueType, b: &ValueType) -> bool {
        match (a, b) {
            (ValueType::Union(left), ValueType::Union(right)) => {
                left.len() == right.len()
                    && left.iter().all(|l| right.iter().any(|r| self.is_identical(l, r)))
            }
            (ValueType::Function(left), ValueType::Function(right)) => {
                left.params.len() == right.params.len()
                    && left
                        .params
                        .iter()
                        .zip(&right.params)
                        .all(|(l, r)| self.is_identical(l, r))
                    && self.is_identical(&left.return_type, &right.return_type)
            }
            (ValueType::Union(_), _)
            | (_, ValueType::Union(_))
            | (ValueType::Function(_), _)
            | (_, ValueType::Function(_)) => false,
            _ => a == b,
        }
    }

    fn is_assignable_inner(&mut self, source: &ValueType, target: &ValueType) -> bool {
        if self.is_identical(source, target) {
            return true;
        }

        match (source, target) {
            (ValueType::Any, _) | (_, ValueType::Any) => true,
            (_, ValueType::Unknown) => true,
            (ValueType::Never, _) => true,
            // Every member of a source union must be accepted.
            (ValueType::Union(members), _) => {
                members.iter().all(|member| self.is_assignable(member, target))
            }
            // One member of a target union must accept the source.
            (_, ValueType::Union(members)) => {
                members.iter().any(|member| self.is_assignable(source, member))
            }
            (ValueType::Undefined, ValueType::Void) => true,
            (ValueType::Literal(lit), _) => literal_is_assignable(lit, target),
            (ValueType::Function(src), ValueType::Function(tgt)) => {
                self.is_function_assignable(src, tgt)
            }
            _ => false,
        }
    }

    /// Method-style function assignability: the source may take fewer
    /// parameters, parameters are compared bivariantly, and the return type
    /// is covariant. A `void` target return accepts any source return.
    fn is_function_assignable(&mut self, source: &FunctionType, target: &FunctionType) -> bool {
        if source.params.len() > target.params.len() {
            return false;
        }
        for (src_param, tgt_param) in source.params.iter().zip(&target.params) {
            if !self.is_assignable(tgt_param, src_param) && !self.is_assignable(src_param, tgt_param)
            {
                return false;
            }
        }
        if *target.return_type == ValueType::Void {
            return true;
        }
        self.is_assignable(&source.return_type, &target.return_type)
    }
}

fn literal_is_assignable(lit: &LiteralValue, target: &ValueType) -> bool {
    match target {
        ValueType::Literal(other) => lit == other,
        _ => lit.base_type() == *target,
    }
}

#[cfg(test)]
#[path = "tests/relations_tests.rs"]
mod tests;
