//! Member Compatibility Checking
//!
//! Applies the compatibility rules to one member name at a time, in this
//! order:
//! 1. Missing implementations of abstract members
//! 2. Duplicate own declarations
//! 3. Kind compatibility, including accessor halves
//! 4. Readonly propagation
//! 5. Value types against the obligation, then getter/setter agreement
//! 6. Concrete methods and accessors without a body
//! 7. Strict-mode checks: abstract members in a concrete class, accessor
//!    pairs with mixed abstractness
//!
//! Once a name is reported as unimplemented, only the declaration-local
//! checks (duplicates, getter/setter agreement, strict checks) still run for
//! it.

use crate::context::CheckerContext;
use crate::diagnostics::DiagnosticArg;
use crate::obligation::{Implementation, Obligation, PropertyObligation};
use contra_common::{DiagnosticCode, MemberKind};
use contra_solver::{Declaration, MemberGroup, ValueType, is_assignable, is_identical};
use smallvec::SmallVec;

type DeclList<'a> = SmallVec<[&'a Declaration; 4]>;

/// What the kind check found, and so which of the later checks still apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KindOutcome {
    Compatible,
    /// Accessor implementation with no getter for a readable obligation.
    ReadHalfMissing,
    Mismatch,
}

pub struct MemberChecker<'a, 'ctx> {
    pub ctx: &'a mut CheckerContext<'ctx>,
}

impl<'a, 'ctx> MemberChecker<'a, 'ctx> {
    pub fn new(ctx: &'a mut CheckerContext<'ctx>) -> Self {
        Self { ctx }
    }

    /// Check every rule for one member name.
    pub fn check_group(&mut self, group: &MemberGroup<'_>) {
        let name = group.name;
        let own_abstract: DeclList<'_> = group.own_abstract().map(|e| e.declaration).collect();
        let own_concrete: DeclList<'_> = group.own_concrete().map(|e| e.declaration).collect();

        // An own abstract redeclaration is the nearest obligation and replaces
        // whatever the ancestors required.
        let obligation = if own_abstract.is_empty() {
            Obligation::from_declarations(group.inherited_abstract().map(|e| e.declaration))
        } else {
            Obligation::from_declarations(own_abstract.iter().copied())
        };
        let constraint = group.inherited_constraints().map(|e| e.declaration).next();

        tracing::trace!(
            member = name,
            own_abstract = own_abstract.len(),
            own_concrete = own_concrete.len(),
            has_obligation = obligation.is_some(),
            "checking member"
        );

        // An obligation with nothing implementing it.
        if let Some(obligation) = obligation
            && own_concrete.is_empty()
        {
            if self.ctx.is_abstract_class() {
                for decl in obligation.declarations() {
                    self.ctx.defer(decl.clone());
                }
            } else {
                self.ctx.error(
                    name,
                    DiagnosticCode::ErrUnimplementedAbstractMember,
                    Some(obligation.primary().owner_class.as_str()),
                    DiagnosticArg::Kind(obligation.kind()),
                    DiagnosticArg::None,
                );
                self.check_duplicates(name, &own_abstract);
                self.check_accessor_pair_types(name, &own_abstract);
                self.check_strict_rules(name, &own_abstract, &own_concrete);
                return;
            }
        }

        // Duplicates
        self.check_duplicates(name, &own_abstract);
        self.check_duplicates(name, &own_concrete);

        if let Some(implementation) = Implementation::from_declarations(&own_concrete) {
            match obligation {
                // A kind mismatch skips readonly and type checks; a reported
                // missing read half skips readonly. A deferred one does not.
                Some(obligation) => match self.check_kind(name, obligation, implementation) {
                    KindOutcome::Compatible => {
                        self.check_readonly(name, Some(obligation), constraint, implementation);
                        self.check_obligation_types(name, obligation, implementation);
                    }
                    KindOutcome::ReadHalfMissing => {
                        if self.ctx.is_abstract_class() {
                            self.check_readonly(name, Some(obligation), constraint, implementation);
                        }
                        self.check_obligation_types(name, obligation, implementation);
                    }
                    KindOutcome::Mismatch => {}
                },
                None => self.check_readonly(name, None, constraint, implementation),
            }
        }

        // Getter/setter agreement, at most one report per name.
        if !self.check_accessor_pair_types(name, &own_abstract) {
            self.check_accessor_pair_types(name, &own_concrete);
        }

        // Bodies
        self.check_bodies(name, &own_concrete);

        self.check_strict_rules(name, &own_abstract, &own_concrete);
    }

    // =========================================================================
    // Duplicates
    // =========================================================================

    /// Report the first declaration that collides with an earlier one in the
    /// same partition: a second getter, a second setter, or a field/method
    /// sharing the name with anything else.
    fn check_duplicates(&mut self, name: &str, decls: &[&Declaration]) {
        let mut fields_or_methods = 0usize;
        let mut getters = 0usize;
        let mut setters = 0usize;

        for decl in decls {
            let collides = match decl.kind {
                MemberKind::Field | MemberKind::Method => fields_or_methods + getters + setters > 0,
                MemberKind::GetAccessor => fields_or_methods > 0 || getters > 0,
                MemberKind::SetAccessor => fields_or_methods > 0 || setters > 0,
            };
            if collides {
                self.ctx.error(
                    name,
                    DiagnosticCode::ErrDuplicateDeclaration,
                    None,
                    DiagnosticArg::Kind(decl.kind),
                    DiagnosticArg::Count(decls.len()),
                );
                return;
            }
            match decl.kind {
                MemberKind::Field | MemberKind::Method => fields_or_methods += 1,
                MemberKind::GetAccessor => getters += 1,
                MemberKind::SetAccessor => setters += 1,
            }
        }
    }

    // =========================================================================
    // Kinds
    // =========================================================================

    fn check_kind(
        &mut self,
        name: &str,
        obligation: Obligation<'_>,
        implementation: Implementation<'_>,
    ) -> KindOutcome {
        match (obligation, implementation) {
            (Obligation::Method(_), Implementation::Method(_)) => KindOutcome::Compatible,
            (Obligation::Method(_), Implementation::Field(_))
            | (Obligation::Method(_), Implementation::Accessors { .. })
            | (Obligation::Property(_), Implementation::Method(_)) => {
                self.report_kind_mismatch(name, obligation, implementation);
                KindOutcome::Mismatch
            }
            (Obligation::Property(property), Implementation::Field(field)) => {
                if property.requires_write() && field.is_readonly {
                    if let (Some(source), Some(ty)) =
                        (property.write_source(), property.write_type())
                    {
                        self.report_missing_half(name, source, MemberKind::SetAccessor, ty, field.kind);
                    }
                    return KindOutcome::Compatible;
                }
                if !property.requires_read() && !self.ctx.options.field_satisfies_write_only {
                    self.report_kind_mismatch(name, obligation, implementation);
                    return KindOutcome::Mismatch;
                }
                KindOutcome::Compatible
            }
            (Obligation::Property(property), Implementation::Accessors { getter, setter }) => {
                let mut outcome = KindOutcome::Compatible;
                if property.requires_read()
                    && getter.is_none()
                    && let (Some(source), Some(ty)) = (property.read_source(), property.read_type())
                {
                    self.report_missing_half(
                        name,
                        source,
                        MemberKind::GetAccessor,
                        ty,
                        MemberKind::SetAccessor,
                    );
                    outcome = KindOutcome::ReadHalfMissing;
                }
                if property.requires_write()
                    && setter.is_none()
                    && let (Some(source), Some(ty)) = (property.write_source(), property.write_type())
                {
                    self.report_missing_half(
                        name,
                        source,
                        MemberKind::SetAccessor,
                        ty,
                        MemberKind::GetAccessor,
                    );
                }
                outcome
            }
        }
    }

    /// One direction of a property obligation has no implementation. An
    /// abstract class defers it; anything else reports it as unimplemented.
    fn report_missing_half(
        &mut self,
        name: &str,
        source: &Declaration,
        missing: MemberKind,
        ty: &ValueType,
        present: MemberKind,
    ) {
        if self.ctx.is_abstract_class() {
            self.ctx.defer_half(source, missing, ty);
            return;
        }
        self.ctx.error(
            name,
            DiagnosticCode::ErrUnimplementedAbstractMember,
            Some(source.owner_class.as_str()),
            DiagnosticArg::Kind(missing),
            DiagnosticArg::Kind(present),
        );
    }

    fn report_kind_mismatch(
        &mut self,
        name: &str,
        obligation: Obligation<'_>,
        implementation: Implementation<'_>,
    ) {
        self.ctx.error(
            name,
            DiagnosticCode::ErrKindMismatch,
            Some(obligation.primary().owner_class.as_str()),
            DiagnosticArg::Kind(obligation.kind()),
            DiagnosticArg::Kind(implementation.kind()),
        );
    }

    // =========================================================================
    // Readonly
    // =========================================================================

    fn check_readonly(
        &mut self,
        name: &str,
        obligation: Option<Obligation<'_>>,
        constraint: Option<&Declaration>,
        implementation: Implementation<'_>,
    ) {
        let read_only_source = obligation
            .filter(Obligation::is_read_only)
            .map(|o| o.primary())
            .or(constraint);
        let Some(source) = read_only_source else {
            return;
        };
        let Some(writer) = implementation.writer() else {
            return;
        };
        self.ctx.error(
            name,
            DiagnosticCode::ErrReadonlyViolation,
            Some(source.owner_class.as_str()),
            DiagnosticArg::Kind(source.kind),
            DiagnosticArg::Kind(writer.kind),
        );
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn check_obligation_types(
        &mut self,
        name: &str,
        obligation: Obligation<'_>,
        implementation: Implementation<'_>,
    ) {
        let mismatch = match (obligation, implementation) {
            (Obligation::Method(required), Implementation::Method(method)) => {
                mismatch_unless(is_assignable(&method.value_type, &required.value_type), required, method)
            }
            (Obligation::Property(property), Implementation::Field(field)) => {
                field_type_mismatch(&property, field)
            }
            (Obligation::Property(property), Implementation::Accessors { getter, setter }) => {
                accessor_type_mismatch(&property, getter, setter)
            }
            // Kind mismatches never get here.
            (Obligation::Method(_), Implementation::Field(_))
            | (Obligation::Method(_), Implementation::Accessors { .. })
            | (Obligation::Property(_), Implementation::Method(_)) => None,
        };

        if let Some((expected, actual)) = mismatch {
            self.ctx.error(
                name,
                DiagnosticCode::ErrTypeMismatch,
                Some(obligation.primary().owner_class.as_str()),
                DiagnosticArg::Type(expected.clone()),
                DiagnosticArg::Type(actual.clone()),
            );
        }
    }

    /// Getter and setter declared together must describe the same property
    /// type. Returns true if a mismatch was reported.
    fn check_accessor_pair_types(&mut self, name: &str, decls: &[&Declaration]) -> bool {
        let getter = decls.iter().find(|d| d.kind == MemberKind::GetAccessor);
        let setter = decls.iter().find(|d| d.kind == MemberKind::SetAccessor);
        let (Some(getter), Some(setter)) = (getter, setter) else {
            return false;
        };
        if is_identical(&getter.value_type.widen(), &setter.value_type.widen()) {
            return false;
        }
        self.ctx.error(
            name,
            DiagnosticCode::ErrAccessorTypeMismatch,
            None,
            DiagnosticArg::Type(getter.value_type.clone()),
            DiagnosticArg::Type(setter.value_type.clone()),
        );
        true
    }

    // =========================================================================
    // Bodies
    // =========================================================================

    fn check_bodies(&mut self, name: &str, own_concrete: &[&Declaration]) {
        for decl in own_concrete {
            if decl.kind.requires_body() && !decl.has_body {
                self.ctx.error(
                    name,
                    DiagnosticCode::ErrMissingBody,
                    None,
                    DiagnosticArg::Kind(decl.kind),
                    DiagnosticArg::None,
                );
            }
        }
    }

    // =========================================================================
    // Strict checks
    // =========================================================================

    fn check_strict_rules(
        &mut self,
        name: &str,
        own_abstract: &[&Declaration],
        own_concrete: &[&Declaration],
    ) {
        if self.ctx.options.report_abstract_in_concrete_class && !self.ctx.is_abstract_class() {
            for decl in own_abstract {
                self.ctx.error(
                    name,
                    DiagnosticCode::ErrAbstractMemberInConcreteClass,
                    None,
                    DiagnosticArg::Kind(decl.kind),
                    DiagnosticArg::None,
                );
            }
        }

        if self.ctx.options.report_accessor_abstractness {
            let has = |decls: &[&Declaration], kind: MemberKind| decls.iter().any(|d| d.kind == kind);
            let abstract_get = has(own_abstract, MemberKind::GetAccessor);
            let abstract_set = has(own_abstract, MemberKind::SetAccessor);
            let concrete_get = has(own_concrete, MemberKind::GetAccessor);
            let concrete_set = has(own_concrete, MemberKind::SetAccessor);

            let getter_abstract_only = abstract_get && !abstract_set && concrete_set && !concrete_get;
            let setter_abstract_only = abstract_set && !abstract_get && concrete_get && !concrete_set;
            if getter_abstract_only || setter_abstract_only {
                let (abstract_half, concrete_half) = if getter_abstract_only {
                    (MemberKind::GetAccessor, MemberKind::SetAccessor)
                } else {
                    (MemberKind::SetAccessor, MemberKind::GetAccessor)
                };
                self.ctx.error(
                    name,
                    DiagnosticCode::ErrAccessorAbstractnessMismatch,
                    None,
                    DiagnosticArg::Kind(abstract_half),
                    DiagnosticArg::Kind(concrete_half),
                );
            }
        }
    }
}

fn mismatch_unless<'d>(
    ok: bool,
    required: &'d Declaration,
    actual: &'d Declaration,
) -> Option<(&'d ValueType, &'d ValueType)> {
    (!ok).then_some((&required.value_type, &actual.value_type))
}

/// A readonly field is only read, so it may narrow the type. A mutable field
/// is read and written, so after literal widening it must match exactly.
fn field_type_mismatch<'d>(
    property: &PropertyObligation<'d>,
    field: &'d Declaration,
) -> Option<(&'d ValueType, &'d ValueType)> {
    let actual = &field.value_type;
    if field.is_readonly {
        let expected = property.read_type()?;
        return (!is_assignable(actual, expected)).then_some((expected, actual));
    }
    let expected = property.read_type().or(property.write_type())?;
    (!is_identical(&actual.widen(), &expected.widen())).then_some((expected, actual))
}

/// The getter must produce something the obligation's readers accept; the
/// setter must accept anything the obligation's writers may store.
fn accessor_type_mismatch<'d>(
    property: &PropertyObligation<'d>,
    getter: Option<&'d Declaration>,
    setter: Option<&'d Declaration>,
) -> Option<(&'d ValueType, &'d ValueType)> {
    if let (Some(expected), Some(getter)) = (property.read_type(), getter)
        && !is_assignable(&getter.value_type, expected)
    {
        return Some((expected, &getter.value_type));
    }
    if let (Some(expected), Some(setter)) = (property.write_type(), setter)
        && !is_assignable(expected, &setter.value_type)
    {
        return Some((expected, &setter.value_type));
    }
    None
}

#[cfg(test)]
#[path = "tests/member_checker_tests.rs"]
mod tests;
