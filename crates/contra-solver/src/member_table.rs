//! Member Table Construction
//!
//! Merges a class's own member declarations with the abstract obligations it
//! inherits, producing one group of declarations per member name.
//!
//! Responsibilities:
//! - Record inherited abstract declarations, nearest ancestor first
//!   (first-seen wins; further ancestors never override a nearer one)
//! - Record inherited read-only constraints (concrete readonly fields and
//!   getters without a setter) the same first-seen way
//! - Append the class's own declarations to their groups
//!
//! Grouping never fails. Malformed combinations (two own getters, a field next
//! to an accessor) are kept as-is and reported by the checker.
//!
//! The table borrows from the `ClassDeclaration` it was built from and is
//! meant to be dropped once the class has been checked.

use crate::declarations::{Ancestor, ClassDeclaration, Declaration};
use contra_common::MemberKind;
use contra_common::limits::MEMBER_GROUP_INLINE;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Where a member-group entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOrigin<'a> {
    /// Declared by the class being checked.
    Own,
    /// Inherited from the named ancestor.
    Inherited { ancestor: &'a str },
}

#[derive(Clone, Copy, Debug)]
pub struct MemberEntry<'a> {
    pub declaration: &'a Declaration,
    pub origin: EntryOrigin<'a>,
}

impl<'a> MemberEntry<'a> {
    pub const fn is_own(&self) -> bool {
        matches!(self.origin, EntryOrigin::Own)
    }

    pub const fn is_abstract(&self) -> bool {
        self.declaration.is_abstract
    }

    /// Name of the ancestor this entry was inherited from, if any.
    pub const fn ancestor(&self) -> Option<&'a str> {
        match self.origin {
            EntryOrigin::Own => None,
            EntryOrigin::Inherited { ancestor } => Some(ancestor),
        }
    }
}

/// All declarations sharing one member name in a class's resolution scope.
#[derive(Clone, Debug)]
pub struct MemberGroup<'a> {
    pub name: &'a str,
    entries: SmallVec<[MemberEntry<'a>; MEMBER_GROUP_INLINE]>,
}

impl<'a> MemberGroup<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            entries: SmallVec::new(),
        }
    }

    pub fn entries(&self) -> &[MemberEntry<'a>] {
        &self.entries
    }

    /// Declarations made by the class itself, abstract or not.
    pub fn own(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.entries.iter().filter(|e| e.is_own())
    }

    /// Own declarations that are abstract.
    pub fn own_abstract(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.own().filter(|e| e.is_abstract())
    }

    /// Own declarations that implement something.
    pub fn own_concrete(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.own().filter(|e| !e.is_abstract())
    }

    /// Inherited abstract declarations (the obligations from ancestors).
    pub fn inherited_abstract(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.entries
            .iter()
            .filter(|e| !e.is_own() && e.is_abstract())
    }

    /// Inherited concrete read-only declarations.
    pub fn inherited_constraints(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.entries
            .iter()
            .filter(|e| !e.is_own() && !e.is_abstract())
    }

    /// Abstract declarations from anywhere in scope.
    pub fn abstract_entries(&self) -> impl Iterator<Item = &MemberEntry<'a>> {
        self.entries.iter().filter(|e| e.is_abstract())
    }

    pub fn has_abstract(&self) -> bool {
        self.abstract_entries().next().is_some()
    }

    pub fn has_own_concrete(&self) -> bool {
        self.own_concrete().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, declaration: &'a Declaration, origin: EntryOrigin<'a>) {
        self.entries.push(MemberEntry {
            declaration,
            origin,
        });
    }
}

/// Insertion-ordered mapping from member name to its group.
#[derive(Clone, Debug, Default)]
pub struct MemberTable<'a> {
    groups: IndexMap<&'a str, MemberGroup<'a>>,
}

impl<'a> MemberTable<'a> {
    pub fn get(&self, name: &str) -> Option<&MemberGroup<'a>> {
        self.groups.get(name)
    }

    /// Groups in builder order: ancestor-introduced names first (nearest
    /// ancestor first), then names the class introduces itself.
    pub fn groups(&self) -> impl Iterator<Item = &MemberGroup<'a>> {
        self.groups.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group_mut(&mut self, name: &'a str) -> &mut MemberGroup<'a> {
        self.groups
            .entry(name)
            .or_insert_with(|| MemberGroup::new(name))
    }
}

/// Builder for a class's member table.
///
/// This is a pure merge: it knows nothing about compatibility rules. It takes
/// the class's own declarations and its ancestor chain, and groups everything
/// by member name.
pub struct MemberTableBuilder<'a> {
    class: &'a ClassDeclaration,
}

impl<'a> MemberTableBuilder<'a> {
    pub const fn new(class: &'a ClassDeclaration) -> Self {
        Self { class }
    }

    pub fn build(self) -> MemberTable<'a> {
        let class = self.class;
        let mut table = MemberTable::default();
        // Names some nearer ancestor already spoke for, whether or not it
        // contributed an entry (a concrete mutable member claims the name
        // without being recorded).
        let mut claimed: FxHashSet<&'a str> = FxHashSet::default();

        // 1. Inherited obligations and constraints, nearest ancestor first.
        for ancestor in &class.ancestors {
            let mut claimed_here: SmallVec<[&'a str; 8]> = SmallVec::new();
            for decl in &ancestor.members {
                let name = decl.name.as_str();
                if claimed.contains(name) {
                    continue;
                }
                if decl.is_abstract || is_read_only_constraint(ancestor, decl) {
                    table.group_mut(name).push(
                        decl,
                        EntryOrigin::Inherited {
                            ancestor: ancestor.name.as_str(),
                        },
                    );
                }
                if !claimed_here.contains(&name) {
                    claimed_here.push(name);
                }
            }
            // Claim after the whole ancestor is walked so a getter and setter
            // from the same ancestor both land in the group.
            claimed.extend(claimed_here);
        }

        // 2. Own declarations, regardless of what is already recorded.
        for decl in &class.members {
            table.group_mut(decl.name.as_str()).push(decl, EntryOrigin::Own);
        }

        tracing::debug!(
            class = %class.name,
            ancestors = class.ancestors.len(),
            own_members = class.members.len(),
            names = table.len(),
            "built member table"
        );

        table
    }
}

/// A concrete ancestor declaration that forbids writes in descendants:
/// a readonly field, or a getter with no setter of the same name in that
/// ancestor.
fn is_read_only_constraint(ancestor: &Ancestor, decl: &Declaration) -> bool {
    match decl.kind {
        MemberKind::Field => decl.is_readonly,
        MemberKind::GetAccessor => !ancestor
            .members
            .iter()
            .any(|other| other.name == decl.name && other.kind == MemberKind::SetAccessor),
        MemberKind::Method | MemberKind::SetAccessor => false,
    }
}

#[cfg(test)]
#[path = "tests/member_table_tests.rs"]
mod tests;
