//! Declaration records.
//!
//! These are produced once per class by the parser/binder side and are never
//! mutated afterwards. The ancestor chain is an explicit ordered list, nearest
//! first, already flattened by the caller.

use crate::types::ValueType;
use contra_common::MemberKind;
use serde::{Deserialize, Serialize};

/// One member occurrence in a class or interface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_readonly: bool,
    pub value_type: ValueType,
    pub owner_class: String,
    /// For methods and accessors: whether an implementation body is present.
    /// For fields: whether an initializer is present (never checked).
    #[serde(default = "default_has_body")]
    pub has_body: bool,
}

const fn default_has_body() -> bool {
    true
}

impl Declaration {
    /// A concrete declaration with a body where the kind needs one.
    pub fn new(
        owner_class: impl Into<String>,
        name: impl Into<String>,
        kind: MemberKind,
        value_type: ValueType,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            is_readonly: false,
            value_type,
            owner_class: owner_class.into(),
            has_body: true,
        }
    }

    pub fn field(owner: impl Into<String>, name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(owner, name, MemberKind::Field, ty)
    }

    pub fn method(owner: impl Into<String>, name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(owner, name, MemberKind::Method, ty)
    }

    pub fn getter(owner: impl Into<String>, name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(owner, name, MemberKind::GetAccessor, ty)
    }

    pub fn setter(owner: impl Into<String>, name: impl Into<String>, ty: ValueType) -> Self {
        Self::new(owner, name, MemberKind::SetAccessor, ty)
    }

    /// Mark as `abstract`. Abstract members never have a body.
    #[must_use]
    pub fn make_abstract(mut self) -> Self {
        self.is_abstract = true;
        self.has_body = false;
        self
    }

    #[must_use]
    pub fn make_readonly(mut self) -> Self {
        self.is_readonly = true;
        self
    }

    /// Drop the body, leaving e.g. `get x(): string;` in a concrete position.
    #[must_use]
    pub fn without_body(mut self) -> Self {
        self.has_body = false;
        self
    }
}

/// Whether an ancestor entry is a base class or an implemented interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AncestorKind {
    #[default]
    Class,
    Interface,
}

/// An ancestor in the flattened chain, exposing its member declarations.
///
/// Only abstract declarations become obligations. Concrete readonly fields and
/// getters without a setter in the same ancestor restrict writes in
/// descendants but do not need an implementation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ancestor {
    pub name: String,
    #[serde(default)]
    pub kind: AncestorKind,
    #[serde(default)]
    pub members: Vec<Declaration>,
}

impl Ancestor {
    pub fn new(name: impl Into<String>, kind: AncestorKind, members: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            kind,
            members,
        }
    }

    pub fn class(name: impl Into<String>, members: Vec<Declaration>) -> Self {
        Self::new(name, AncestorKind::Class, members)
    }

    /// Interface members are abstract by construction.
    pub fn interface(name: impl Into<String>, members: Vec<Declaration>) -> Self {
        let members = members
            .into_iter()
            .map(Declaration::make_abstract)
            .collect();
        Self::new(name, AncestorKind::Interface, members)
    }

    /// Re-raise the deferred obligations of an abstract class so that its
    /// subclasses see them exactly as if the class had declared them abstract.
    pub fn from_pending(class_name: impl Into<String>, pending: Vec<Declaration>) -> Self {
        Self::new(class_name, AncestorKind::Class, pending)
    }
}

/// A class to check: its own declarations plus its ordered ancestor chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub members: Vec<Declaration>,
    /// Nearest ancestor first.
    #[serde(default)]
    pub ancestors: Vec<Ancestor>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            members: Vec::new(),
            ancestors: Vec::new(),
        }
    }

    #[must_use]
    pub fn make_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: Declaration) -> Self {
        self.members.push(member);
        self
    }

    #[must_use]
    pub fn with_ancestor(mut self, ancestor: Ancestor) -> Self {
        self.ancestors.push(ancestor);
        self
    }
}
