//! Obligation and implementation shapes for one member name.
//!
//! An obligation is what the abstract declarations of a name require; an
//! implementation is what the class's own concrete declarations supply. Both
//! take the first declaration of each slot; extra declarations are reported as
//! duplicates elsewhere and otherwise ignored.

use contra_common::MemberKind;
use contra_solver::{Declaration, ValueType};

/// What the abstract declarations of one name require.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Obligation<'a> {
    Method(&'a Declaration),
    Property(PropertyObligation<'a>),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PropertyObligation<'a> {
    /// First declaration of the name; diagnostics point here.
    pub primary: &'a Declaration,
    pub field: Option<&'a Declaration>,
    pub getter: Option<&'a Declaration>,
    pub setter: Option<&'a Declaration>,
}

impl<'a> Obligation<'a> {
    /// Shape the obligation from abstract declarations in scope order. The
    /// first declaration decides between a method and a property obligation.
    pub fn from_declarations(decls: impl IntoIterator<Item = &'a Declaration>) -> Option<Self> {
        let mut iter = decls.into_iter().peekable();
        let first = *iter.peek()?;
        match first.kind {
            MemberKind::Method => Some(Obligation::Method(first)),
            MemberKind::Field | MemberKind::GetAccessor | MemberKind::SetAccessor => {
                let mut property = PropertyObligation {
                    primary: first,
                    field: None,
                    getter: None,
                    setter: None,
                };
                for decl in iter {
                    let slot = match decl.kind {
                        MemberKind::Field => &mut property.field,
                        MemberKind::GetAccessor => &mut property.getter,
                        MemberKind::SetAccessor => &mut property.setter,
                        MemberKind::Method => continue,
                    };
                    if slot.is_none() {
                        *slot = Some(decl);
                    }
                }
                Some(Obligation::Property(property))
            }
        }
    }

    /// The declaration diagnostics point at.
    pub fn primary(&self) -> &'a Declaration {
        match *self {
            Obligation::Method(decl) => decl,
            Obligation::Property(property) => property.primary,
        }
    }

    pub fn kind(&self) -> MemberKind {
        self.primary().kind
    }

    /// Every declaration the obligation was built from.
    pub fn declarations(&self) -> Vec<&'a Declaration> {
        match *self {
            Obligation::Method(decl) => vec![decl],
            Obligation::Property(property) => [property.field, property.getter, property.setter]
                .into_iter()
                .flatten()
                .collect(),
        }
    }

    /// Readonly field or get-only accessor.
    pub fn is_read_only(&self) -> bool {
        match self {
            Obligation::Method(_) => false,
            Obligation::Property(property) => property.requires_read() && !property.requires_write(),
        }
    }
}

impl<'a> PropertyObligation<'a> {
    pub fn requires_read(&self) -> bool {
        self.field.is_some() || self.getter.is_some()
    }

    pub fn requires_write(&self) -> bool {
        self.field.is_some_and(|f| !f.is_readonly) || self.setter.is_some()
    }

    /// Type a reader of the property must be able to rely on.
    pub fn read_type(&self) -> Option<&'a ValueType> {
        self.field.or(self.getter).map(|d| &d.value_type)
    }

    /// Type a writer of the property must be allowed to store.
    pub fn write_type(&self) -> Option<&'a ValueType> {
        self.setter
            .or(self.field.filter(|f| !f.is_readonly))
            .map(|d| &d.value_type)
    }

    /// The declaration that requires reading.
    pub fn read_source(&self) -> Option<&'a Declaration> {
        self.field.or(self.getter)
    }

    /// The declaration that requires writing.
    pub fn write_source(&self) -> Option<&'a Declaration> {
        self.setter.or(self.field.filter(|f| !f.is_readonly))
    }
}

/// What the class's own concrete declarations of one name supply.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Implementation<'a> {
    Field(&'a Declaration),
    Method(&'a Declaration),
    Accessors {
        getter: Option<&'a Declaration>,
        setter: Option<&'a Declaration>,
    },
}

impl<'a> Implementation<'a> {
    /// Shape the implementation from own concrete declarations. The first
    /// declaration decides the shape.
    pub fn from_declarations(decls: &[&'a Declaration]) -> Option<Self> {
        let first = *decls.first()?;
        let implementation = match first.kind {
            MemberKind::Field => Implementation::Field(first),
            MemberKind::Method => Implementation::Method(first),
            MemberKind::GetAccessor | MemberKind::SetAccessor => Implementation::Accessors {
                getter: decls
                    .iter()
                    .copied()
                    .find(|d| d.kind == MemberKind::GetAccessor),
                setter: decls
                    .iter()
                    .copied()
                    .find(|d| d.kind == MemberKind::SetAccessor),
            },
        };
        Some(implementation)
    }

    /// Kind reported as the "actual" side of a diagnostic.
    pub fn kind(&self) -> MemberKind {
        match self {
            Implementation::Field(_) => MemberKind::Field,
            Implementation::Method(_) => MemberKind::Method,
            Implementation::Accessors { getter: Some(_), .. } => MemberKind::GetAccessor,
            Implementation::Accessors { getter: None, .. } => MemberKind::SetAccessor,
        }
    }

    /// The declaration that adds write capability, if any: a setter or a
    /// non-readonly field.
    pub fn writer(&self) -> Option<&'a Declaration> {
        match self {
            Implementation::Field(field) => (!field.is_readonly).then_some(*field),
            Implementation::Accessors { setter, .. } => *setter,
            Implementation::Method(_) => None,
        }
    }
}
