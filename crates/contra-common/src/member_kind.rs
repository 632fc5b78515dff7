//! Member Kinds
//!
//! The closed set of class member shapes the checker understands. Every rule
//! matches on this enum exhaustively, so adding a kind forces every rule to
//! decide what the new kind means.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The syntactic kind of a class or interface member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    /// Property declaration: `x: T` or `x = init`.
    Field,
    /// Method declaration: `m(): T`.
    Method,
    /// `get x(): T`
    GetAccessor,
    /// `set x(v: T)`
    SetAccessor,
}

impl MemberKind {
    /// True for `GetAccessor` and `SetAccessor`.
    pub const fn is_accessor(self) -> bool {
        match self {
            MemberKind::GetAccessor | MemberKind::SetAccessor => true,
            MemberKind::Field | MemberKind::Method => false,
        }
    }

    /// True for kinds that describe a property (fields and accessors), as
    /// opposed to a callable member.
    pub const fn is_property_like(self) -> bool {
        match self {
            MemberKind::Field | MemberKind::GetAccessor | MemberKind::SetAccessor => true,
            MemberKind::Method => false,
        }
    }

    /// Whether a declaration of this kind must carry an implementation body
    /// when it is not abstract. Fields never do.
    pub const fn requires_body(self) -> bool {
        match self {
            MemberKind::Method | MemberKind::GetAccessor | MemberKind::SetAccessor => true,
            MemberKind::Field => false,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Method => "method",
            MemberKind::GetAccessor => "get accessor",
            MemberKind::SetAccessor => "set accessor",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
