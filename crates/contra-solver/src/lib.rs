//! Semantic types and member tables for the contra checker.
//!
//! - `types` - `ValueType`, the semantic type attached to every declaration
//! - `relations` - the assignability relation between value types
//! - `declarations` - declaration records handed over by the parser side
//! - `member_table` - merges own and inherited declarations per member name

pub mod declarations;
pub mod member_table;
pub mod relations;
pub mod types;

pub use declarations::{Ancestor, AncestorKind, ClassDeclaration, Declaration};
pub use member_table::{EntryOrigin, MemberEntry, MemberGroup, MemberTable, MemberTableBuilder};
pub use relations::{is_assignable, is_identical};
pub use types::{FunctionType, LiteralValue, ValueType};
