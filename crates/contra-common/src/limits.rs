//! Centralized limits and thresholds for the member-contract checker.

/// Maximum nesting depth the assignability and identity relations descend
/// into, counted together.
///
/// Value types are finite trees, but a declaration collaborator can hand us
/// arbitrarily deep function-returning-function types. Past this depth both
/// relations answer "yes" rather than recurse further, so a pathological type
/// never turns into a false diagnostic or unbounded recursion while relating.
///
/// ```typescript
/// abstract f: () => () => () => /* ... */ string;
/// ```
pub const MAX_RELATION_DEPTH: u32 = 64;

/// Inline capacity for a member group's declaration list.
///
/// Nearly every name has one to three declarations (abstract + implementation,
/// or an accessor pair plus its obligation).
pub const MEMBER_GROUP_INLINE: usize = 4;

/// Below this many classes, batch checking stays on the calling thread.
pub const PARALLEL_CHECK_THRESHOLD: usize = 8;
