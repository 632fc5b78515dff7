//! Common types and utilities for the contra member-contract checker.
//!
//! This crate provides foundational types used across all contra crates:
//! - Member kinds (`MemberKind`) shared by the solver and the checker
//! - Diagnostic categories and codes (`DiagnosticCategory`, `DiagnosticCode`)
//! - Centralized limits

// Member kind vocabulary
pub mod member_kind;
pub use member_kind::MemberKind;

// Diagnostic categories and codes
pub mod diagnostics;
pub use diagnostics::{DiagnosticCategory, DiagnosticCode};

// Centralized limits and thresholds
pub mod limits;
