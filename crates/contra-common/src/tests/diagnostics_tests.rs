use super::*;

#[test]
fn every_code_has_an_entry() {
    let codes = [
        DiagnosticCode::ErrUnimplementedAbstractMember,
        DiagnosticCode::ErrKindMismatch,
        DiagnosticCode::ErrTypeMismatch,
        DiagnosticCode::ErrAccessorTypeMismatch,
        DiagnosticCode::ErrReadonlyViolation,
        DiagnosticCode::ErrDuplicateDeclaration,
        DiagnosticCode::ErrMissingBody,
        DiagnosticCode::ErrAbstractMemberInConcreteClass,
        DiagnosticCode::ErrAccessorAbstractnessMismatch,
    ];
    for code in codes {
        assert!(get_code_entry(code).is_some(), "missing entry for {code}");
        assert_eq!(code.category(), DiagnosticCategory::Error);
    }
    assert_eq!(DIAGNOSTIC_CODES.len(), codes.len());
}

#[test]
fn ts_codes_are_unique_and_reversible() {
    for entry in DIAGNOSTIC_CODES {
        assert_eq!(code_from_ts_code(entry.ts_code), Some(entry.code));
    }
    assert_eq!(code_from_ts_code(9999), None);
}

#[test]
fn unimplemented_member_maps_to_ts2515() {
    assert_eq!(DiagnosticCode::ErrUnimplementedAbstractMember.ts_code(), 2515);
    assert_eq!(DiagnosticCode::ErrDuplicateDeclaration.ts_code(), 2300);
}

#[test]
fn code_serializes_as_screaming_name() {
    let json = serde_json::to_string(&DiagnosticCode::ErrReadonlyViolation).unwrap();
    assert_eq!(json, "\"ERR_READONLY_VIOLATION\"");
    assert_eq!(
        DiagnosticCode::ErrReadonlyViolation.to_string(),
        "ERR_READONLY_VIOLATION"
    );
}
