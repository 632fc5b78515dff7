use super::{DiagnosticCategory, DiagnosticCode, DiagnosticCodeEntry};

pub mod diagnostic_codes {
    pub const ABSTRACT_PROPERTIES_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS: u32 = 1253;
    pub const DUPLICATE_IDENTIFIER: u32 = 2300;
    pub const GET_ACCESSOR_RETURN_TYPE_MUST_BE_ASSIGNABLE_TO_SET_ACCESSOR_TYPE: u32 = 2380;
    pub const FUNCTION_IMPLEMENTATION_IS_MISSING: u32 = 2391;
    pub const PROPERTY_IS_NOT_ASSIGNABLE_TO_THE_SAME_PROPERTY_IN_BASE_TYPE: u32 = 2416;
    pub const CLASS_DEFINES_INSTANCE_MEMBER_PROPERTY_EXTENDED_CLASS_DEFINES_IT_AS_FUNCTION: u32 =
        2425;
    pub const NON_ABSTRACT_CLASS_DOES_NOT_IMPLEMENT_INHERITED_ABSTRACT_MEMBER_FROM_CLASS: u32 =
        2515;
    pub const CANNOT_ASSIGN_TO_BECAUSE_IT_IS_A_READ_ONLY_PROPERTY: u32 = 2540;
    pub const ACCESSORS_MUST_BOTH_BE_ABSTRACT_OR_NON_ABSTRACT: u32 = 2676;
}

pub static DIAGNOSTIC_CODES: &[DiagnosticCodeEntry] = &[
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrUnimplementedAbstractMember,
        ts_code: diagnostic_codes::NON_ABSTRACT_CLASS_DOES_NOT_IMPLEMENT_INHERITED_ABSTRACT_MEMBER_FROM_CLASS,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrKindMismatch,
        ts_code: diagnostic_codes::CLASS_DEFINES_INSTANCE_MEMBER_PROPERTY_EXTENDED_CLASS_DEFINES_IT_AS_FUNCTION,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrTypeMismatch,
        ts_code: diagnostic_codes::PROPERTY_IS_NOT_ASSIGNABLE_TO_THE_SAME_PROPERTY_IN_BASE_TYPE,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrAccessorTypeMismatch,
        ts_code: diagnostic_codes::GET_ACCESSOR_RETURN_TYPE_MUST_BE_ASSIGNABLE_TO_SET_ACCESSOR_TYPE,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrReadonlyViolation,
        ts_code: diagnostic_codes::CANNOT_ASSIGN_TO_BECAUSE_IT_IS_A_READ_ONLY_PROPERTY,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrDuplicateDeclaration,
        ts_code: diagnostic_codes::DUPLICATE_IDENTIFIER,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrMissingBody,
        ts_code: diagnostic_codes::FUNCTION_IMPLEMENTATION_IS_MISSING,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrAbstractMemberInConcreteClass,
        ts_code: diagnostic_codes::ABSTRACT_PROPERTIES_CAN_ONLY_APPEAR_WITHIN_AN_ABSTRACT_CLASS,
        category: DiagnosticCategory::Error,
    },
    DiagnosticCodeEntry {
        code: DiagnosticCode::ErrAccessorAbstractnessMismatch,
        ts_code: diagnostic_codes::ACCESSORS_MUST_BOTH_BE_ABSTRACT_OR_NON_ABSTRACT,
        category: DiagnosticCategory::Error,
    },
];
