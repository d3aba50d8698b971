//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Documents
// =============================================================================

/// Digit count of an individual taxpayer ID (CPF)
pub const CPF_LENGTH: usize = 11;

/// Digit count of a company taxpayer ID (CNPJ)
pub const CNPJ_LENGTH: usize = 14;

/// Stored document type for individuals
pub const DOCUMENT_TYPE_CPF: &str = "BR:CPF";

/// Stored document type for companies
pub const DOCUMENT_TYPE_CNPJ: &str = "BR:CNPJ";

// =============================================================================
// Phones
// =============================================================================

/// Country assumed for phone numbers written without a `+` prefix
pub const DEFAULT_PHONE_COUNTRY: &str = "BR";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 3;
