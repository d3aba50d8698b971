//! Field validators for `#[validate(custom(function = ...))]`.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use crate::{document, phone};

/// Accepts any valid CPF or CNPJ.
pub fn validate_document(value: &str) -> Result<(), ValidationError> {
    if document::validate(value) {
        Ok(())
    } else {
        Err(invalid("document", "Invalid document format"))
    }
}

/// Accepts a valid CNPJ only.
pub fn validate_company_document(value: &str) -> Result<(), ValidationError> {
    if document::validate_cnpj(value) {
        Ok(())
    } else {
        Err(invalid("cnpj", "Invalid company document format"))
    }
}

/// Accepts phone numbers of a known country.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if phone::is_valid(value) {
        Ok(())
    } else {
        Err(invalid("phone", "Invalid phone number format"))
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// First field message of a report, fields taken in name order.
pub fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string())
}
