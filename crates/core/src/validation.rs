//! Structural validation of incoming requests.
//!
//! Rules are declared on the models with `validator` derives. This module
//! flattens the nested error tree into one list of `FieldError`s addressed by
//! the dotted camelCase paths callers use on the wire (`customer.firstName`).

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::{BookingError, BookingResult, FieldError};

/// Runs the derived rules for `value`, returning every violation at once.
pub fn validate_request<T: Validate>(value: &T) -> BookingResult<()> {
    value
        .validate()
        .map_err(|errors| BookingError::Validation(flatten(&errors)))
}

pub fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    // validator keys its errors by HashMap
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = to_camel_case(field);
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|error| FieldError::new(&path, message_of(error))));
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn message_of(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("failed `{}` check", error.code),
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
