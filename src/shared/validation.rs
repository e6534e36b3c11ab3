//! Validation Utilities

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::error::{AppError, FieldError, REQUIRED_FIELD_MESSAGE};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors = Vec::new();
    collect_field_errors(None, &errors, &mut field_errors);
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    AppError::from_field_errors(field_errors)
}

/// Flatten nested struct errors into dotted field paths (`group.slug`).
fn collect_field_errors(
    prefix: Option<&str>,
    errors: &ValidationErrors,
    out: &mut Vec<FieldError>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError::new(path.clone(), message_for(e))));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(Some(&path), nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(Some(&format!("{}[{}]", path, index)), nested, out);
                }
            }
        }
    }
}

fn message_for(error: &ValidationError) -> String {
    match (&error.message, error.code.as_ref()) {
        (Some(message), _) => message.to_string(),
        (None, "required") => REQUIRED_FIELD_MESSAGE.into(),
        (None, code) => format!("Invalid value ({})", code),
    }
}

/// Slugs consist of letters, numbers, underscores or hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("slug");
        error.message = Some(
            "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.".into(),
        );
        Err(error)
    }
}
