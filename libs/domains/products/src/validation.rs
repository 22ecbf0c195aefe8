//! Write-side validation.
//!
//! Rules live as `validator` attributes on [`CreateProduct`] and
//! [`UpdateProduct`]; this module runs them and flattens the result into an
//! ordered list of [`FieldViolation`]s (name, description, price, stock).

use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{CreateProduct, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, UpdateProduct};

const FIELD_ORDER: [&str; 4] = ["name", "description", "price", "stock"];

/// Integer digits that fit `NUMERIC(18,2)`
const PRICE_MAX_INTEGER_DIGITS: u32 = 16;
const PRICE_MAX_SCALE: u32 = 2;

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    /// `required`, `too_long`, `must_be_positive` or `invalid_precision`
    pub code: String,
    pub message: String,
}

impl FieldViolation {
    pub(crate) fn new(field: &'static str, code: &str) -> Self {
        Self {
            field,
            code: code.to_string(),
            message: describe(field, code),
        }
    }
}

fn describe(field: &str, code: &str) -> String {
    let label = match field {
        "name" => "Product name",
        "description" => "Product description",
        "price" => "Product price",
        "stock" => "Product stock",
        other => other,
    };

    match (field, code) {
        (_, "required") => format!("{label} is required."),
        ("name", "too_long") => format!("{label} cannot exceed {NAME_MAX_LEN} characters."),
        ("description", "too_long") => {
            format!("{label} cannot exceed {DESCRIPTION_MAX_LEN} characters.")
        }
        (_, "must_be_positive") => format!("{label} must be greater than zero."),
        (_, "invalid_precision") => format!(
            "{label} must have at most {PRICE_MAX_SCALE} decimal places and {PRICE_MAX_INTEGER_DIGITS} integer digits."
        ),
        (_, other) => format!("{label} is invalid ({other})."),
    }
}

pub fn validate_create(input: &CreateProduct) -> Vec<FieldViolation> {
    flatten(input.validate())
}

pub fn validate_update(input: &UpdateProduct) -> Vec<FieldViolation> {
    flatten(input.validate())
}

fn flatten(result: Result<(), ValidationErrors>) -> Vec<FieldViolation> {
    let Err(errors) = result else {
        return Vec::new();
    };
    let by_field = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| by_field.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| errs.iter().map(move |e| FieldViolation::new(field, &e.code)))
        .collect()
}

/// Rejects empty and whitespace-only text.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Price must be positive and representable as `NUMERIC(18,2)`.
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("must_be_positive"));
    }

    let max_integer = Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS));
    if price.normalize().scale() > PRICE_MAX_SCALE || price.trunc() >= max_integer {
        return Err(ValidationError::new("invalid_precision"));
    }
    Ok(())
}
