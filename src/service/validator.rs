use rocket::serde::json::serde_json::Map;
use rocket::serde::json::Value;

use crate::model::error::resource_errors::ValidationFailure;
use crate::model::schema::{Field, FieldKind, FieldValue, FieldValues, ResourceSchema};

/// a decoded json request body. Bodies that aren't json objects are treated as empty
pub type RequestBody = Map<String, Value>;

/// Checks a body for creating a resource.
///
/// Required fields are checked in schema order, and the first one that is absent or `null`
/// is the one reported. Once every required field is present, each supplied field is
/// converted to the type its column holds
pub fn validate_create(
    schema: &'static ResourceSchema,
    body: &RequestBody,
) -> Result<FieldValues, ValidationFailure> {
    for field in schema.required_fields() {
        if body.get(field.name).map_or(true, Value::is_null) {
            return Err(ValidationFailure::MissingField(field.name));
        }
    }
    schema
        .fields
        .iter()
        .filter_map(|field| supplied_value(field, body))
        .collect()
}

/// Checks a body for a partial update.
///
/// At least one updatable field needs a truthy value, using javascript's rules: `null`,
/// `false`, `0` and `""` all count as not being there. When that passes, every updatable
/// field that is present and not `null` gets written, falsy or not
pub fn validate_update(
    schema: &'static ResourceSchema,
    body: &RequestBody,
) -> Result<FieldValues, ValidationFailure> {
    let truthy_fields = schema
        .updatable_fields()
        .filter(|field| body.get(field.name).is_some_and(is_truthy))
        .count();
    if truthy_fields == 0 {
        return Err(ValidationFailure::NoUpdatableField(schema.update_message));
    }
    schema
        .updatable_fields()
        .filter_map(|field| supplied_value(field, body))
        .collect()
}

/// `None` if the field isn't in the body or is `null`
fn supplied_value(
    field: &'static Field,
    body: &RequestBody,
) -> Option<Result<(&'static Field, FieldValue), ValidationFailure>> {
    let value = body.get(field.name).filter(|value| !value.is_null())?;
    Some(convert(field, value).map(|converted| (field, converted)))
}

fn convert(field: &'static Field, value: &Value) -> Result<FieldValue, ValidationFailure> {
    let converted = match (field.kind, value) {
        (FieldKind::Text, Value::String(text)) => Some(FieldValue::Text(text.clone())),
        (FieldKind::Integer, Value::Number(number)) => number.as_i64().map(FieldValue::Integer),
        (FieldKind::Integer, Value::String(text)) if is_digits(text) => {
            text.parse::<i64>().ok().map(FieldValue::Integer)
        }
        _ => None,
    };
    converted.ok_or(ValidationFailure::InvalidField(field.name))
}

/// no sign, no whitespace
fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
