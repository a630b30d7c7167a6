use rocket::serde::Serialize;
use rusqlite::types::{ToSql, ToSqlOutput};

/// the json type a field must have in a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// free text, only json strings are accepted
    Text,
    /// json integers, or strings made of decimal digits
    Integer,
}

/// describes a single client-writable field of a resource
#[derive(Debug, PartialEq, Eq)]
pub struct Field {
    /// the name of the field in request and response bodies
    pub name: &'static str,
    /// the column backing this field in the database
    pub column: &'static str,
    pub kind: FieldKind,
    /// must be present and non-null when creating the resource
    pub required: bool,
    /// may be changed with a partial update
    pub updatable: bool,
    /// passed through the sanitizer every time the resource leaves the server
    pub sanitized: bool,
}

/// everything the generic resource pipeline needs to know about one resource type.
///
/// Fields are listed in the order they are validated on create, so the first missing
/// field in this list is the one reported back to the client
#[derive(Debug)]
pub struct ResourceSchema {
    /// the table the resource lives in. Every table has an integer `id` primary key
    pub table: &'static str,
    pub fields: &'static [Field],
    /// if present, this column is set to the current time on every insert and update
    pub timestamp_column: Option<&'static str>,
    pub not_found_message: &'static str,
    /// returned when a partial update doesn't contain any updatable field
    pub update_message: &'static str,
}

impl ResourceSchema {
    /// returns the field with the passed name, if the resource has one
    #[cfg(test)]
    pub fn field(&'static self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn required_fields(&'static self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn updatable_fields(&'static self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.updatable)
    }

    pub fn sanitized_fields(&'static self) -> impl Iterator<Item = &'static Field> {
        self.fields.iter().filter(|field| field.sanitized)
    }

    /// the columns read back for every record, in select order
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["id"];
        columns.extend(self.fields.iter().map(|field| field.column));
        if let Some(timestamp) = self.timestamp_column {
            columns.push(timestamp);
        }
        columns
    }
}

/// a validated value for a field, ready to be bound to a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// the fields taken from a request body, in schema order
pub type FieldValues = Vec<(&'static Field, FieldValue)>;

impl ToSql for FieldValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FieldValue::Text(text) => text.to_sql(),
            FieldValue::Integer(number) => number.to_sql(),
        }
    }
}

/// a record type that can flow through the generic resource pipeline
pub trait Resource: Serialize + Sized {
    fn schema() -> &'static ResourceSchema;

    fn id(&self) -> i64;

    /// maps a row selected with [`ResourceSchema::columns`] into a record
    fn from_row(row: &rusqlite::Row) -> Result<Self, rusqlite::Error>;

    /// gives mutable access to a text field by its body name, used to sanitize the record.
    /// Returns `None` for unknown or non-text fields
    fn text_field_mut(&mut self, name: &str) -> Option<&mut String>;
}
