use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};

use crate::model::schema::{Field, FieldKind, Resource, ResourceSchema};

static FOLDER_SCHEMA: ResourceSchema = ResourceSchema {
    table: "folders",
    fields: &[Field {
        name: "name",
        column: "name",
        kind: FieldKind::Text,
        required: true,
        updatable: true,
        sanitized: true,
    }],
    timestamp_column: None,
    not_found_message: "Folder does not exist",
    update_message: "Request body must contain a 'name'.",
};

static NOTE_SCHEMA: ResourceSchema = ResourceSchema {
    table: "notes",
    fields: &[
        Field {
            name: "folderId",
            column: "folder_id",
            kind: FieldKind::Integer,
            required: true,
            updatable: true,
            sanitized: false,
        },
        Field {
            name: "name",
            column: "name",
            kind: FieldKind::Text,
            required: true,
            updatable: true,
            sanitized: true,
        },
        Field {
            name: "content",
            column: "content",
            kind: FieldKind::Text,
            required: true,
            updatable: true,
            sanitized: true,
        },
    ],
    timestamp_column: Some("modified"),
    not_found_message: "Note does not exist",
    update_message: "Request body must contain either 'name', 'content' or 'folderId'",
};

/// a row in the folders table. This is also the shape returned to clients
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Folder {
    /// assigned by the database, never changes
    pub id: i64,
    /// this value may be unsafe until it goes through the sanitizer
    pub name: String,
}

/// a row in the notes table
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct Note {
    pub id: i64,
    /// the folder this note belongs to. Nothing guarantees the folder still exists
    #[serde(rename = "folderId")]
    pub folder_id: i64,
    pub name: String,
    pub content: String,
    /// set by the repository every time the note is inserted or updated
    #[serde(with = "millisecond_timestamp")]
    pub modified: DateTime<Utc>,
}

/// `2026-01-01T00:00:00.000Z`, always with 3 fractional digits
mod millisecond_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}

impl Resource for Folder {
    fn schema() -> &'static ResourceSchema {
        &FOLDER_SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &rusqlite::Row) -> Result<Self, rusqlite::Error> {
        Ok(Folder {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }

    fn text_field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            _ => None,
        }
    }
}

impl Resource for Note {
    fn schema() -> &'static ResourceSchema {
        &NOTE_SCHEMA
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &rusqlite::Row) -> Result<Self, rusqlite::Error> {
        Ok(Note {
            id: row.get("id")?,
            folder_id: row.get("folder_id")?,
            name: row.get("name")?,
            content: row.get("content")?,
            modified: row.get("modified")?,
        })
    }

    fn text_field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "content" => Some(&mut self.content),
            _ => None,
        }
    }
}
