use std::fs::remove_file;
use std::path::Path;

use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::model::repository::{Folder, Note};
use crate::model::schema::{FieldValue, Resource};
use crate::repository::{initialize_db, resource_repository, Database};


pub static MALICIOUS_NAME: &str = r#"Naughty naughty very naughty <script>alert("xss");</script>"#;
pub static SANITIZED_NAME: &str =
    r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#;
pub static MALICIOUS_CONTENT: &str = r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#;
pub static SANITIZED_CONTENT: &str = r#"Bad image <img src="https://url.to.file.which/does-not.exist">. But not <strong>all</strong> bad."#;

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// every test thread gets its own database file so tests can run in parallel
pub fn test_database() -> Database {
    Database::new(format!("{}.sqlite", current_thread_name()))
}

/// starts the test with a fresh, fully migrated database
pub fn init_db() -> Database {
    let db = test_database();
    remove_file(Path::new(db.location())).unwrap_or(());
    initialize_db(&db).unwrap();
    db
}

pub fn client() -> Client {
    Client::tracked(build_rocket(test_database())).expect("Valid Rocket Instance")
}

/// inserts a folder straight into the database, skipping validation and sanitization
pub fn create_folder_db_entry(db: &Database, name: &str) -> Folder {
    let schema = Folder::schema();
    let con = db.open_connection().unwrap();
    let folder = resource_repository::insert::<Folder>(
        &[(schema.field("name").unwrap(), FieldValue::Text(name.to_string()))],
        &con,
    )
    .unwrap();
    con.close().unwrap();
    folder
}

/// inserts a note straight into the database, skipping validation and sanitization
pub fn create_note_db_entry(db: &Database, folder_id: i64, name: &str, content: &str) -> Note {
    let schema = Note::schema();
    let con = db.open_connection().unwrap();
    let note = resource_repository::insert::<Note>(
        &[
            (schema.field("folderId").unwrap(), FieldValue::Integer(folder_id)),
            (schema.field("name").unwrap(), FieldValue::Text(name.to_string())),
            (schema.field("content").unwrap(), FieldValue::Text(content.to_string())),
        ],
        &con,
    )
    .unwrap();
    con.close().unwrap();
    note
}

/// the four folders most tests start with
pub fn create_test_folders(db: &Database) -> Vec<Folder> {
    [
        "First test post!",
        "Second test post!",
        "Third test post!",
        "Fourth test post!",
    ]
    .iter()
    .map(|name| create_folder_db_entry(db, name))
    .collect()
}

/// reads a record without sanitizing it, to check what was actually stored
pub fn get_stored<R: Resource>(db: &Database, id: i64) -> Option<R> {
    let con = db.open_connection().unwrap();
    let record = resource_repository::get_by_id::<R>(id, &con).unwrap();
    con.close().unwrap();
    record
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}
