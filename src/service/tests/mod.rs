use rocket::serde::json::Value;

use crate::service::validator::RequestBody;

fn body(json: Value) -> RequestBody {
    json.as_object().cloned().unwrap_or_default()
}

mod create_tests {
    use rocket::serde::json::json;

    use super::body;
    use crate::model::error::resource_errors::{ResourceError, ValidationFailure};
    use crate::model::repository::{Folder, Note};
    use crate::service::resource_service::{create, list};
    use crate::test::*;

    #[test]
    fn create_returns_sanitized_record() {
        let db = init_db();
        let note: Note = create(
            &body(json!({"folderId": 1, "name": MALICIOUS_NAME, "content": MALICIOUS_CONTENT})),
            &db,
        )
        .unwrap();
        assert_eq!(SANITIZED_NAME, note.name);
        assert_eq!(SANITIZED_CONTENT, note.content);
        let stored = get_stored::<Note>(&db, note.id).unwrap();
        assert_eq!(MALICIOUS_NAME, stored.name);
        assert_eq!(MALICIOUS_CONTENT, stored.content);
        cleanup();
    }

    #[test]
    fn create_accepts_numeric_string_folder_id() {
        let db = init_db();
        let note: Note = create(
            &body(json!({"folderId": "12", "name": "name", "content": "content"})),
            &db,
        )
        .unwrap();
        assert_eq!(12, note.folder_id);
        cleanup();
    }

    #[test]
    fn create_reports_first_missing_field() {
        let db = init_db();
        let res = create::<Note>(&body(json!({"content": "content"})), &db)
            .expect_err("a note without folderId or name should be rejected");
        assert_eq!(
            ResourceError::Validation(ValidationFailure::MissingField("folderId")),
            res
        );
        assert_eq!(Vec::<Note>::new(), list::<Note>(&db).unwrap());
        cleanup();
    }

    #[test]
    fn create_rejects_wrong_type() {
        let db = init_db();
        let res = create::<Folder>(&body(json!({"name": ["not", "text"]})), &db)
            .expect_err("a non-string name should be rejected");
        assert_eq!(
            ResourceError::Validation(ValidationFailure::InvalidField("name")),
            res
        );
        cleanup();
    }
}

mod get_tests {
    use crate::model::error::resource_errors::ResourceError;
    use crate::model::repository::{Folder, Note};
    use crate::service::resource_service::get;
    use crate::test::*;

    #[test]
    fn get_sanitizes_record() {
        let db = init_db();
        let note = create_note_db_entry(&db, 1, MALICIOUS_NAME, MALICIOUS_CONTENT);
        let fetched = get::<Note>(&note.id.to_string(), &db).unwrap();
        assert_eq!(SANITIZED_NAME, fetched.name);
        assert_eq!(SANITIZED_CONTENT, fetched.content);
        cleanup();
    }

    #[test]
    fn get_non_existent() {
        let db = init_db();
        let res = get::<Folder>("1", &db).expect_err("Retrieving a nonexistent folder should return an error");
        assert_eq!(ResourceError::NotFound, res);
        cleanup();
    }

    #[test]
    fn get_non_numeric_id() {
        let db = init_db();
        create_test_folders(&db);
        let res = get::<Folder>("1abc", &db).expect_err("a non-numeric id can't match a folder");
        assert_eq!(ResourceError::NotFound, res);
        cleanup();
    }
}

mod update_tests {
    use rocket::serde::json::json;

    use super::body;
    use crate::model::error::resource_errors::{ResourceError, ValidationFailure};
    use crate::model::repository::{Folder, Note};
    use crate::service::resource_service::update;
    use crate::test::*;

    #[test]
    fn update_not_found_before_validation() {
        let db = init_db();
        let res = update::<Folder>("1", &body(json!({})), &db)
            .expect_err("updating a nonexistent folder should return an error");
        assert_eq!(ResourceError::NotFound, res);
        cleanup();
    }

    #[test]
    fn update_without_truthy_field() {
        let db = init_db();
        create_note_db_entry(&db, 1, "name", "content");
        let res = update::<Note>("1", &body(json!({"name": "", "folderId": 0})), &db)
            .expect_err("falsy values alone should not update a note");
        assert_eq!(
            ResourceError::Validation(ValidationFailure::NoUpdatableField(
                "Request body must contain either 'name', 'content' or 'folderId'"
            )),
            res
        );
        cleanup();
    }

    #[test]
    fn update_writes_falsy_fields_alongside_truthy_ones() {
        let db = init_db();
        create_note_db_entry(&db, 4, "name", "content");
        update::<Note>("1", &body(json!({"name": "renamed", "content": ""})), &db).unwrap();
        let stored = get_stored::<Note>(&db, 1).unwrap();
        assert_eq!("renamed", stored.name);
        assert_eq!("", stored.content);
        assert_eq!(4, stored.folder_id);
        cleanup();
    }
}

mod delete_tests {
    use crate::model::error::resource_errors::ResourceError;
    use crate::model::repository::Note;
    use crate::service::resource_service::{delete, get};
    use crate::test::*;

    #[test]
    fn delete_then_get() {
        let db = init_db();
        create_note_db_entry(&db, 1, "name", "content");
        delete::<Note>("1", &db).unwrap();
        assert_eq!(ResourceError::NotFound, get::<Note>("1", &db).unwrap_err());
        cleanup();
    }

    #[test]
    fn delete_twice() {
        let db = init_db();
        create_note_db_entry(&db, 1, "name", "content");
        delete::<Note>("1", &db).unwrap();
        assert_eq!(ResourceError::NotFound, delete::<Note>("1", &db).unwrap_err());
        cleanup();
    }
}
