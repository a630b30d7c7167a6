use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::model::error::resource_errors::ResourceError;
use crate::model::schema::Resource;
use crate::repository::{resource_repository, Database};
use crate::service::sanitizer::sanitize_record;
use crate::service::validator::{validate_create, validate_update, RequestBody};

/// opens a connection, runs `action` with it, and closes the connection again
fn with_connection<T>(
    db: &Database,
    action: impl FnOnce(&Connection) -> Result<T, ResourceError>,
) -> Result<T, ResourceError> {
    let con = match db.open_connection() {
        Ok(con) => con,
        Err(e) => {
            log::error!(
                "Failed to open the database at {}! Error is {e:?}\n{}",
                db.location(),
                Backtrace::force_capture()
            );
            return Err(ResourceError::DbFailure);
        }
    };
    let result = action(&con);
    if let Err((_, e)) = con.close() {
        log::warn!("Failed to close database connection: {e:?}");
    }
    result
}

fn db_failure(action: &str, table: &str, e: rusqlite::Error) -> ResourceError {
    log::error!(
        "Failed to {action} in {table}! Error is {e:?}\n{}",
        Backtrace::force_capture()
    );
    ResourceError::DbFailure
}

/// ids come straight from the url, so anything that isn't an integer can't match a record
fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}

/// looks up the record with the passed id, failing with [`ResourceError::NotFound`] if there isn't one
fn find_existing<R: Resource>(id: &str, con: &Connection) -> Result<R, ResourceError> {
    let table = R::schema().table;
    let Some(db_id) = parse_id(id) else {
        return Err(ResourceError::NotFound);
    };
    match resource_repository::get_by_id::<R>(db_id, con) {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(ResourceError::NotFound),
        Err(e) => Err(db_failure(&format!("retrieve id {db_id}"), table, e)),
    }
}

/// returns every record of the resource, sanitized
pub fn list<R: Resource>(db: &Database) -> Result<Vec<R>, ResourceError> {
    with_connection(db, |con| {
        let records = resource_repository::list_all::<R>(con)
            .map_err(|e| db_failure("list records", R::schema().table, e))?;
        Ok(records.into_iter().map(sanitize_record).collect())
    })
}

/// returns the sanitized record with the passed id
pub fn get<R: Resource>(id: &str, db: &Database) -> Result<R, ResourceError> {
    with_connection(db, |con| find_existing::<R>(id, con).map(sanitize_record))
}

/// validates `body` as a new record, saves it, and returns the sanitized record as stored.
/// The record is saved exactly as the client sent it
pub fn create<R: Resource>(body: &RequestBody, db: &Database) -> Result<R, ResourceError> {
    let values = validate_create(R::schema(), body)?;
    with_connection(db, |con| {
        let record = resource_repository::insert::<R>(&values, con)
            .map_err(|e| db_failure("insert record", R::schema().table, e))?;
        log::debug!("Created record {} in {}", record.id(), R::schema().table);
        Ok(sanitize_record(record))
    })
}

/// Applies a partial update to the record with the passed id.
///
/// The record is looked up before the body is validated, so a missing record is reported
/// even when the body is bad. The lookup and the update are separate statements; if the
/// record is deleted in between, the update touches no rows and this reports
/// [`ResourceError::NotFound`]
pub fn update<R: Resource>(id: &str, body: &RequestBody, db: &Database) -> Result<(), ResourceError> {
    with_connection(db, |con| {
        let table = R::schema().table;
        let existing: R = find_existing(id, con)?;
        let values = validate_update(R::schema(), body)?;
        let updated = resource_repository::update::<R>(existing.id(), &values, con)
            .map_err(|e| db_failure(&format!("update id {}", existing.id()), table, e))?;
        if updated == 0 {
            log::warn!(
                "id {} in {table} was removed before it could be updated",
                existing.id()
            );
            return Err(ResourceError::NotFound);
        }
        Ok(())
    })
}

/// Deletes the record with the passed id.
///
/// Like [`update`], this looks the record up first and reports [`ResourceError::NotFound`]
/// if the delete itself removes nothing
pub fn delete<R: Resource>(id: &str, db: &Database) -> Result<(), ResourceError> {
    with_connection(db, |con| {
        let table = R::schema().table;
        let existing: R = find_existing(id, con)?;
        let deleted = resource_repository::delete::<R>(existing.id(), con)
            .map_err(|e| db_failure(&format!("delete id {}", existing.id()), table, e))?;
        if deleted == 0 {
            log::warn!(
                "id {} in {table} was removed by another request first",
                existing.id()
            );
            return Err(ResourceError::NotFound);
        }
        Ok(())
    })
}
