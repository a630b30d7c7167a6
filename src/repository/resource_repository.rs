//! Queries shared by every resource. The sql is built from the resource's [`ResourceSchema`],
//! and every value coming from a client is bound as a parameter.

use chrono::{DateTime, SubsecRound, Utc};
use rusqlite::types::ToSql;
use rusqlite::Connection;

use crate::model::schema::{Field, FieldValue, Resource, ResourceSchema};

fn select_all(schema: &ResourceSchema) -> String {
    format!("select {} from {}", schema.columns().join(", "), schema.table)
}

/// timestamps are stored with millisecond precision
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// returns every record of the resource, in the order they were created
pub fn list_all<R: Resource>(con: &Connection) -> Result<Vec<R>, rusqlite::Error> {
    let mut pst = con.prepare(&format!("{} order by id", select_all(R::schema())))?;
    let rows = pst.query_map([], R::from_row)?;
    let mut records: Vec<R> = Vec::new();
    for record in rows {
        records.push(record?);
    }
    Ok(records)
}

/// retrieves the record with the passed `id`.
///
/// # Returns
/// - `Ok(Some(record))` if the record exists
/// - `Ok(None)` if no record has that id
/// - `Err(rusqlite::Error)` if the query itself failed
pub fn get_by_id<R: Resource>(id: i64, con: &Connection) -> Result<Option<R>, rusqlite::Error> {
    let mut pst = con.prepare(&format!("{} where id = ?1", select_all(R::schema())))?;
    match pst.query_row([id], R::from_row) {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// inserts a new record and returns it as stored, with the database-assigned id.
/// The values must already be validated against the resource's schema
pub fn insert<R: Resource>(
    values: &[(&'static Field, FieldValue)],
    con: &Connection,
) -> Result<R, rusqlite::Error> {
    let schema = R::schema();
    let timestamp = now();
    let mut columns: Vec<&str> = values.iter().map(|(field, _)| field.column).collect();
    let mut params: Vec<&dyn ToSql> = values.iter().map(|(_, value)| value as &dyn ToSql).collect();
    if let Some(column) = schema.timestamp_column {
        columns.push(column);
        params.push(&timestamp);
    }
    let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("?{i}")).collect();
    let sql = format!(
        "insert into {} ({}) values ({})",
        schema.table,
        columns.join(", "),
        placeholders.join(", ")
    );
    let mut pst = con.prepare(&sql)?;
    let id = pst.insert(params.as_slice())?;
    get_by_id::<R>(id, con)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

/// updates only the passed fields of the record with the passed `id`.
/// This does not check that the record exists, the returned row count will be 0 if it doesn't
pub fn update<R: Resource>(
    id: i64,
    values: &[(&'static Field, FieldValue)],
    con: &Connection,
) -> Result<usize, rusqlite::Error> {
    let schema = R::schema();
    let timestamp = now();
    let mut assignments: Vec<String> = Vec::new();
    let mut params: Vec<&dyn ToSql> = Vec::new();
    for (field, value) in values {
        params.push(value);
        assignments.push(format!("{} = ?{}", field.column, params.len()));
    }
    if let Some(column) = schema.timestamp_column {
        params.push(&timestamp);
        assignments.push(format!("{column} = ?{}", params.len()));
    }
    if assignments.is_empty() {
        return Ok(0);
    }
    params.push(&id);
    let sql = format!(
        "update {} set {} where id = ?{}",
        schema.table,
        assignments.join(", "),
        params.len()
    );
    con.execute(&sql, params.as_slice())
}

/// deletes the record with the passed `id`, returning how many rows were removed
pub fn delete<R: Resource>(id: i64, con: &Connection) -> Result<usize, rusqlite::Error> {
    con.execute(
        &format!("delete from {} where id = ?1", R::schema().table),
        [id],
    )
}
