use rusqlite::types::Type;
use rusqlite::Connection;

/// returns the schema version stored in the metadata table.
/// Fails if the metadata table hasn't been created yet
pub fn get_version(con: &Connection) -> Result<u64, rusqlite::Error> {
    let version: String = con.query_row(
        include_str!("../assets/queries/metadata/get_version.sql"),
        [],
        |row| row.get(0),
    )?;
    version
        .parse::<u64>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))
}
