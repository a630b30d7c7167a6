use rocket::http::uri::Origin;
use rocket::response::status::{Created, NoContent};
use rocket::serde::json::Json;
use rocket::State;

use crate::handler::{decode_body, location, JsonBody};
use crate::model::repository::Note;
use crate::model::response::resource_responses::ApiError;
use crate::repository::Database;
use crate::service::resource_service;

#[get("/")]
pub fn list_notes(db: &State<Database>) -> Result<Json<Vec<Note>>, ApiError> {
    resource_service::list::<Note>(db)
        .map(Json)
        .map_err(ApiError::for_resource::<Note>)
}

#[get("/<id>")]
pub fn get_note(id: &str, db: &State<Database>) -> Result<Json<Note>, ApiError> {
    resource_service::get::<Note>(id, db)
        .map(Json)
        .map_err(ApiError::for_resource::<Note>)
}

#[post("/", data = "<body>")]
pub fn create_note(
    body: JsonBody<'_>,
    origin: &Origin<'_>,
    db: &State<Database>,
) -> Result<Created<Json<Note>>, ApiError> {
    let body = decode_body(body)?;
    let note = resource_service::create::<Note>(&body, db)
        .map_err(ApiError::for_resource::<Note>)?;
    Ok(Created::new(location(origin, note.id)).body(Json(note)))
}

#[patch("/<id>", data = "<body>")]
pub fn update_note(id: &str, body: JsonBody<'_>, db: &State<Database>) -> Result<NoContent, ApiError> {
    let body = decode_body(body)?;
    resource_service::update::<Note>(id, &body, db).map_err(ApiError::for_resource::<Note>)?;
    Ok(NoContent)
}

#[delete("/<id>")]
pub fn delete_note(id: &str, db: &State<Database>) -> Result<NoContent, ApiError> {
    resource_service::delete::<Note>(id, db).map_err(ApiError::for_resource::<Note>)?;
    Ok(NoContent)
}
