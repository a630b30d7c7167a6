use rocket::http::uri::Origin;
use rocket::response::status::{Created, NoContent};
use rocket::serde::json::Json;
use rocket::State;

use crate::handler::{decode_body, location, JsonBody};
use crate::model::repository::Folder;
use crate::model::response::resource_responses::ApiError;
use crate::repository::Database;
use crate::service::resource_service;

#[get("/")]
pub fn list_folders(db: &State<Database>) -> Result<Json<Vec<Folder>>, ApiError> {
    resource_service::list::<Folder>(db)
        .map(Json)
        .map_err(ApiError::for_resource::<Folder>)
}

#[get("/<id>")]
pub fn get_folder(id: &str, db: &State<Database>) -> Result<Json<Folder>, ApiError> {
    resource_service::get::<Folder>(id, db)
        .map(Json)
        .map_err(ApiError::for_resource::<Folder>)
}

#[post("/", data = "<body>")]
pub fn create_folder(
    body: JsonBody<'_>,
    origin: &Origin<'_>,
    db: &State<Database>,
) -> Result<Created<Json<Folder>>, ApiError> {
    let body = decode_body(body)?;
    let folder = resource_service::create::<Folder>(&body, db)
        .map_err(ApiError::for_resource::<Folder>)?;
    Ok(Created::new(location(origin, folder.id)).body(Json(folder)))
}

#[patch("/<id>", data = "<body>")]
pub fn update_folder(id: &str, body: JsonBody<'_>, db: &State<Database>) -> Result<NoContent, ApiError> {
    let body = decode_body(body)?;
    resource_service::update::<Folder>(id, &body, db).map_err(ApiError::for_resource::<Folder>)?;
    Ok(NoContent)
}

#[delete("/<id>")]
pub fn delete_folder(id: &str, db: &State<Database>) -> Result<NoContent, ApiError> {
    resource_service::delete::<Folder>(id, db).map_err(ApiError::for_resource::<Folder>)?;
    Ok(NoContent)
}
