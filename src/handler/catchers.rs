//! json bodies for requests that never reach a route, so every error has the same shape

use rocket::serde::json::Json;
use rocket::Request;

use crate::model::response::resource_responses::SERVER_ERROR_MESSAGE;
use crate::model::response::ErrorResponse;

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorResponse> {
    log::debug!("No route for {} {}", req.method(), req.uri());
    ErrorResponse::new("Not found")
}

#[catch(422)]
pub fn unprocessable(_req: &Request) -> Json<ErrorResponse> {
    ErrorResponse::new("Request could not be processed")
}

#[catch(500)]
pub fn server_error(_req: &Request) -> Json<ErrorResponse> {
    ErrorResponse::new(SERVER_ERROR_MESSAGE)
}
