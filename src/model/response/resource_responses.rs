use rocket::serde::json::Json;

use crate::model::error::resource_errors::ResourceError;
use crate::model::response::ErrorResponse;
use crate::model::schema::Resource;

/// the message returned for any failure that isn't the client's fault
pub static SERVER_ERROR_MESSAGE: &str = "server error";

/// every error outcome a resource route can produce
#[derive(Responder)]
pub enum ApiError {
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<ErrorResponse>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<ErrorResponse>),
    #[response(status = 500, content_type = "json")]
    ServerError(Json<ErrorResponse>),
}

impl ApiError {
    pub fn bad_request(message: &str) -> ApiError {
        ApiError::BadRequest(ErrorResponse::new(message))
    }

    /// maps a service error for resource `R` to its response, using the resource's own not found message
    pub fn for_resource<R: Resource>(error: ResourceError) -> ApiError {
        match error {
            ResourceError::NotFound => {
                ApiError::NotFound(ErrorResponse::new(R::schema().not_found_message))
            }
            ResourceError::Validation(failure) => {
                ApiError::BadRequest(Json::from(ErrorResponse::from(failure.to_string())))
            }
            ResourceError::DbFailure => ApiError::ServerError(ErrorResponse::new(SERVER_ERROR_MESSAGE)),
        }
    }
}
