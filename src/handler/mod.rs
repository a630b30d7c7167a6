use rocket::http::uri::Origin;
use rocket::serde::json::{Error as JsonError, Json, Value};

use crate::model::response::resource_responses::ApiError;
use crate::service::validator::RequestBody;

pub mod api_handler;
pub mod catchers;
pub mod folder_handler;
pub mod note_handler;

/// the body data guard every write route takes. Decoding failures are handled by [`decode_body`]
pub type JsonBody<'r> = Result<Json<Value>, JsonError<'r>>;

/// Turns a request body into a json object.
///
/// An empty body, or json that isn't an object, is treated as an empty object so that it
/// fails validation with the usual message. Anything that isn't json at all is a bad request
pub fn decode_body(body: JsonBody<'_>) -> Result<RequestBody, ApiError> {
    match body {
        Ok(json) => match json.into_inner() {
            Value::Object(map) => Ok(map),
            _ => Ok(RequestBody::new()),
        },
        Err(JsonError::Parse(raw, _)) if raw.trim().is_empty() => Ok(RequestBody::new()),
        Err(e) => {
            log::warn!("Failed to decode request body: {e:?}");
            Err(ApiError::bad_request("Request body must be valid JSON"))
        }
    }
}

/// the location of a newly created record: the request path followed by the new id
pub fn location(origin: &Origin<'_>, id: i64) -> String {
    format!("{}/{id}", origin.path().as_str().trim_end_matches('/'))
}
