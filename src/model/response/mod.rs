use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

pub mod resource_responses;

/// the body of every error response: `{"error":{"message":"..."}}`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub error: ErrorMessage,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub message: String,
}

// ----------------------------------

impl ErrorResponse {
    pub fn new(message: &str) -> Json<ErrorResponse> {
        Json::from(ErrorResponse::from(message))
    }
}

impl From<&str> for ErrorResponse {
    fn from(value: &str) -> Self {
        Self {
            error: ErrorMessage {
                message: value.to_string(),
            },
        }
    }
}

impl From<String> for ErrorResponse {
    fn from(value: String) -> Self {
        Self {
            error: ErrorMessage { message: value },
        }
    }
}
