use rocket::serde::{json::Json, Deserialize, Serialize};

static API_VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    pub version: String,
}

impl ApiVersion {
    fn new() -> ApiVersion {
        ApiVersion {
            version: API_VERSION_NUMBER.to_string(),
        }
    }
}

#[get("/")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion::new())
}
