use std::fmt;

/// why a request body was rejected
#[derive(PartialEq, Debug, Clone)]
pub enum ValidationFailure {
    /// a required field was absent or null when creating a resource
    MissingField(&'static str),
    /// a field was supplied with a json type it can't hold
    InvalidField(&'static str),
    /// a partial update had no truthy updatable field. Holds the resource's message
    NoUpdatableField(&'static str),
}

#[derive(PartialEq, Debug)]
pub enum ResourceError {
    /// no record with the passed id exists
    NotFound,
    /// the request body failed validation
    Validation(ValidationFailure),
    /// the database failed to execute a query. Details are only logged, never returned
    DbFailure,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingField(field) => {
                write!(f, "Missing '{field}' in request body")
            }
            ValidationFailure::InvalidField(field) => {
                write!(f, "Invalid '{field}' in request body")
            }
            ValidationFailure::NoUpdatableField(message) => f.write_str(message),
        }
    }
}

impl From<ValidationFailure> for ResourceError {
    fn from(value: ValidationFailure) -> Self {
        ResourceError::Validation(value)
    }
}
