use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when request input fails validation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// The request field that was rejected
    pub field: String,
    /// Why the field was rejected
    pub message: String,
}
