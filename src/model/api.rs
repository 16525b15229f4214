use serde::{Deserialize, Serialize};

/// JSON body of a failed request.
///
/// Clients asking for `application/json` receive this instead of the error page.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Human readable error message, e.g. `GET /missing route not found`
    pub error: String,
}
