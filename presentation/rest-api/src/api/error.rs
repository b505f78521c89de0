use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::locale::Locale;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error kind, e.g. `MissingField`
    pub name: String,
    /// Message to show the user
    pub message: String,
    /// Stable identifier for client-side translation
    pub code: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self, locale: Locale) -> (StatusCode, Json<ErrorResponse>);
}
