use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shared::locale::Locale;
use business::domain::withdrawal::errors::ValidationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ValidationError {
    fn into_error_response(self, locale: Locale) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ValidationError::MissingField | ValidationError::InvalidOrder => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: self.name().to_string(),
                message: self.localized(locale),
                code: self.code().to_string(),
            }),
        )
    }
}
