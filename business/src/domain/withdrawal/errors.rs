use crate::domain::shared::locale::Locale;

/// Reasons a pair of dates cannot be used for a withdrawal calculation.
///
/// Both are user-correctable: fixing the input and resubmitting is the only recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("both dates are required.")]
    MissingField,
    #[error("manufacturing date must precede expiry date.")]
    InvalidOrder,
}

impl ValidationError {
    /// Code-style identifier for clients that translate messages themselves.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "withdrawal.missing_field",
            ValidationError::InvalidOrder => "withdrawal.invalid_order",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "MissingField",
            ValidationError::InvalidOrder => "InvalidOrder",
        }
    }

    /// Message to show the user, in the requested language.
    pub fn localized(&self, locale: Locale) -> String {
        match (self, locale) {
            (_, Locale::En) => self.to_string(),
            (ValidationError::MissingField, Locale::Vi) => {
                "Vui lòng nhập đầy đủ Ngày Sản Xuất và Hạn Sử Dụng.".to_string()
            }
            (ValidationError::InvalidOrder, Locale::Vi) => {
                "Ngày sản xuất phải nhỏ hơn Hạn sử dụng.".to_string()
            }
        }
    }
}
