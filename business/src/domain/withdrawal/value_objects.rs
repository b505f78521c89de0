use serde::{Deserialize, Serialize};

use crate::domain::shared::locale::Locale;

/// Where a product stands relative to its pull date and expiry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    /// Before the pull date; the product can stay on sale.
    Safe,
    /// Inside the withdrawal window; pull the product now.
    Warning,
    /// On or after the expiry date.
    Expired,
}

impl WithdrawalStatus {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (WithdrawalStatus::Safe, Locale::En) => "Safe to sell",
            (WithdrawalStatus::Warning, Locale::En) => "Pull from sale",
            (WithdrawalStatus::Expired, Locale::En) => "Expired",
            (WithdrawalStatus::Safe, Locale::Vi) => "An toàn",
            (WithdrawalStatus::Warning, Locale::Vi) => "Cần lùi hàng",
            (WithdrawalStatus::Expired, Locale::Vi) => "Đã hết hạn",
        }
    }
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawalStatus::Safe => write!(f, "safe"),
            WithdrawalStatus::Warning => write!(f, "warning"),
            WithdrawalStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for WithdrawalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(WithdrawalStatus::Safe),
            "warning" => Ok(WithdrawalStatus::Warning),
            "expired" => Ok(WithdrawalStatus::Expired),
            _ => Err(format!("Invalid withdrawal status: {}", s)),
        }
    }
}
