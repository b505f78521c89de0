use crate::domain::shared::locale::Locale;

/// Percentage of total shelf life that must remain for a product to stay on sale.
pub const STANDARD_WITHDRAWAL_PERCENTAGE: u8 = 20;

/// The shelf-life threshold applied by the calculator, plus its guide text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalRule {
    pub percentage: u8,
}

impl WithdrawalRule {
    pub fn standard() -> Self {
        Self::with_percentage(STANDARD_WITHDRAWAL_PERCENTAGE)
    }

    pub(crate) fn with_percentage(percentage: u8) -> Self {
        Self { percentage }
    }

    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "The product must be pulled from sale once remaining life drops below {}% of total shelf life.",
                self.percentage
            ),
            Locale::Vi => format!(
                "Sản phẩm phải được lùi hàng khi thời gian còn lại dưới {}% tổng HSD.",
                self.percentage
            ),
        }
    }

    pub fn formula(&self, locale: Locale) -> String {
        match locale {
            Locale::En => format!(
                "Pull date = Expiry date - (Total days x {}%)",
                self.percentage
            ),
            Locale::Vi => format!("Ngày lùi = HSD - (Tổng ngày x {}%)", self.percentage),
        }
    }
}

impl Default for WithdrawalRule {
    fn default() -> Self {
        Self::standard()
    }
}
