use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::shared::locale::Locale;
use business::domain::withdrawal::rule::WithdrawalRule;
use business::domain::withdrawal::use_cases::calculate::{
    CalculateWithdrawalParams, CalculateWithdrawalUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::withdrawal::dto::{
    CalculateWithdrawalRequest, CalculationResponse, LocaleDto, WithdrawalRuleResponse,
};

pub struct WithdrawalApi {
    calculate_use_case: Arc<dyn CalculateWithdrawalUseCase>,
}

impl WithdrawalApi {
    pub fn new(calculate_use_case: Arc<dyn CalculateWithdrawalUseCase>) -> Self {
        Self { calculate_use_case }
    }
}

/// Pull date API
///
/// Endpoints for working out when a product must be withdrawn from sale.
#[OpenApi]
impl WithdrawalApi {
    /// Calculate a pull date
    ///
    /// Validates the manufacturing and expiry dates, then returns the pull date,
    /// the days remaining until it, and the product's status as of today.
    #[oai(path = "/withdrawal/calculate", method = "post", tag = "ApiTags::Withdrawal")]
    async fn calculate(
        &self,
        body: Json<CalculateWithdrawalRequest>,
    ) -> CalculateWithdrawalResponse {
        let locale: Locale = body.0.locale.map(Into::into).unwrap_or_default();
        let params = CalculateWithdrawalParams {
            manufacture_date: body.0.manufacture_date,
            expiry_date: body.0.expiry_date,
        };

        match self.calculate_use_case.execute(params) {
            Ok(result) => CalculateWithdrawalResponse::Ok(Json(CalculationResponse::from_result(
                result, locale,
            ))),
            Err(err) => {
                let (_status, json) = err.into_error_response(locale);
                CalculateWithdrawalResponse::BadRequest(json)
            }
        }
    }

    /// Describe the withdrawal rule
    ///
    /// Returns the shelf-life threshold and the formula used, for display in a rule guide.
    #[oai(path = "/withdrawal/rule", method = "get", tag = "ApiTags::Withdrawal")]
    async fn rule(&self, locale: Query<Option<LocaleDto>>) -> Json<WithdrawalRuleResponse> {
        let locale: Locale = locale.0.map(Into::into).unwrap_or_default();
        Json(WithdrawalRuleResponse::from_rule(
            &WithdrawalRule::standard(),
            locale,
        ))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CalculateWithdrawalResponse {
    #[oai(status = 200)]
    Ok(Json<CalculationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
