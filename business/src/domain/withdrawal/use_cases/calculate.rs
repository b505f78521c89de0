use crate::domain::withdrawal::errors::ValidationError;
use crate::domain::withdrawal::model::CalculationResult;

pub struct CalculateWithdrawalParams {
    pub manufacture_date: String,
    pub expiry_date: String,
}

pub trait CalculateWithdrawalUseCase: Send + Sync {
    fn execute(
        &self,
        params: CalculateWithdrawalParams,
    ) -> Result<CalculationResult, ValidationError>;
}
