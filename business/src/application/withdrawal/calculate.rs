use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::withdrawal::calculator::calculate;
use crate::domain::withdrawal::errors::ValidationError;
use crate::domain::withdrawal::model::CalculationResult;
use crate::domain::withdrawal::use_cases::calculate::{
    CalculateWithdrawalParams, CalculateWithdrawalUseCase,
};
use crate::domain::withdrawal::validator::validate;

pub struct CalculateWithdrawalUseCaseImpl {
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl CalculateWithdrawalUseCase for CalculateWithdrawalUseCaseImpl {
    fn execute(
        &self,
        params: CalculateWithdrawalParams,
    ) -> Result<CalculationResult, ValidationError> {
        self.logger.info(&format!(
            "Calculating pull date: manufacture_date={:?}, expiry_date={:?}",
            params.manufacture_date, params.expiry_date
        ));

        let dates = validate(&params.manufacture_date, &params.expiry_date).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected withdrawal input: {}", e.code()));
        })?;

        let today = self.clock.today();
        self.logger.debug(&format!("Calculating against {}", today));

        let result = calculate(&dates, today);

        self.logger.info(&format!(
            "Pull date {} ({} days remaining), status={}",
            result.pull_date, result.remaining_days, result.status
        ));

        Ok(result)
    }
}
