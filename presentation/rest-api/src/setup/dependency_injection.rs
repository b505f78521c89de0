use std::sync::Arc;

use logger::TracingLogger;

use business::application::withdrawal::calculate::CalculateWithdrawalUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub withdrawal_api: crate::api::withdrawal::routes::WithdrawalApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let clock = config.clock.build()?;
        tracing::info!(
            timezone = %config.clock.timezone,
            pinned = config.clock.calculation_date.is_some(),
            today = %clock.today(),
            "Clock configured"
        );

        // Withdrawal use cases
        let calculate_use_case = Arc::new(CalculateWithdrawalUseCaseImpl { clock, logger });

        let withdrawal_api =
            crate::api::withdrawal::routes::WithdrawalApi::new(calculate_use_case);

        Ok(Self {
            health_api,
            withdrawal_api,
        })
    }
}
