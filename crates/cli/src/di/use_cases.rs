use super::Adapters;
use ferrous_lookup_application::ports::OutcomeReporter;
use ferrous_lookup_application::services::LookupExecutor;
use ferrous_lookup_application::use_cases::{LookupRegionUseCase, LookupRegionsUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub lookup_regions: LookupRegionsUseCase,
}

impl UseCases {
    pub fn new(adapters: Adapters, reporter: Arc<dyn OutcomeReporter>) -> Self {
        let executor = Arc::new(LookupExecutor::new(adapters.probe));
        let region_lookup = LookupRegionUseCase::new(adapters.catalog, executor, reporter);

        Self {
            lookup_regions: LookupRegionsUseCase::new(region_lookup),
        }
    }
}
