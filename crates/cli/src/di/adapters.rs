use ferrous_lookup_application::ports::{LookupProbe, ResolverCatalog};
use ferrous_lookup_domain::Config;
use ferrous_lookup_infrastructure::{CommandProbe, HttpResolverCatalog};
use std::sync::Arc;
use tracing::debug;

pub struct Adapters {
    pub catalog: Arc<dyn ResolverCatalog>,
    pub probe: Arc<dyn LookupProbe>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let catalog = HttpResolverCatalog::new(config.catalog.clone())?;
        let probe = CommandProbe::new(config.probe.program.as_str());

        debug!(
            catalog = %config.catalog.base_url,
            probe = probe.program(),
            "Adapters initialized"
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            probe: Arc::new(probe),
        })
    }
}
