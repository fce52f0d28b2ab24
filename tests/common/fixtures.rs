#![allow(dead_code)]

use super::CatalogServer;
use ferrous_lookup_application::ports::{LookupProbe, OutcomeReporter};
use ferrous_lookup_application::services::LookupExecutor;
use ferrous_lookup_application::use_cases::{LookupRegionUseCase, LookupRegionsUseCase};
use ferrous_lookup_domain::config::CatalogConfig;
use ferrous_lookup_domain::{BatchSummary, DomainName, LookupOutcome, Region};
use ferrous_lookup_infrastructure::HttpResolverCatalog;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Common test domains
pub struct TestDomains;

impl TestDomains {
    pub fn example() -> DomainName {
        DomainName::parse("example.com").unwrap()
    }

    pub fn nested() -> DomainName {
        DomainName::parse("www.example.co.uk").unwrap()
    }
}

/// Catalog document in the public-dns.info shape.
pub fn catalog_json(addresses: &[&str]) -> String {
    let entries: Vec<String> = addresses
        .iter()
        .enumerate()
        .map(|(i, ip)| {
            format!(
                r#"{{"ip":"{ip}","name":"ns{i}.example.","country_id":"HK","city":"","version":"","error":null,"dnssec":false,"reliability":1,"checked_at":"2024-05-01T00:00:00Z","created_at":"2020-01-01T00:00:00Z"}}"#
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// Reporter that keeps every callback in order.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    started: Arc<Mutex<Vec<Region>>>,
    outcomes: Arc<Mutex<Vec<(Region, LookupOutcome)>>>,
    summaries: Arc<Mutex<Vec<BatchSummary>>>,
    current: Arc<Mutex<Option<Region>>>,
}

impl RecordingReporter {
    pub fn started(&self) -> Vec<Region> {
        self.started.lock().unwrap().clone()
    }

    pub fn outcomes(&self) -> Vec<(Region, LookupOutcome)> {
        self.outcomes.lock().unwrap().clone()
    }

    pub fn summaries(&self) -> Vec<BatchSummary> {
        self.summaries.lock().unwrap().clone()
    }

    pub fn addresses_for(&self, region: Region) -> Vec<String> {
        self.outcomes()
            .into_iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, o)| o.candidate_address.to_string())
            .collect()
    }
}

impl OutcomeReporter for RecordingReporter {
    fn batch_started(&self, region: Region, _domain: &DomainName) {
        self.started.lock().unwrap().push(region);
        *self.current.lock().unwrap() = Some(region);
    }

    fn outcome(&self, outcome: &LookupOutcome) {
        let region = self.current.lock().unwrap().unwrap_or_default();
        self.outcomes
            .lock()
            .unwrap()
            .push((region, outcome.clone()));
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        self.summaries.lock().unwrap().push(summary.clone());
    }
}

/// Real HTTP catalog against a loopback fixture, plus the given probe.
pub struct Pipeline {
    pub reporter: RecordingReporter,
    pub use_case: LookupRegionsUseCase,
}

impl Pipeline {
    pub fn new(server: &CatalogServer, probe: Arc<dyn LookupProbe>) -> Self {
        let config = CatalogConfig {
            base_url: server.base_url(),
            timeout_secs: 5,
            ..Default::default()
        };
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();
        let catalog = HttpResolverCatalog::with_client(config, client);

        let reporter = RecordingReporter::default();
        let region_lookup = LookupRegionUseCase::new(
            Arc::new(catalog),
            Arc::new(LookupExecutor::new(probe)),
            Arc::new(reporter.clone()),
        );

        Self {
            reporter,
            use_case: LookupRegionsUseCase::new(region_lookup),
        }
    }
}
