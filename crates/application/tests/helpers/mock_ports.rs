#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_lookup_application::ports::{LookupProbe, OutcomeReporter, ResolverCatalog};
use ferrous_lookup_domain::{
    BatchSummary, DomainError, DomainName, LookupOutcome, Region, ResolverCandidate,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock ResolverCatalog
// ============================================================================

#[derive(Clone, Default)]
pub struct MockResolverCatalog {
    responses: Arc<RwLock<HashMap<Region, Result<Vec<ResolverCandidate>, DomainError>>>>,
    fetched: Arc<Mutex<Vec<Region>>>,
}

impl MockResolverCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the candidate list returned for a region
    pub async fn set_candidates(&self, region: Region, addresses: &[&str]) {
        let candidates = addresses
            .iter()
            .map(|a| ResolverCandidate::new(*a))
            .collect();
        self.responses.write().await.insert(region, Ok(candidates));
    }

    /// Configure a region whose fetch fails
    pub async fn set_failure(&self, region: Region, error: DomainError) {
        self.responses.write().await.insert(region, Err(error));
    }

    pub fn fetched_regions(&self) -> Vec<Region> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolverCatalog for MockResolverCatalog {
    async fn fetch(&self, region: Region) -> Result<Vec<ResolverCandidate>, DomainError> {
        self.fetched.lock().unwrap().push(region);

        let responses = self.responses.read().await;
        responses
            .get(&region)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::Protocol { status: 404 }))
    }
}

// ============================================================================
// Scripted LookupProbe
// ============================================================================

/// Succeeds for every server except the ones marked as failing, and records
/// each call in order.
#[derive(Clone, Default)]
pub struct ScriptedProbe {
    failing: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(servers: &[&str]) -> Self {
        let probe = Self::new();
        probe
            .failing
            .lock()
            .unwrap()
            .extend(servers.iter().map(|s| s.to_string()));
        probe
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LookupProbe for ScriptedProbe {
    fn probe(&self, domain: &DomainName, server: &str) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(server.to_string());

        if self.failing.lock().unwrap().contains(server) {
            return Err(DomainError::ProbeFailed("exit status: 1".to_string()));
        }

        Ok(format!("Server:\t{server}\nName:\t{domain}\nAddress: 93.184.216.34\n"))
    }
}

// ============================================================================
// Recording OutcomeReporter
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ReporterEvent {
    Started(Region, String),
    Outcome(LookupOutcome),
    Finished(BatchSummary),
}

#[derive(Clone, Default)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<ReporterEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn outcomes(&self) -> Vec<LookupOutcome> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReporterEvent::Outcome(o) => Some(o),
                _ => None,
            })
            .collect()
    }
}

impl OutcomeReporter for RecordingReporter {
    fn batch_started(&self, region: Region, domain: &DomainName) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Started(region, domain.to_string()));
    }

    fn outcome(&self, outcome: &LookupOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Outcome(outcome.clone()));
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        self.events
            .lock()
            .unwrap()
            .push(ReporterEvent::Finished(summary.clone()));
    }
}
