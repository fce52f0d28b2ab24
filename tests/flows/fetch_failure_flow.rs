#[path = "../common/mod.rs"]
mod common;

use common::{catalog_json, CatalogServer, Pipeline, Route, TestDomains};
use ferrous_lookup_application::ports::LookupProbe;
use ferrous_lookup_domain::{BatchPolicy, DomainError, DomainName, Region};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Flow: a region whose catalog cannot be fetched aborts the run
// ============================================================================

fn counting_probe() -> (Arc<AtomicUsize>, Arc<dyn LookupProbe>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let probe = move |_: &DomainName, server: &str| -> Result<String, DomainError> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(server.to_string())
    };
    (calls, Arc::new(probe))
}

#[tokio::test]
async fn test_server_error_aborts_before_probing() {
    let server = CatalogServer::start(vec![("/nameserver/hk.json", Route::status(500))])
        .await
        .unwrap();
    let (calls, probe) = counting_probe();
    let pipeline = Pipeline::new(&server, probe);
    let policy = BatchPolicy::new(TestDomains::example(), 0).unwrap();

    let err = pipeline
        .use_case
        .execute(&[Region::HongKong], &policy)
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Protocol { status: 500 });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(pipeline.reporter.started(), vec![Region::HongKong]);
    assert!(pipeline.reporter.summaries().is_empty());
}

#[tokio::test]
async fn test_malformed_catalog_stops_later_regions() {
    let server = CatalogServer::start(vec![
        ("/nameserver/hk.json", Route::ok(catalog_json(&["203.0.113.1"]))),
        ("/nameserver/us.json", Route::ok("not json")),
        ("/nameserver/de.json", Route::ok(catalog_json(&["192.0.2.1"]))),
    ])
    .await
    .unwrap();
    let (calls, probe) = counting_probe();
    let pipeline = Pipeline::new(&server, probe);
    let policy = BatchPolicy::new(TestDomains::example(), 0).unwrap();

    let err = pipeline
        .use_case
        .execute(&Region::ALL, &policy)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Decode(_)));
    assert!(err.is_fetch_failure());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(pipeline.reporter.started(), vec![Region::HongKong, Region::Usa]);
    assert_eq!(pipeline.reporter.summaries().len(), 1);
}
