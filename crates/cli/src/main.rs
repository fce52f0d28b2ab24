//! # Ferrous Lookup
//!
//! Resolves a domain against every public DNS resolver of a region and
//! prints each resolver's answer.

mod bootstrap;
mod di;
mod report;

use clap::Parser;
use ferrous_lookup_domain::{
    BatchPolicy, CliOverrides, DomainName, Region, RegionSelection, MAX_SUCCESS_CAP,
};
use report::ConsoleReporter;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Run nslookup for a domain against the public DNS servers of a region")]
#[command(
    long_about = "Fetches the list of public DNS servers of the selected regions from \
public-dns.info and runs nslookup for DOMAIN against each of them.\n\n\
When no region flag is given, the servers of the default region (Hong Kong \
unless --default-region or the config file says otherwise) are used.\n\n\
Output carries no byte-order mark unless --bom is given; pass it to get the \
BOM-prefixed output of earlier releases."
)]
struct Cli {
    /// Domain to resolve (e.g. example.com)
    domain: String,

    /// Use DNS servers in Hong Kong
    #[arg(short = 'k', long)]
    hong_kong: bool,

    /// Use DNS servers in the USA
    #[arg(short = 'u', long)]
    usa: bool,

    /// Use DNS servers in Germany
    #[arg(short = 'd', long)]
    germany: bool,

    /// Stop each region after this many successful lookups (0 = no limit)
    #[arg(
        short = 'c',
        long,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_SUCCESS_CAP))
    )]
    count: Option<u32>,

    /// Region used when no region flag is given: hk, us or de
    #[arg(long, value_name = "REGION")]
    default_region: Option<Region>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    /// Resolver catalog origin (default: https://public-dns.info)
    #[arg(long)]
    catalog_url: Option<String>,

    /// Lookup utility invoked as `<PROGRAM> <DOMAIN> <SERVER>`
    #[arg(long)]
    probe_program: Option<String>,

    /// Write a UTF-8 byte-order mark before any output (off by default,
    /// unlike earlier releases which always wrote it)
    #[arg(long)]
    bom: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            count: self.count,
            default_region: self.default_region,
            catalog_url: self.catalog_url.clone(),
            probe_program: self.probe_program.clone(),
            log_level: self.log_level.clone(),
            emit_bom: self.bom,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    if config.output.emit_bom {
        report::write_bom(&mut std::io::stdout())?;
    }

    let domain = DomainName::parse(&cli.domain)?;
    let policy = BatchPolicy::new(domain, config.lookup.count)?;
    let selection = RegionSelection::from_flags(
        cli.hong_kong,
        cli.usa,
        cli.germany,
        config.lookup.default_region,
    );

    info!(
        domain = %policy.target_domain,
        regions = ?selection.regions(),
        count = policy.success_cap,
        probe = %config.probe.program,
        "Starting lookup"
    );

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(adapters, Arc::new(ConsoleReporter::stdout()));

    let summaries = use_cases
        .lookup_regions
        .execute(selection.regions(), &policy)
        .await?;

    info!(regions = summaries.len(), "Lookup finished");

    Ok(())
}
