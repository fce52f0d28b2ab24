use ferrous_lookup_application::ports::OutcomeReporter;
use ferrous_lookup_domain::{
    BatchState, BatchSummary, DomainName, LookupOutcome, LookupStatus, Region,
};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use tracing::warn;

const UTF8_BOM: &str = "\u{feff}";

pub fn write_bom(out: &mut impl Write) -> io::Result<()> {
    out.write_all(UTF8_BOM.as_bytes())?;
    out.flush()
}

/// Human-readable outcome stream.
pub struct ConsoleReporter<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, text: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write lookup output");
        }
    }
}

impl<W: Write + Send> OutcomeReporter for ConsoleReporter<W> {
    fn batch_started(&self, region: Region, domain: &DomainName) {
        self.emit(&format!(
            "Querying {} DNS servers for domain {}\n",
            region.display_name(),
            domain
        ));
    }

    fn outcome(&self, outcome: &LookupOutcome) {
        let text = match &outcome.status {
            LookupStatus::Succeeded { raw_output } => format!(
                "Lookup result for IP {}:\n{}\n",
                outcome.candidate_address, raw_output
            ),
            LookupStatus::Failed { error_detail } => format!(
                "Lookup failed for IP {}: {}\n",
                outcome.candidate_address, error_detail
            ),
        };
        self.emit(&text);
    }

    fn batch_finished(&self, summary: &BatchSummary) {
        let stop = match summary.state {
            BatchState::TerminatedEarly => ", stopped at success limit",
            _ => "",
        };
        self.emit(&format!(
            "{}: {} probed, {} succeeded, {} failed{}\n",
            summary.region.display_name(),
            summary.probed,
            summary.succeeded,
            summary.failed,
            stop
        ));
    }
}
