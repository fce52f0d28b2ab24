use ferrous_lookup_application::ports::LookupProbe;
use ferrous_lookup_domain::{DomainError, DomainName};
use std::io::{self, Read};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs an external resolution utility as `<program> <domain> <server>` and
/// waits for it to exit. No timeout is applied: a hung utility blocks the
/// batch.
pub struct CommandProbe {
    program: String,
}

impl CommandProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::new("nslookup")
    }
}

impl LookupProbe for CommandProbe {
    fn probe(&self, domain: &DomainName, server: &str) -> Result<String, DomainError> {
        let spawn_error = |e: io::Error| DomainError::ProbeSpawn(format!("{}: {}", self.program, e));

        // stdout and stderr share one pipe so the output keeps the order the
        // utility wrote it in.
        let (mut reader, writer) = io::pipe().map_err(spawn_error)?;
        let stdout_writer = writer.try_clone().map_err(spawn_error)?;

        let mut child = {
            let mut command = Command::new(&self.program);
            command
                .arg(domain.as_str())
                .arg(server)
                .stdin(Stdio::null())
                .stdout(stdout_writer)
                .stderr(writer);
            // Dropping the command closes our copies of the write end.
            command.spawn().map_err(spawn_error)?
        };

        let mut raw = Vec::new();
        let read = reader.read_to_end(&mut raw);
        let status = child.wait().map_err(spawn_error)?;
        read.map_err(spawn_error)?;

        let combined = decode_output(&raw);

        if !status.success() {
            debug!(
                program = %self.program,
                server = server,
                status = %status,
                output = %combined,
                "Probe exited with failure"
            );
            return Err(DomainError::ProbeFailed(status.to_string()));
        }

        Ok(combined)
    }
}

fn decode_output(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
