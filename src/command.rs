//! crypto-bmark command abstraction and the timed run sequence.

use crate::cli::Dispatcher;
use crate::error::Error;
use crate::significant;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{error, info};

/// Size of the zero-filled input handed to every hash computation.
pub const NUMBER_OF_INPUT_BYTES: usize = 4096;

/// A benchmark subcommand for one hash algorithm.
pub trait Command {
    /// Name the command is registered and selected under.
    fn name(&self) -> &'static str;

    /// One-line description shown in the usage text.
    fn description(&self) -> &'static str;

    /// Adds this command to the dispatcher's command table.
    fn register(&self, parent: &mut Dispatcher) -> Result<(), Error> {
        parent.register(self.name(), self.description())
    }

    /// Hashes `data` and returns the digest.
    fn compute(&self, data: &[u8]) -> Result<Vec<u8>, Error>;

    /// Runs the interactive benchmark: announce, wait for the operator, time `compute`, report.
    fn run(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), Error> {
        writeln!(
            output,
            "Start performance measuring tool against the process id: {}",
            std::process::id()
        )?;
        writeln!(output, "Then press [ENTER] key to continue!")?;
        output.flush()?;

        input.read_until(b'\n', &mut Vec::new())?;

        let data = [0u8; NUMBER_OF_INPUT_BYTES];
        info!(">Start {} over {} bytes...", self.name(), data.len());

        let now = Instant::now();
        let result = self.compute(&data);
        let elapsed = now.elapsed();

        let digest = result
            .and_then(|digest| {
                if digest.is_empty() {
                    Err(Error::Compute {
                        algorithm: self.name().to_string(),
                        reason: "empty digest".to_string(),
                    })
                } else {
                    Ok(digest)
                }
            })
            .map_err(|err| {
                error!("{}", err);
                err
            })?;

        info!("Finish {}", self.name());
        writeln!(
            output,
            "Total time taken for crypto operation: {} ms",
            significant::milliseconds(elapsed)
        )?;
        writeln!(output, "Result: {}", hex::encode(&digest))?;
        Ok(())
    }
}
