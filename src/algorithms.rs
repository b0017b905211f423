//! crypto-bmark hash algorithm commands.

use crate::command::Command;
use crate::error::Error;

/// SHA-256 benchmark.
pub struct Sha256;

impl Command for Sha256 {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn description(&self) -> &'static str {
        "Measure a SHA-256 digest computation"
    }

    fn compute(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        use sha2::Digest;
        Ok(sha2::Sha256::digest(data).to_vec())
    }
}

/// SHA-512 benchmark.
pub struct Sha512;

impl Command for Sha512 {
    fn name(&self) -> &'static str {
        "sha512"
    }

    fn description(&self) -> &'static str {
        "Measure a SHA-512 digest computation"
    }

    fn compute(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        use sha2::Digest;
        Ok(sha2::Sha512::digest(data).to_vec())
    }
}

/// SHA3-256 benchmark.
pub struct Sha3_256;

impl Command for Sha3_256 {
    fn name(&self) -> &'static str {
        "sha3-256"
    }

    fn description(&self) -> &'static str {
        "Measure a SHA3-256 digest computation"
    }

    fn compute(&self, data: &[u8]) -> Result<Vec<u8>, Error> {
        use sha3::Digest;
        Ok(sha3::Sha3_256::digest(data).to_vec())
    }
}

/// All benchmark commands in registration order.
pub fn commands() -> Vec<Box<dyn Command>> {
    vec![Box::new(Sha256), Box::new(Sha512), Box::new(Sha3_256)]
}
