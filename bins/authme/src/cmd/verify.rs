use auth7702::{
    primitives::Address, verify, SignedAuthorization, VerificationError, VerificationResult,
};
use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Errors of the `verify` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input file is missing.
    #[error("the specified path does not exist: {0}")]
    PathNotExists(PathBuf),
    /// Input could not be read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Input is not JSON.
    #[error("invalid input: {0}")]
    Json(#[from] serde_json::Error),
    /// At least one entry failed verification.
    #[error("{invalid} of {total} authorizations failed verification")]
    Invalid {
        /// Number of invalid entries.
        invalid: usize,
        /// Number of entries read.
        total: usize,
    },
}

/// `verify` subcommand
///
/// Prints one JSON verification result per line.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// JSON file holding a signed authorization or an array of them
    ///
    /// Reads stdin when omitted or `-`.
    path: Option<PathBuf>,
    /// Expected signer, defaults to the address claimed by each entry
    #[arg(long)]
    signer: Option<Address>,
    /// Expected contract, defaults to the contract named by each entry
    #[arg(long)]
    contract: Option<Address>,
}

impl Cmd {
    /// Runs `verify` command.
    pub fn run(&self) -> Result<(), Error> {
        let results = self.verify_json(&self.read_input()?)?;
        for result in &results {
            println!("{}", serde_json::to_string(result)?);
        }

        let total = results.len();
        let invalid = results.iter().filter(|result| !result.is_valid).count();
        if invalid > 0 {
            return Err(Error::Invalid { invalid, total });
        }
        tracing::info!(total, "all authorizations verified");
        Ok(())
    }

    fn read_input(&self) -> Result<String, Error> {
        match self.path.as_deref() {
            None => Ok(io::read_to_string(io::stdin())?),
            Some(path) if path == Path::new("-") => Ok(io::read_to_string(io::stdin())?),
            Some(path) => {
                if !path.exists() {
                    return Err(Error::PathNotExists(path.to_path_buf()));
                }
                Ok(std::fs::read_to_string(path)?)
            }
        }
    }

    /// Verifies every entry of a JSON object or array.
    ///
    /// Entries are read one by one, so an unreadable entry only produces an invalid result of
    /// its own.
    fn verify_json(&self, json: &str) -> Result<Vec<VerificationResult>, Error> {
        let entries = match serde_json::from_str(json)? {
            Value::Array(entries) => entries,
            entry => vec![entry],
        };
        tracing::debug!(len = entries.len(), "read signed authorizations");

        Ok(entries
            .into_iter()
            .map(|entry| self.verify_entry(entry))
            .collect())
    }

    fn verify_entry(&self, entry: Value) -> VerificationResult {
        // kept so the result can still name the claimed signer
        let claimed = entry
            .get("address")
            .and_then(|address| Address::deserialize(address).ok());

        match serde_json::from_value::<SignedAuthorization>(entry) {
            Ok(signed) => verify(
                &signed,
                self.signer.unwrap_or(signed.address()),
                self.contract.unwrap_or(signed.contract_address()),
            ),
            Err(err) => {
                tracing::warn!(%err, "unreadable signed authorization");
                VerificationResult::malformed(
                    VerificationError::InvalidEntry(err.to_string()),
                    self.signer.or(claimed).unwrap_or_default(),
                    false,
                )
            }
        }
    }
}
