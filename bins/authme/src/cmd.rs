//! Subcommands of `authme`.

pub mod address;
pub mod decode_list;
pub mod designator;
pub mod hash;
pub mod sign;
pub mod verify;

use clap::{Parser, Subcommand};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(version, about = "Sign and verify EIP-7702 authorizations")]
pub struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// Subcommand to run
    #[command(subcommand)]
    pub cmd: MainCmd,
}

/// `authme` subcommands.
#[derive(Subcommand, Debug)]
#[command(infer_subcommands = true)]
pub enum MainCmd {
    /// Print the signing hash of an authorization
    Hash(hash::Cmd),
    /// Sign an authorization with a private key
    Sign(sign::Cmd),
    /// Verify signed authorizations read from a file or stdin
    Verify(verify::Cmd),
    /// Print the address of a private key
    Address(address::Cmd),
    /// Print the delegation designator for a contract
    Designator(designator::Cmd),
    /// Decode an RLP authorization list and recover its signers
    DecodeList(decode_list::Cmd),
}

/// Errors returned by the subcommands.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Signing or address derivation failed.
    #[error(transparent)]
    Sign(#[from] auth7702::SignError),
    /// Verification input could not be read or an entry is invalid.
    #[error(transparent)]
    Verify(#[from] verify::Error),
    /// Authorization list could not be decoded.
    #[error(transparent)]
    DecodeList(#[from] decode_list::Error),
    /// Output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl MainCmd {
    /// Runs the subcommand.
    pub fn run(&self) -> Result<(), Error> {
        match self {
            Self::Hash(cmd) => cmd.run(),
            Self::Sign(cmd) => cmd.run(),
            Self::Verify(cmd) => cmd.run().map_err(Into::into),
            Self::Address(cmd) => cmd.run(),
            Self::Designator(cmd) => cmd.run(),
            Self::DecodeList(cmd) => cmd.run().map_err(Into::into),
        }
    }
}

/// Authorization tuple given on the command line.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct AuthorizationArgs {
    /// Chain id, 0 allows the authorization on every chain
    #[arg(long)]
    pub chain_id: u64,
    /// Contract the account delegates to
    #[arg(long)]
    pub contract: auth7702::primitives::Address,
    /// Current nonce of the authorizing account
    #[arg(long)]
    pub nonce: u64,
}

impl From<AuthorizationArgs> for auth7702::Authorization {
    fn from(args: AuthorizationArgs) -> Self {
        Self::new(args.chain_id, args.contract, args.nonce)
    }
}

/// Private key taken from `--private-key` or `AUTHME_PRIVATE_KEY`.
#[derive(clap::Args, Clone, Copy)]
pub struct PrivateKeyArgs {
    /// Hex encoded secp256k1 private key
    #[arg(long, env = "AUTHME_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: auth7702::primitives::B256,
}

impl core::fmt::Debug for PrivateKeyArgs {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKeyArgs")
            .field("private_key", &"<redacted>")
            .finish()
    }
}
