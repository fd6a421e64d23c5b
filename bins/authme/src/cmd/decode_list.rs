use auth7702::{authorization::decode_authorization_list, primitives::hex, RecoveredAuthorization};
use clap::Parser;

/// Errors of the `decode-list` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Input is not an RLP authorization list.
    #[error("invalid authorization list: {0}")]
    Rlp(#[from] alloy_rlp::Error),
    /// Bytes left after the list.
    #[error("{0} trailing bytes after the authorization list")]
    TrailingBytes(usize),
    /// Output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// `decode-list` subcommand
///
/// Prints the decoded entries as JSON, `authority` is null for entries whose signer could not be
/// recovered.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded RLP list of `[chain_id, address, nonce, y_parity, r, s]` entries
    #[arg(required = true)]
    list: String,
}

impl Cmd {
    /// Runs `decode-list` command.
    pub fn run(&self) -> Result<(), Error> {
        let list = self.decode()?;
        println!("{}", serde_json::to_string_pretty(&list)?);
        Ok(())
    }

    fn decode(&self) -> Result<Vec<RecoveredAuthorization>, Error> {
        let bytes = hex::decode(self.list.trim())?;
        let buf = &mut bytes.as_slice();
        let list = decode_authorization_list(buf)?;
        if !buf.is_empty() {
            return Err(Error::TrailingBytes(buf.len()));
        }
        Ok(list)
    }
}
