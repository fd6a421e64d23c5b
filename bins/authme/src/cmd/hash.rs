use super::{AuthorizationArgs, Error};
use auth7702::{compute_signing_hash, primitives::hex, Authorization};
use clap::Parser;

/// `hash` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    authorization: AuthorizationArgs,
    /// Print the `0x05 || rlp([chain_id, address, nonce])` preimage before the hash
    #[arg(long)]
    preimage: bool,
}

impl Cmd {
    /// Runs `hash` command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let authorization = Authorization::from(self.authorization);
        let hash = compute_signing_hash(&authorization);
        if self.preimage {
            format!(
                "{}\n{hash}",
                hex::encode_prefixed(authorization.signing_preimage())
            )
        } else {
            hash.to_string()
        }
    }
}
