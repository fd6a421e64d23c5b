use super::{Error, PrivateKeyArgs};
use auth7702::address_of;
use clap::Parser;

/// `address` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    key: PrivateKeyArgs,
}

impl Cmd {
    /// Runs `address` command.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", address_of(&self.key.private_key)?);
        Ok(())
    }
}
