use super::Error;
use auth7702::{
    primitives::{hex, Address},
    Eip7702Bytecode,
};
use clap::Parser;

/// `designator` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Contract the account delegates to
    #[arg(long)]
    contract: Address,
}

impl Cmd {
    /// Runs `designator` command, printing the code installed on a delegating account.
    pub fn run(&self) -> Result<(), Error> {
        println!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        hex::encode_prefixed(Eip7702Bytecode::new(self.contract).raw())
    }
}
