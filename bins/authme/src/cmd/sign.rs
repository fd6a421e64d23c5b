use super::{AuthorizationArgs, Error, PrivateKeyArgs};
use auth7702::{sign_authorization, Authorization, SignedAuthorization};
use clap::Parser;

/// `sign` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    #[command(flatten)]
    authorization: AuthorizationArgs,
    #[command(flatten)]
    key: PrivateKeyArgs,
}

impl Cmd {
    /// Runs `sign` command, printing the signed authorization as JSON.
    pub fn run(&self) -> Result<(), Error> {
        let signed = self.sign()?;
        tracing::info!(signer = %signed.address(), "signed authorization");
        println!("{}", serde_json::to_string_pretty(&signed)?);
        Ok(())
    }

    fn sign(&self) -> Result<SignedAuthorization, Error> {
        let signed =
            sign_authorization(Authorization::from(self.authorization), &self.key.private_key)?;
        Ok(signed)
    }
}
