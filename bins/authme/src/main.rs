use authme::cmd::Cli;
use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // `RUST_LOG` wins when set, otherwise `info`, or `debug` with `-v`.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.cmd.run()?;

    Ok(())
}
