//! Replays a seed into the EVM program pointfuzz generates from it.
use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod cmd;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    cmd::Cmd::parse().run()?;

    Ok(())
}
