// src/bin/cli.rs
use clap::Parser;
use translink::{cli, ScanState};

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Arguments::parse();
    if cli::run(args).await? == ScanState::Errored {
        std::process::exit(1);
    }
    Ok(())
}
