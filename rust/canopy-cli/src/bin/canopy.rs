use anyhow::Result;
use canopy_cli::{CanopyCli, run};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("CANOPY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = CanopyCli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
