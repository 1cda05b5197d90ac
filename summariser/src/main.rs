use anyhow::Context;
use clap::Parser as _;
use log::info;
use openlane_summariser::pdk::{pdk_root_from_env, Pdk};
use openlane_summariser::{execute, CliArgs, SpawnLauncher};

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();
    info!("{CRATE_NAME} {CRATE_VERSION}");

    let pdk_root = pdk_root_from_env()?;
    let pdk = Pdk::new(pdk_root, &args.pdk, &args.scl);
    info!("Using PDK {} in {}", args.pdk, pdk.root().display());

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    execute(&args, &pdk, stdin, stdout, &mut SpawnLauncher).context("Failed to summarise run")?;

    Ok(())
}
