//! RG CLI - generate reports from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rg-cli",
    version,
    about = "Generate Reports from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: rg_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    rg_cmd::run(cli.command).await
}
