use clap::Parser;

use qpost::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    qpost::logging::init();
    qpost::run(&cli).await
}
