use clap::Parser;
use user_store_service::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve => cli::serve::run().await,
    }
}
