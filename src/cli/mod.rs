//! CLI module for the User Store Service

pub mod serve;

use clap::{Parser, Subcommand};

/// User Store Service - CRUD HTTP API over an in-memory user collection
#[derive(Parser)]
#[command(name = "user-store-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default)]
pub enum Command {
    /// Run the HTTP server (default)
    #[default]
    Serve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["user-store-service"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Serve));
    }

    #[test]
    fn test_serve_subcommand() {
        let cli = Cli::try_parse_from(["user-store-service", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Serve)));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["user-store-service", "ui"]).is_err());
    }
}
