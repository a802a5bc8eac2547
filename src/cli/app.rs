use clap::{Parser, Subcommand};

/// relaynum: phone masking from the terminal
#[derive(Parser)]
#[command(name = "relaynum")]
#[command(version = "0.1.0")]
#[command(about = "Claim and manage relay phone numbers")]
#[command(
    long_about = "relaynum talks to a relay phone-number service: it walks you through \
claiming a number that forwards calls and texts to your real one, and lets you inspect \
what is already assigned."
)]
pub struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactively claim a relay phone number
    Claim,

    /// Show the relay numbers assigned to your account
    Status,

    /// Search available numbers by city or area code
    Search {
        /// City name or area code, e.g. "503" or "portland"
        query: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_claim() {
        let cli = Cli::try_parse_from(["relaynum", "claim"]).unwrap();
        assert!(matches!(cli.command, Commands::Claim));
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_search_with_query() {
        let cli = Cli::try_parse_from(["relaynum", "-v", "search", "503"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Search { query } => assert_eq!(query, "503"),
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn rejects_search_without_query() {
        assert!(Cli::try_parse_from(["relaynum", "search"]).is_err());
    }
}
