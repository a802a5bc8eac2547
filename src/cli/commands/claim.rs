use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::CommandHandler;
use crate::api::RelayApiClient;
use crate::cli::tui;
use crate::config::RelayConfig;
use crate::Result;

/// Handler for the `claim` command: runs the onboarding wizard.
pub struct ClaimCommand;

#[async_trait]
impl CommandHandler for ClaimCommand {
    async fn execute(&self) -> Result<()> {
        let config = RelayConfig::load()?;
        let client = RelayApiClient::new(&config)?;
        info!("starting claim wizard against {}", config.api_base_url);
        tui::run_claim_wizard(Arc::new(client)).await
    }

    fn name(&self) -> &'static str {
        "claim"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_command_creation() {
        let cmd = ClaimCommand;
        assert_eq!(cmd.name(), "claim");
    }
}
