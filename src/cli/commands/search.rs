use async_trait::async_trait;

use super::CommandHandler;
use crate::api::{NumberService, RelayApiClient};
use crate::config::RelayConfig;
use crate::phonenumber::format_phone;
use crate::Result;

/// Handler for the `search` command: one-shot suggestion search.
pub struct SearchCommand {
    pub query: String,
}

#[async_trait]
impl CommandHandler for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let config = RelayConfig::load()?;
        let client = RelayApiClient::new(&config)?;

        match client.search(&self.query).await? {
            Some(suggestions) => {
                for suggestion in suggestions {
                    println!("{}", format_phone(&suggestion.phone_number));
                }
            }
            None => {
                println!("No available numbers matched {:?}.", self.query);
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_command_creation() {
        let cmd = SearchCommand {
            query: "portland".to_string(),
        };

        assert_eq!(cmd.query, "portland");
        assert_eq!(cmd.name(), "search");
    }
}
