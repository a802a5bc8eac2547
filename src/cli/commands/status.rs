use async_trait::async_trait;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use super::CommandHandler;
use crate::api::{NumberService, RelayApiClient};
use crate::config::RelayConfig;
use crate::phonenumber::format_phone;
use crate::Result;

/// Handler for the `status` command.
pub struct StatusCommand;

#[derive(Tabled)]
struct NumberRow {
    #[tabled(rename = "Relay Number")]
    number: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
}

#[async_trait]
impl CommandHandler for StatusCommand {
    async fn execute(&self) -> Result<()> {
        let config = RelayConfig::load()?;
        let client = RelayApiClient::new(&config)?;

        let numbers = client.relay_numbers().await?;
        if numbers.is_empty() {
            println!("No relay number assigned yet. Run `relaynum claim` to get one.");
            return Ok(());
        }

        let rows: Vec<NumberRow> = numbers
            .into_iter()
            .map(|n| NumberRow {
                number: format_phone(&n.number),
                location: n.location.unwrap_or_else(|| "-".to_string()),
                enabled: if n.enabled { "yes" } else { "no" },
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::left()));
        println!("{table}");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "status"
    }
}
