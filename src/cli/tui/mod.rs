/// Terminal User Interface module for interactive commands
pub mod wizard;

use std::sync::Arc;

use crate::api::NumberService;
use crate::Result;

/// Run the interactive claim wizard
pub async fn run_claim_wizard(service: Arc<dyn NumberService>) -> Result<()> {
    wizard::run(service).await
}
