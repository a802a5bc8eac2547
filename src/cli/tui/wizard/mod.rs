//! Interactive claim wizard implementation.

pub mod app;
pub mod events;
pub mod icons;
pub mod pager;
pub mod screens;
pub mod state;
pub mod theme;

use std::sync::Arc;

use crate::api::NumberService;
use crate::Result;

/// Entry point for the claim wizard.
pub async fn run(service: Arc<dyn NumberService>) -> Result<()> {
    let app = app::App::new(service);
    app.run().await
}
