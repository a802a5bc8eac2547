//! Relay number REST API layer.
//!
//! The wizard and the one-shot commands talk to the service through the
//! [`backend::NumberService`] trait; [`client::RelayApiClient`] is the
//! HTTP implementation.

pub mod backend;
pub mod client;
pub mod types;

pub use backend::NumberService;
pub use client::RelayApiClient;
pub use types::{RelayNumber, RelayNumberSuggestion, SuggestionBatch};
