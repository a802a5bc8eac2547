pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod phonenumber;

pub use error::{RelayError, Result};
