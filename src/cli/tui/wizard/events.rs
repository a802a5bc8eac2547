use ratatui::crossterm::event::KeyEvent;

use crate::api::{RelayNumber, SuggestionBatch};

/// All possible events in the wizard.
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events - data layer
    SuggestionsLoaded(SuggestionBatch),
    SuggestionsFailed(String),
    NumbersLoaded(Vec<RelayNumber>),
    NumbersFailed(String),
    SearchComplete(Option<Vec<String>>),
    RegisterComplete(Result<RelayNumber, String>),

    // UI events
    Tick, // for redraws while async work is pending
}
