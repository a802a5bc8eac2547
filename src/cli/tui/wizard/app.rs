use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind},
    DefaultTerminal, Frame,
};
use tokio::time;
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;

use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;
use crate::api::{NumberService, RelayNumber};
use crate::Result;

type EventTx = tokio::sync::mpsc::UnboundedSender<AppEvent>;

/// Main application struct for the claim wizard.
pub struct App {
    /// Current state of the wizard
    state: WizardState,
    /// Relay number data layer
    service: Arc<dyn NumberService>,
    /// Latest observed assignment list; the Confirmed stage is derived
    /// from this, never stored ahead of it
    assigned: Vec<RelayNumber>,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Event sender for background tasks
    event_tx: Option<EventTx>,
    /// Last time Ctrl+C was pressed, for double-press exit
    last_ctrl_c: Option<std::time::Instant>,
}

impl App {
    /// Create a new app instance.
    pub fn new(service: Arc<dyn NumberService>) -> Self {
        Self {
            state: WizardState::Intro(IntroState::default()),
            service,
            assigned: Vec::new(),
            should_quit: false,
            theme: Theme::default(),
            event_tx: None,
            last_ctrl_c: None,
        }
    }

    /// Run the application.
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::task::spawn_blocking(move || loop {
            if let Ok(event) = event::read() {
                match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let _ = input_tx.send(AppEvent::Key(key));
                    }
                    Event::Resize(width, height) => {
                        let _ = input_tx.send(AppEvent::Resize(width, height));
                    }
                    _ => {}
                }
            }
        });

        // The assignment list decides whether the account is already
        // provisioned; start observing it right away.
        self.spawn_fetch_numbers();

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop.
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with a timeout so pending async work keeps
            // the screen fresh
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => {
                    if let Some(transition) = self.handle_event(event)? {
                        self.transition_state(transition);
                    }
                }
                Ok(None) => break, // Channel closed
                Err(_) => {
                    if let Some(transition) = self.handle_event(AppEvent::Tick)? {
                        self.transition_state(transition);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current state.
    fn render(&mut self, frame: &mut Frame) {
        match &self.state {
            WizardState::Intro(state) => {
                super::screens::intro::render(frame, state, &self.theme);
            }
            WizardState::Selecting(state) => {
                super::screens::selecting::render(frame, state, &self.theme);
            }
            WizardState::Confirmed(state) => {
                super::screens::confirmed::render(frame, state, &self.theme);
            }
        }
    }

    /// Handle an event.
    pub fn handle_event(&mut self, event: AppEvent) -> Result<Option<StateTransition>> {
        // Handle global keys first. Quit keys are suppressed while the
        // search box has focus so they can be typed into it.
        if let AppEvent::Key(key) = &event {
            let typing = matches!(
                &self.state,
                WizardState::Selecting(s) if s.focused_pane == Pane::Search
            );
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc if !typing => {
                    self.should_quit = true;
                    return Ok(None);
                }
                KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                    let now = std::time::Instant::now();
                    if let Some(last) = self.last_ctrl_c {
                        if now.duration_since(last).as_millis() < 1000 {
                            self.should_quit = true;
                            return Ok(None);
                        }
                    }
                    self.last_ctrl_c = Some(now);
                }
                _ => {}
            }
        }

        // The assignment list is observed in every stage; once the
        // wizard has started, a non-empty list moves it to Confirmed.
        let event = match event {
            AppEvent::NumbersLoaded(numbers) => {
                debug!("observed {} assigned relay numbers", numbers.len());
                self.assigned = numbers;
                if matches!(self.state, WizardState::Selecting(_)) {
                    if let Some(confirmed) = confirmed_from_assignments(&self.assigned) {
                        self.state = WizardState::Confirmed(confirmed);
                    }
                }
                return Ok(None);
            }
            other => other,
        };

        // Route to state-specific handler
        use WizardState::*;
        match self.state {
            Intro(_) => {
                if let Intro(ref mut state) = self.state {
                    return Self::handle_intro_event(state, event);
                }
                Ok(None)
            }
            Selecting(_) => {
                let tx = self.event_tx.clone();
                let service = self.service.clone();
                if let Selecting(ref mut state) = self.state {
                    return Self::handle_selecting_event(state, event, tx, service);
                }
                Ok(None)
            }
            Confirmed(_) => self.handle_confirmed_event(event),
        }
    }

    /// Transition to a new state.
    pub fn transition_state(&mut self, transition: StateTransition) {
        match transition {
            StateTransition::Continue => {
                self.state = match &self.state {
                    WizardState::Intro(_) => {
                        // Already provisioned accounts skip selection.
                        if let Some(confirmed) = confirmed_from_assignments(&self.assigned) {
                            WizardState::Confirmed(confirmed)
                        } else {
                            self.spawn_fetch_suggestions();
                            WizardState::Selecting(SelectingState::default())
                        }
                    }
                    // Selecting leaves only through the observed
                    // assignment list, handled in handle_event.
                    WizardState::Selecting(_) => return,
                    WizardState::Confirmed(_) => {
                        self.should_quit = true;
                        return;
                    }
                };
            }
            StateTransition::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_intro_event(
        _state: &mut IntroState,
        event: AppEvent,
    ) -> Result<Option<StateTransition>> {
        if let AppEvent::Key(key) = event {
            if key.code == KeyCode::Enter {
                return Ok(Some(StateTransition::Continue));
            }
        }
        Ok(None)
    }

    fn handle_selecting_event(
        state: &mut SelectingState,
        event: AppEvent,
        tx: Option<EventTx>,
        service: Arc<dyn NumberService>,
    ) -> Result<Option<StateTransition>> {
        match event {
            AppEvent::Key(key) => {
                // Search box input is handled first while focused.
                if state.focused_pane == Pane::Search {
                    match key.code {
                        KeyCode::Enter => {
                            let query = state.search_input.value().trim().to_string();
                            if !query.is_empty() {
                                Self::submit_search(state, query, tx, service);
                            }
                        }
                        KeyCode::Esc | KeyCode::Tab => {
                            state.focused_pane = Pane::NumberList;
                        }
                        _ => {
                            state.search_input.handle_event(&Event::Key(key));
                        }
                    }
                    return Ok(None);
                }

                match key.code {
                    KeyCode::Tab | KeyCode::Char('/') => {
                        state.focused_pane = Pane::Search;
                    }
                    KeyCode::Up => {
                        if state.highlighted > 0 {
                            state.highlighted -= 1;
                        }
                    }
                    KeyCode::Down => {
                        let visible = state.pager.visible_page().len();
                        if state.highlighted + 1 < visible {
                            state.highlighted += 1;
                        }
                    }
                    KeyCode::Char('o') => {
                        // Show a different window of options
                        state.pager.advance_page();
                        state.highlighted = 0;
                    }
                    KeyCode::Enter => {
                        if state.registering {
                            return Ok(None);
                        }
                        if let Some(number) = state.selected_number() {
                            let number = number.to_string();
                            state.registering = true;
                            state.error = None;
                            Self::submit_register(number, tx, service);
                        }
                    }
                    _ => {}
                }
            }
            AppEvent::SuggestionsLoaded(batch) => {
                state.pager.initialize(batch.flatten());
                state.clamp_highlight();
            }
            AppEvent::SuggestionsFailed(message) => {
                // Stop the loading indicator; the search box still works.
                state.pager.initialize(Vec::new());
                state.error = Some(message);
            }
            AppEvent::SearchComplete(result) => {
                let replaced = matches!(&result, Some(batch) if !batch.is_empty());
                state.pager.finish_search(result);
                if replaced {
                    state.highlighted = 0;
                } else {
                    state.clamp_highlight();
                }
            }
            AppEvent::RegisterComplete(Ok(number)) => {
                state.registering = false;
                debug!("registered relay number {}", number.number);
                // Re-observe the assignment list; the Confirmed stage is
                // derived from it rather than entered here.
                if let Some(tx) = tx {
                    tokio::spawn(async move {
                        let event = match service.relay_numbers().await {
                            Ok(numbers) => AppEvent::NumbersLoaded(numbers),
                            Err(e) => AppEvent::NumbersFailed(e.to_string()),
                        };
                        let _ = tx.send(event);
                    });
                }
            }
            AppEvent::RegisterComplete(Err(message)) => {
                state.registering = false;
                state.error = Some(message);
            }
            AppEvent::NumbersFailed(message) => {
                state.error = Some(message);
            }
            _ => {}
        }
        Ok(None)
    }

    fn handle_confirmed_event(&mut self, event: AppEvent) -> Result<Option<StateTransition>> {
        if let AppEvent::Key(key) = event {
            if key.code == KeyCode::Enter {
                return Ok(Some(StateTransition::Continue));
            }
        }
        Ok(None)
    }

    /// Kick off a search unless one is already outstanding; a dropped
    /// submission leaves the batch and window untouched.
    fn submit_search(
        state: &mut SelectingState,
        query: String,
        tx: Option<EventTx>,
        service: Arc<dyn NumberService>,
    ) {
        if !state.pager.try_begin_search() {
            debug!("search already in flight, dropping submission");
            return;
        }
        let Some(tx) = tx else {
            state.pager.finish_search(None);
            return;
        };
        tokio::spawn(async move {
            let result = match service.search(&query).await {
                Ok(Some(suggestions)) => {
                    Some(suggestions.into_iter().map(|s| s.phone_number).collect())
                }
                Ok(None) => None,
                Err(e) => {
                    debug!("search failed: {e:#}");
                    None
                }
            };
            let _ = tx.send(AppEvent::SearchComplete(result));
        });
    }

    fn submit_register(number: String, tx: Option<EventTx>, service: Arc<dyn NumberService>) {
        let Some(tx) = tx else { return };
        tokio::spawn(async move {
            let result = service
                .register(&number)
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(AppEvent::RegisterComplete(result));
        });
    }

    fn spawn_fetch_suggestions(&self) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let service = self.service.clone();
        tokio::spawn(async move {
            let event = match service.suggestions().await {
                Ok(batch) => AppEvent::SuggestionsLoaded(batch),
                Err(e) => AppEvent::SuggestionsFailed(format!("{e:#}")),
            };
            let _ = tx.send(event);
        });
    }

    fn spawn_fetch_numbers(&self) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let service = self.service.clone();
        tokio::spawn(async move {
            let event = match service.relay_numbers().await {
                Ok(numbers) => AppEvent::NumbersLoaded(numbers),
                Err(e) => AppEvent::NumbersFailed(format!("{e:#}")),
            };
            let _ = tx.send(event);
        });
    }

    #[cfg(test)]
    fn state(&self) -> &WizardState {
        &self.state
    }

    #[cfg(test)]
    fn set_event_tx(&mut self, tx: EventTx) {
        self.event_tx = Some(tx);
    }
}
