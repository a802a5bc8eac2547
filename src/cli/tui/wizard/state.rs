use tui_input::Input;

use super::pager::SuggestionPager;
use crate::api::RelayNumber;

/// Main state machine for the claim wizard.
///
/// The flow is linear: Intro -> Selecting -> Confirmed. Entering
/// Confirmed is not a local decision; it happens whenever the observed
/// assignment list becomes non-empty.
#[derive(Debug)]
pub enum WizardState {
    Intro(IntroState),
    Selecting(SelectingState),
    Confirmed(ConfirmedState),
}

/// State for the intro screen.
#[derive(Debug, Default)]
pub struct IntroState {}

/// State for the number selection screen.
#[derive(Debug, Default)]
pub struct SelectingState {
    /// Candidate batch and paging window.
    pub pager: SuggestionPager,

    // UI state
    pub focused_pane: Pane,
    /// Index of the highlighted radio option within the visible page.
    pub highlighted: usize,
    pub search_input: Input,

    /// A registration is outstanding.
    pub registering: bool,
    /// Last registration or search failure, shown inline.
    pub error: Option<String>,
}

impl SelectingState {
    /// The number the highlighted radio option refers to, if any.
    pub fn selected_number(&self) -> Option<&str> {
        self.pager
            .visible_page()
            .get(self.highlighted)
            .map(String::as_str)
    }

    /// Keep the highlight inside the visible page after it shrinks.
    pub fn clamp_highlight(&mut self) {
        let visible = self.pager.visible_page().len();
        if visible == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= visible {
            self.highlighted = visible - 1;
        }
    }
}

/// State for the confirmation screen.
#[derive(Debug)]
pub struct ConfirmedState {
    /// The relay number that was assigned.
    pub number: String,
}

/// Which pane of the selection screen is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    NumberList,
    Search,
}

/// State transitions for the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    Continue, // Go to next screen
    Quit,     // Exit wizard
}

impl WizardState {
    /// Get the name of the current state.
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Intro(_) => "Welcome",
            WizardState::Selecting(_) => "Choose a number",
            WizardState::Confirmed(_) => "Done",
        }
    }
}

/// Derive the confirmed state from the externally owned assignment
/// list. Returns `None` while the account has no relay number.
pub fn confirmed_from_assignments(assigned: &[RelayNumber]) -> Option<ConfirmedState> {
    assigned.first().map(|number| ConfirmedState {
        number: number.number.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(number: &str) -> RelayNumber {
        RelayNumber {
            number: number.to_string(),
            location: None,
            enabled: true,
        }
    }

    #[test]
    fn empty_assignment_list_is_not_confirmed() {
        assert!(confirmed_from_assignments(&[]).is_none());
    }

    #[test]
    fn non_empty_assignment_list_confirms_with_first_number() {
        let state = confirmed_from_assignments(&[assigned("+15035550100")]).unwrap();
        assert_eq!(state.number, "+15035550100");
    }

    #[test]
    fn selected_number_tracks_the_visible_page() {
        let mut state = SelectingState::default();
        state
            .pager
            .initialize(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(state.selected_number(), Some("a"));
        state.highlighted = 1;
        assert_eq!(state.selected_number(), Some("b"));
        state.highlighted = 2;
        assert_eq!(state.selected_number(), None);
    }

    #[test]
    fn clamp_highlight_pulls_index_back_into_page() {
        let mut state = SelectingState::default();
        state.pager.initialize(vec!["a".to_string()]);
        state.highlighted = 2;
        state.clamp_highlight();
        assert_eq!(state.highlighted, 0);
    }
}
