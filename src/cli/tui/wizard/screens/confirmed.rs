//! Confirmation screen shown once a relay number is assigned.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::wizard::icons::{self, Icon, IconStyle};
use crate::cli::tui::wizard::state::ConfirmedState;
use crate::cli::tui::wizard::theme::Theme;
use crate::phonenumber::format_phone;

pub fn render(frame: &mut Frame, state: &ConfirmedState, theme: &Theme) {
    let main_block = Block::default()
        .title(" Relay number registered ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = main_block.inner(frame.area());
    frame.render_widget(main_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

    render_content(frame, chunks[0], state, theme);
    render_help(frame, chunks[1], theme);
}

fn render_content(frame: &mut Frame, area: Rect, state: &ConfirmedState, theme: &Theme) {
    let vertical_padding = area.height.saturating_sub(10) / 2;
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(icons::render(
            Icon::Phone,
            &IconStyle::colored(Color::Green),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Congratulations! Your new relay number is ready.",
            theme.success,
        )),
        Line::from(Span::styled(
            format_phone(&state.number),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Share it anywhere you would give out your real number."),
        Line::from("Calls and texts will be forwarded to your verified phone."),
        Line::from(""),
        Line::from(Span::styled("Press Enter to finish", theme.focused)),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, outer_chunks[1]);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help_text = Line::from(vec![
        Span::raw(" "),
        icons::render(Icon::Check, &IconStyle::colored(Color::Green)),
        Span::raw(" Done  Press "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" to finish"),
    ]);

    let help = Paragraph::new(help_text).style(theme.help_bar);
    frame.render_widget(help, area);
}
