//! Intro screen introducing the relay number feature.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::cli::tui::wizard::icons::{self, Icon, IconStyle};
use crate::cli::tui::wizard::state::IntroState;
use crate::cli::tui::wizard::theme::Theme;

pub fn render(frame: &mut Frame, _state: &IntroState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_content(frame, chunks[0], theme);
    render_help(frame, chunks[1], theme);
}

fn render_content(frame: &mut Frame, area: ratatui::layout::Rect, theme: &Theme) {
    let total_height = 14;
    let vertical_padding = area.height.saturating_sub(total_height) / 2;

    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_padding),
            Constraint::Min(0),
            Constraint::Length(vertical_padding),
        ])
        .split(area);

    let mut lines = Vec::new();

    lines.push(Line::from(icons::render(
        Icon::Check,
        &IconStyle {
            label: None,
            color: Some(Color::Green),
            bold: true,
        },
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Your number has been verified!",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(
        "Calls and texts to your relay number will be forwarded to you.",
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Next, choose your relay phone number",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(
        "Pick the number people will see when you call or text them.",
    ));
    lines.push(Line::from("Search by city or area code to find one you like."));
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to begin",
        theme.focused,
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, outer_chunks[1]);
}

fn render_help(frame: &mut Frame, area: ratatui::layout::Rect, theme: &Theme) {
    let help_text = Line::from(vec![
        Span::raw(" Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to begin  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(theme.help_bar);

    frame.render_widget(help, area);
}
