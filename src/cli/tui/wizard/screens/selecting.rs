//! Number selection screen: search box, suggestion radio group, and the
//! "other options" cycling affordance.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::cli::tui::wizard::icons::{self, Icon, IconStyle};
use crate::cli::tui::wizard::state::{Pane, SelectingState};
use crate::cli::tui::wizard::theme::Theme;
use crate::phonenumber::format_phone;

pub fn render(frame: &mut Frame, state: &SelectingState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search bar
            Constraint::Min(8),    // Suggestions
            Constraint::Length(2), // Error / status line
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], theme);
    render_search_bar(frame, chunks[1], state, theme);
    render_suggestions(frame, chunks[2], state, theme);
    render_status(frame, chunks[3], state, theme);
    render_help(frame, chunks[4], state, theme);
}

fn render_header(frame: &mut Frame, area: Rect, _theme: &Theme) {
    let header = Line::from(vec![
        icons::render(Icon::Flag, &IconStyle::colored(Color::Blue)),
        Span::raw(" United States and Canada"),
    ]);

    let paragraph = Paragraph::new(header).block(
        Block::default()
            .title(" Choose your relay phone number ")
            .borders(Borders::ALL),
    );

    frame.render_widget(paragraph, area);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &SelectingState, theme: &Theme) {
    let focused = state.focused_pane == Pane::Search;

    let mut spans = vec![
        icons::render(Icon::Search, &IconStyle::default()),
        Span::raw(" "),
    ];
    if state.search_input.value().is_empty() && !focused {
        spans.push(Span::styled("Search by city or area code", theme.muted));
    } else {
        spans.push(Span::raw(state.search_input.value().to_string()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }
    if state.pager.is_searching() {
        spans.push(Span::styled("   searching...", theme.muted));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused
        } else {
            Style::default()
        });

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, state: &SelectingState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if state.focused_pane == Pane::NumberList {
            theme.focused
        } else {
            Style::default()
        });

    // Initial suggestions still pending is distinct from a real empty
    // result.
    if !state.pager.is_initialized() {
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Loading suggested numbers...", theme.muted)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let mut lines = vec![Line::from("")];

    if state.pager.is_empty() {
        lines.push(Line::from(Span::styled(
            "No suggestions available. Try a search above.",
            theme.muted,
        )));
    } else {
        for (i, number) in state.pager.visible_page().iter().enumerate() {
            let is_highlighted = i == state.highlighted;
            let radio = if is_highlighted { "(•)" } else { "( )" };
            let style = if is_highlighted {
                theme.selected
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("  {} {}", radio, format_phone(number)),
                style,
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::raw("  "),
            icons::render(
                Icon::Refresh,
                &IconStyle {
                    label: Some("Show me other options".to_string()),
                    color: Some(Color::Cyan),
                    bold: false,
                },
            ),
            Span::styled("  (press o)", theme.muted),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &SelectingState, theme: &Theme) {
    let line = if let Some(error) = &state.error {
        Line::from(vec![
            Span::raw(" "),
            icons::render(Icon::Close, &IconStyle::colored(Color::Red)),
            Span::raw(" "),
            Span::styled(error.clone(), theme.error),
        ])
    } else if state.registering {
        Line::from(Span::styled(" Registering your number...", theme.muted))
    } else {
        Line::from(Span::styled(
            " Your relay number can't be changed later.",
            theme.muted,
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, area: Rect, state: &SelectingState, theme: &Theme) {
    let help_text = if state.focused_pane == Pane::Search {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Search  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" Back to numbers"),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Choose  "),
            Span::styled("o", Style::default().fg(Color::Cyan)),
            Span::raw(" Other options  "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" Search  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" Register  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ])
    };

    let help = Paragraph::new(help_text).style(theme.help_bar);
    frame.render_widget(help, area);
}
