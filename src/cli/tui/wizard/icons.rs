//! Terminal glyphs used across the wizard screens.
//!
//! One rendering function covers every icon; callers customize through
//! [`IconStyle`]'s enumerated optional fields instead of a family of
//! per-icon variants.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// The glyph set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Refresh,
    Info,
    Close,
    Check,
    Flag,
    Phone,
    Search,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Refresh => "⟳",
            Icon::Info => "ℹ",
            Icon::Close => "✗",
            Icon::Check => "✓",
            Icon::Flag => "⚑",
            Icon::Phone => "☎",
            Icon::Search => "🔍",
        }
    }
}

/// Optional overrides for icon rendering.
#[derive(Debug, Clone, Default)]
pub struct IconStyle {
    /// Text shown after the glyph, e.g. a button caption.
    pub label: Option<String>,
    pub color: Option<Color>,
    pub bold: bool,
}

impl IconStyle {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

/// Render an icon as a styled span.
pub fn render(icon: Icon, style: &IconStyle) -> Span<'static> {
    let mut text = icon.glyph().to_string();
    if let Some(label) = &style.label {
        text.push(' ');
        text.push_str(label);
    }

    let mut span_style = Style::default();
    if let Some(color) = style.color {
        span_style = span_style.fg(color);
    }
    if style.bold {
        span_style = span_style.add_modifier(Modifier::BOLD);
    }

    Span::styled(text, span_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_bare_glyph_without_overrides() {
        let span = render(Icon::Check, &IconStyle::default());
        assert_eq!(span.content.as_ref(), "✓");
        assert_eq!(span.style, Style::default());
    }

    #[test]
    fn label_is_appended_after_the_glyph() {
        let span = render(Icon::Refresh, &IconStyle::labeled("Show me other options"));
        assert_eq!(span.content.as_ref(), "⟳ Show me other options");
    }

    #[test]
    fn color_and_bold_apply_to_the_whole_span() {
        let style = IconStyle {
            label: None,
            color: Some(Color::Green),
            bold: true,
        };
        let span = render(Icon::Check, &style);
        assert_eq!(span.style.fg, Some(Color::Green));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }
}
