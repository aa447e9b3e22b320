use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;

/// Render the status row (bottom of screen): error flash first, otherwise
/// the prompt or hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let line = if let Some(flash) = &app.error {
        Line::from(Span::styled(
            format!(" {}", flash.message),
            Style::default().fg(theme.red).bg(bg),
        ))
    } else {
        match app.mode {
            Mode::Navigate => {
                let query = app.manager.search_query();
                if query.is_empty() {
                    let mut spans = Vec::new();
                    let hint = "a add  x toggle  d delete  / search  s sort  f filter  t theme  ? help";
                    pad_to_right(&mut spans, hint, width, theme);
                    Line::from(spans)
                } else {
                    let mut spans = vec![Span::styled(
                        format!("/{}", query),
                        Style::default().fg(theme.dim).bg(bg),
                    )];
                    pad_to_right(&mut spans, "Esc clear", width, theme);
                    Line::from(spans)
                }
            }
            Mode::Add => {
                let before = &app.input[..app.input_cursor];
                let after = &app.input[app.input_cursor..];
                let mut spans = vec![
                    Span::styled("add> ", Style::default().fg(theme.highlight).bg(bg)),
                    Span::styled(
                        before.to_string(),
                        Style::default().fg(theme.text_bright).bg(bg),
                    ),
                    Span::styled(
                        "\u{258C}", // ▌ cursor
                        Style::default().fg(theme.highlight).bg(bg),
                    ),
                    Span::styled(
                        after.to_string(),
                        Style::default().fg(theme.text_bright).bg(bg),
                    ),
                ];
                pad_to_right(&mut spans, "Enter add  Esc cancel  @due !priority", width, theme);
                Line::from(spans)
            }
            Mode::Search => {
                let mut spans = vec![
                    Span::styled(
                        format!("/{}", app.manager.search_query()),
                        Style::default().fg(theme.text_bright).bg(bg),
                    ),
                    Span::styled(
                        "\u{258C}",
                        Style::default().fg(theme.highlight).bg(bg),
                    ),
                ];
                pad_to_right(&mut spans, "Enter keep  Esc clear", width, theme);
                Line::from(spans)
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dim hint after whatever is already in the row
fn pad_to_right(spans: &mut Vec<Span<'static>>, hint: &str, width: usize, theme: &Theme) {
    let bg = theme.background;
    let content_width: usize = spans
        .iter()
        .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
        .sum();
    let hint_width = UnicodeWidthStr::width(hint);
    if content_width + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
}
