use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("a", "add a task (@due and !priority tokens)"),
    ("x / space / enter", "toggle completion"),
    ("d / del", "delete task"),
    ("/", "search as you type"),
    ("esc", "clear the search"),
    ("s", "cycle sort: custom, created, priority"),
    ("f", "cycle status filter: all, active, completed"),
    ("1 / 2 / 3", "toggle high / medium / low priority filter"),
    ("t", "toggle light / dark theme"),
    ("j k / arrows", "move the cursor"),
    ("g / G", "jump to top / bottom"),
    ("q", "quit"),
];

/// Render the help overlay centered on the screen
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let height = (KEYS.len() as u16 + 2).min(area.height);
    let width = 58u16.min(area.width);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<18}", key),
                    Style::default().fg(theme.highlight).bg(theme.background),
                ),
                Span::styled(
                    action.to_string(),
                    Style::default().fg(theme.text).bg(theme.background),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" help ")
        .style(Style::default().fg(theme.text).bg(theme.background));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
