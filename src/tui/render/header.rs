use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::{SortMode, StatusFilter};
use crate::tui::app::App;

/// Render the header: title plus task counts, then the active view state
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    // Line 1: app title left, open/done counts right
    let total = app.manager.tasks().len();
    let open = app.manager.tasks().iter().filter(|t| !t.completed).count();
    let done = total - open;

    let title = Span::styled(
        " tick",
        Style::default()
            .fg(theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let counts = format!("{} open  {} done ", open, done);
    let mut top_spans = vec![title];
    let used = UnicodeWidthStr::width(" tick") + UnicodeWidthStr::width(counts.as_str());
    if used < width {
        top_spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
    }
    top_spans.push(Span::styled(counts, Style::default().fg(theme.dim).bg(bg)));

    // Line 2: view state, defaults dimmed and overrides bright
    let filters = app.manager.filters();
    let mut state_spans = vec![Span::styled(" ", Style::default().bg(bg))];

    push_state(
        &mut state_spans,
        "status",
        filters.status.as_str(),
        filters.status != StatusFilter::All,
        theme,
    );
    let priority = filters.priority.map(|p| p.as_str()).unwrap_or("none");
    push_state(
        &mut state_spans,
        "priority",
        priority,
        filters.priority.is_some(),
        theme,
    );
    push_state(
        &mut state_spans,
        "sort",
        app.manager.sort_by().as_str(),
        app.manager.sort_by() != SortMode::Custom,
        theme,
    );
    if !app.manager.search_query().is_empty() {
        state_spans.push(Span::styled(
            format!("/{}", app.manager.search_query()),
            Style::default().fg(theme.highlight).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(top_spans), Line::from(state_spans)])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn push_state(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    active: bool,
    theme: &crate::tui::theme::Theme,
) {
    let bg = theme.background;
    spans.push(Span::styled(
        format!("{}:", label),
        Style::default().fg(theme.dim).bg(bg),
    ));
    let value_fg = if active { theme.text_bright } else { theme.dim };
    spans.push(Span::styled(
        format!("{}  ", value),
        Style::default().fg(value_fg).bg(bg),
    ));
}
