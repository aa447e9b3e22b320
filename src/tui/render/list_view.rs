use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

use super::push_highlighted_spans;

/// Render the derived task list with selection and scrolling
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    let len = app.manager.filtered_tasks().len();

    // Keep the cursor visible
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    if app.scroll_offset >= len {
        app.scroll_offset = len.saturating_sub(1);
    }

    let theme = app.theme.clone();
    let bg = theme.background;
    let scroll = app.scroll_offset;
    let cursor = app.cursor;
    let search_re = app.active_search_re();
    let width = area.width as usize;

    let tasks = app.manager.filtered_tasks();

    if tasks.is_empty() {
        let hint = if app.manager.tasks().is_empty() {
            "  no tasks yet (press a to add one)"
        } else {
            "  no tasks match the current view"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlight_style = Style::default()
        .bg(theme.search_match_bg)
        .fg(theme.search_match_fg);

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in tasks.iter().enumerate().skip(scroll).take(height) {
        let selected = i == cursor;
        let row_bg = if selected { theme.selection_bg } else { bg };
        let base = Style::default().bg(row_bg);

        let mut spans = Vec::new();
        if task.completed {
            spans.push(Span::styled(" [x] ", base.fg(theme.dim)));
        } else {
            spans.push(Span::styled(" [ ] ", base.fg(theme.text)));
        }
        spans.push(Span::styled(
            "\u{25CF} ", // ● priority marker
            base.fg(theme.priority_color(task.priority)),
        ));

        let title_style = if task.completed {
            base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
        } else {
            base.fg(theme.text_bright)
        };
        push_highlighted_spans(
            &mut spans,
            &task.title,
            title_style,
            highlight_style,
            search_re.as_ref(),
        );

        if let Some(due) = &task.due_date {
            spans.push(Span::styled(format!("  @{}", due), base.fg(theme.dim)));
        }

        // Extend the row background to the full width
        let used: usize = spans
            .iter()
            .map(|s| UnicodeWidthStr::width(s.content.as_ref()))
            .sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), base));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
