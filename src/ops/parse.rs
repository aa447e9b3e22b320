use crate::model::Priority;

/// Parsed add-prompt input: the title plus any inline tokens
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddInput {
    pub title: String,
    pub due_date: Option<String>,
    pub priority: Option<Priority>,
}

/// Parse inline tokens out of a single-line add prompt.
///
/// Trailing `!low`/`!medium`/`!high` sets the priority and a trailing
/// `@<date>` sets the due date; both are stripped from the stored title.
/// When a token repeats, the one closest to the title wins.
pub fn parse_add_input(s: &str) -> AddInput {
    let mut input = AddInput::default();
    let mut remaining = s.trim_end();

    loop {
        let trimmed = remaining.trim_end();
        if trimmed.is_empty() {
            break;
        }

        let (rest, last_word) = match trimmed.rfind(' ') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => ("", trimmed),
        };

        if let Some(name) = last_word.strip_prefix('!')
            && let Some(priority) = Priority::parse(name)
        {
            input.priority = Some(priority);
            remaining = rest;
            continue;
        }
        if let Some(date) = last_word.strip_prefix('@')
            && !date.is_empty()
        {
            input.due_date = Some(date.to_string());
            remaining = rest;
            continue;
        }
        break;
    }

    input.title = remaining.trim().to_string();
    input
}
