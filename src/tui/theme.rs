use ratatui::style::Color;

use crate::model::{Priority, ThemeMode};

/// Color theme for the TUI. Two built-in palettes, selected by the
/// persisted theme preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub red: Color,
    pub yellow: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Theme {
    pub fn light() -> Theme {
        Theme {
            background: Color::Rgb(0xF6, 0xF5, 0xF0),
            text: Color::Rgb(0x33, 0x33, 0x3D),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x8E, 0x8E, 0x9C),
            highlight: Color::Rgb(0xC2, 0x36, 0x6B),
            red: Color::Rgb(0xC0, 0x35, 0x35),
            yellow: Color::Rgb(0xA8, 0x76, 0x00),
            blue: Color::Rgb(0x3A, 0x6E, 0xC4),
            selection_bg: Color::Rgb(0xE4, 0xE1, 0xF2),
            search_match_bg: Color::Rgb(0x2E, 0xC4, 0xB6),
            search_match_fg: Color::Rgb(0x1A, 0x1A, 0x24),
        }
    }

    pub fn dark() -> Theme {
        Theme {
            background: Color::Rgb(0x14, 0x06, 0x1F),
            text: Color::Rgb(0xB8, 0xB2, 0xE8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6F, 0x6A, 0xA8),
            highlight: Color::Rgb(0xF0, 0x50, 0x9B),
            red: Color::Rgb(0xFF, 0x6B, 0x6B),
            yellow: Color::Rgb(0xFF, 0xD7, 0x5F),
            blue: Color::Rgb(0x5B, 0x8D, 0xEF),
            selection_bg: Color::Rgb(0x3A, 0x18, 0x38),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x14, 0x06, 0x1F),
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Theme {
        match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }

    /// Get the color for a priority marker
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.blue,
        }
    }
}
