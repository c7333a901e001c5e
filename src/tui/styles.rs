use ratatui::style::{Color, Modifier, Style};

/// Application theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary colors
    pub primary: Color,
    pub accent: Color,

    /// Text colors
    pub text: Color,
    pub text_dim: Color,
    pub text_bright: Color,

    /// Background colors
    pub background: Color,
    pub background_alt: Color,

    /// Border colors
    pub border: Color,

    /// Status colors
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(220, 38, 38),       // Pokédex red
            accent: Color::Rgb(250, 204, 21),       // Yellow

            text: Color::Rgb(248, 250, 252),        // Slate-50
            text_dim: Color::Rgb(148, 163, 184),    // Slate-400
            text_bright: Color::Rgb(255, 255, 255), // White

            background: Color::Rgb(15, 23, 42),     // Slate-900
            background_alt: Color::Rgb(30, 41, 59), // Slate-800

            border: Color::Rgb(71, 85, 105),        // Slate-600

            success: Color::Rgb(34, 197, 94),       // Green-500
            error: Color::Rgb(239, 68, 68),         // Red-500
        }
    }

    /// Style for text content
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for secondary text
    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the selected table row
    pub fn selection_style(&self) -> Style {
        Style::default()
            .bg(self.background_alt)
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the highlighted page button
    pub fn active_page_style(&self) -> Style {
        Style::default()
            .bg(self.primary)
            .fg(self.text_bright)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for enabled pagination controls
    pub fn page_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for disabled pagination controls
    pub fn disabled_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the status bar
    pub fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background_alt)
    }

    /// Style for error messages
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for type badges
    pub fn type_badge_style(&self) -> Style {
        Style::default().bg(self.background_alt).fg(self.text_bright)
    }

    /// Style for move badges
    pub fn move_badge_style(&self) -> Style {
        Style::default().bg(self.primary).fg(self.text_bright)
    }

    /// Style for ability badges
    pub fn ability_badge_style(&self) -> Style {
        Style::default().bg(self.success).fg(self.text_bright)
    }
}
