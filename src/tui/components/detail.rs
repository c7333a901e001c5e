//! The detail panel for the selected entry.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::PokemonDetail;
use crate::tui::{styles::Theme, Frame};

/// At most this many badges per category are shown.
const BADGE_LIMIT: usize = 8;

pub struct DetailPanel;

impl DetailPanel {
    /// Uppercased badge labels, capped at the per-category limit.
    pub fn badge_labels(names: &[&str]) -> Vec<String> {
        names
            .iter()
            .take(BADGE_LIMIT)
            .map(|name| name.to_uppercase())
            .collect()
    }

    fn badge_line(label: Option<&str>, names: &[&str], style: Style, theme: &Theme) -> Line<'static> {
        let mut spans = Vec::new();
        if let Some(label) = label {
            spans.push(Span::styled(format!("{} ", label), theme.dim_style()));
        }
        for badge in Self::badge_labels(names) {
            spans.push(Span::styled(format!(" {} ", badge), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, detail: &PokemonDetail) {
        let mut lines = vec![
            Line::from(Span::styled(
                detail.name.to_uppercase(),
                theme.text_style().add_modifier(ratatui::style::Modifier::BOLD),
            )),
            Line::from(""),
            Self::badge_line(None, &detail.type_names(), theme.type_badge_style(), theme),
            Line::from(""),
            Line::from(Span::styled(
                format!("HT {}   WT {} lbs.", detail.height, detail.weight),
                theme.text_style(),
            )),
            Line::from(""),
        ];

        if let Some(sprite) = &detail.sprites.front_default {
            lines.push(Line::from(Span::styled(sprite.clone(), theme.dim_style())));
            lines.push(Line::from(""));
        }

        lines.push(Self::badge_line(
            Some("MOVES:"),
            &detail.move_names(),
            theme.move_badge_style(),
            theme,
        ));
        lines.push(Line::from(""));
        lines.push(Self::badge_line(
            Some("ABILITIES:"),
            &detail.ability_names(),
            theme.ability_badge_style(),
            theme,
        ));

        let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Details")
                .border_style(theme.border_style()),
        );

        frame.render_widget(panel, area);
    }
}
