//! The pagination control bar.
//!
//! A pure projection of window and session state: First / Prev, the
//! three numbered slots, Next / Last. Slot values outside the valid page
//! range render inert so they can never look selectable.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::pagination::{PageWindow, Slot};
use crate::tui::{styles::Theme, Frame};

pub struct PaginationBar;

impl PaginationBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        window: &PageWindow,
        total_pages: u64,
        reference: u64,
        loading: bool,
    ) {
        let prev_style = if window.prev_disabled() {
            theme.disabled_style()
        } else {
            theme.page_style()
        };
        let next_style = if window.next_disabled(total_pages) {
            theme.disabled_style()
        } else {
            theme.page_style()
        };

        let mut spans = vec![
            Span::styled("« First", theme.page_style()),
            Span::raw("   "),
            Span::styled("‹ Prev", prev_style),
            Span::raw("   "),
        ];

        for slot in [Slot::Left, Slot::Middle, Slot::Right] {
            let value = window.slot_value(slot);
            let style = if !window.slot_selectable(slot, total_pages) {
                theme.disabled_style()
            } else if window.active_slot() == Some(slot) {
                theme.active_page_style()
            } else {
                theme.page_style()
            };
            let label = if window.slot_selectable(slot, total_pages) {
                format!(" {} ", value)
            } else {
                " · ".to_string()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw("  "));
        spans.push(Span::styled("Next ›", next_style));
        spans.push(Span::raw("   "));
        spans.push(Span::styled("Last »", theme.page_style()));

        let suffix = if loading {
            format!("   page {} of {} — loading…", reference, total_pages)
        } else {
            format!("   page {} of {}", reference, total_pages)
        };
        spans.push(Span::styled(suffix, theme.dim_style()));

        let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(bar, area);
    }
}
