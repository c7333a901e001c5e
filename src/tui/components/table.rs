//! The catalog table: one row per surviving list entry.

use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::loader::LoadedPage;
use crate::tui::{styles::Theme, Frame};

/// Renders a loaded page as a table with sequence number, name and
/// sprite URL columns.
pub struct CatalogTable;

impl CatalogTable {
    /// Zero-padded catalog number, e.g. "No.001".
    pub fn sequence_label(seq_no: u64) -> String {
        format!("No.{:03}", seq_no)
    }

    pub fn render(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        page: &LoadedPage,
        selected_row: usize,
    ) {
        let rows: Vec<Row> = page
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cells = vec![
                    Cell::from(Self::sequence_label(row.seq_no)),
                    Cell::from(row.name.clone()),
                    Cell::from(row.sprite_url.clone()).style(theme.dim_style()),
                ];
                let table_row = Row::new(cells);
                if index == selected_row {
                    table_row.style(theme.selection_style())
                } else {
                    table_row.style(theme.text_style())
                }
            })
            .collect();

        let header = Row::new(vec!["#", "Name", "Sprite"]).style(theme.dim_style());

        let widths = [
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Pokédex")
                .border_style(theme.border_style()),
        );

        frame.render_widget(table, area);
    }
}
