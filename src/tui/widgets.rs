//! Widgets for the terminal table frontend

use crate::columns::ColumnSet;
use crate::pipeline::sort::SortDirection;
use crate::view::TableSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Filter input bar showing the query being typed
pub struct FilterBar<'a> {
    query: &'a str,
    pending: bool,
}

impl<'a> FilterBar<'a> {
    /// Create a filter bar for the current query text
    #[must_use]
    pub const fn new(query: &'a str, pending: bool) -> Self {
        Self { query, pending }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Filter ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled("> ", Style::default().add_modifier(Modifier::DIM)),
            Span::raw(self.query),
        ];
        if self.pending {
            // Quiet period still running; the pipeline has not seen this yet
            spans.push(Span::styled(
                " …",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// Status line with row bounds and page position
pub struct StatusLine {
    first_index: usize,
    last_index: usize,
    total_rows: usize,
    page_index: usize,
    page_count: usize,
    page_size: usize,
}

impl StatusLine {
    /// Create a status line from the published snapshot
    #[must_use]
    pub const fn new(snapshot: &TableSnapshot<'_>) -> Self {
        Self {
            first_index: snapshot.first_index,
            last_index: snapshot.last_index,
            total_rows: snapshot.total_filtered_rows,
            page_index: snapshot.page_index,
            page_count: snapshot.page_count,
            page_size: snapshot.page_size,
        }
    }
}

impl Widget for StatusLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = if self.total_rows == 0 {
            format!("No matching rows  •  page 1/{}", self.page_count)
        } else {
            format!(
                "Showing {} to {} of {} rows  •  page {}/{}  •  {} per page",
                self.first_index,
                self.last_index,
                self.total_rows,
                self.page_index + 1,
                self.page_count,
                self.page_size,
            )
        };

        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::DIM),
        )))
        .render(area, buf);
    }
}

/// Key hints shown at the bottom, in the order they matter
#[must_use]
pub fn help_line() -> Line<'static> {
    let hints = [
        ("←/→", "page"),
        ("Home/End", "first/last"),
        ("Tab", "page size"),
        ("^N/^P", "column"),
        ("^S", "sort"),
        ("^U", "clear"),
        ("Esc", "quit"),
    ];

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            key,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    Line::from(spans)
}

/// Build the table widget for one frame
///
/// Header captions carry the ▲/▼ sort indicator; body cells go through
/// each column's render hook, and the hook's style hint maps onto a
/// terminal style here, in the presentation layer.
#[must_use]
pub fn build_table<'a>(
    snapshot: &TableSnapshot<'a>,
    columns: &'a ColumnSet,
    selected_column: usize,
) -> Table<'a> {
    let header = Row::new(
        columns
            .specs()
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let indicator = match snapshot.active_sort.direction_of(&column.key) {
                    Some(SortDirection::Ascending) => " ▲",
                    Some(SortDirection::Descending) => " ▼",
                    None => "",
                };
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if idx == selected_column {
                    style = style.fg(Color::Yellow);
                }
                Cell::from(format!("{}{indicator}", column.label)).style(style)
            })
            .collect::<Vec<_>>(),
    )
    .bottom_margin(1);

    let rows: Vec<Row<'a>> = snapshot
        .rows
        .iter()
        .map(|record| {
            Row::new(
                columns
                    .specs()
                    .iter()
                    .map(|column| {
                        let token = column.render(record.get(&column.key));
                        let style = style_for_hint(token.style.as_deref());
                        Cell::from(token.text).style(style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = vec![Constraint::Ratio(1, columns.len().max(1) as u32); columns.len()];

    Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
}

/// Map an opaque render-hook hint onto a terminal style
fn style_for_hint(hint: Option<&str>) -> Style {
    match hint {
        Some("link") => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        Some("accent") => Style::default().fg(Color::Cyan),
        Some("strong") => Style::default().add_modifier(Modifier::BOLD),
        _ => Style::default(),
    }
}
