use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::engine::selection::{SortOrder, SortSpec};
use crate::model::film::Column;
use crate::view::app::{App, Focus};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [controls_area, table_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [search_area, year_area, country_area] = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(24),
    ])
    .areas(controls_area);

    render_control(
        frame,
        search_area,
        "Search",
        &app.selection.search,
        app.focus == Focus::Search,
    );
    render_control(
        frame,
        year_area,
        "Year",
        &app.year_label(),
        app.focus == Focus::Year,
    );
    render_control(
        frame,
        country_area,
        "Country",
        &app.country_label(),
        app.focus == Focus::Country,
    );

    render_table(frame, table_area, app);
    render_help(frame, help_area);
}

fn render_control(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(value.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let (rows, row_count) = {
        let projection = app.rows();
        let rows: Vec<Row> = projection
            .iter()
            .map(|film| {
                Row::new(
                    Column::ALL
                        .iter()
                        .map(|column| Cell::from(film.cell_text(*column))),
                )
            })
            .collect();
        (rows, projection.len())
    };

    let widths = [
        Constraint::Percentage(32),
        Constraint::Percentage(20),
        Constraint::Length(6),
        Constraint::Percentage(18),
        Constraint::Percentage(22),
    ];

    let border_style = if app.focus == Focus::Table {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header_row(app.selection.sort))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Films ({}/{})", row_count, app.film_count()))
                .border_style(border_style),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Only the active sort column carries a direction marker; toggling a
/// column clears every other header.
fn header_row(sort: Option<SortSpec>) -> Row<'static> {
    let cells = Column::ALL.iter().map(|column| {
        let mut label = column.header().to_string();
        if let Some(spec) = sort {
            if spec.column == *column {
                label.push_str(match spec.order {
                    SortOrder::Ascending => " ▲",
                    SortOrder::Descending => " ▼",
                });
            }
        }
        Cell::from(label).style(Style::default().add_modifier(Modifier::BOLD))
    });

    Row::new(cells)
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help =
        "Tab focus | type to search | Left/Right filter value | 1-5 sort column | Up/Down rows | Esc quit";
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
