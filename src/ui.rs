use ratatui::{
    Frame,
    style::Stylize,
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
};

use crate::domain::AppConfig;
use crate::model::Model;
use crate::sort::SortState;

const COLUMN_MARGIN: usize = 2;

pub struct TableUI {}

impl TableUI {
    pub fn new(_cfg: &AppConfig) -> Self {
        Self {}
    }

    pub fn draw(&self, model: &Model, frame: &mut Frame) {
        let title = Line::from(" tablesort ".bold());
        let instructions = Line::from(vec![
            " Move ".into(),
            "<←/→>".blue().bold(),
            " Toggle sort ".into(),
            "<Enter>".blue().bold(),
            " Quit ".into(),
            "<Q> ".blue().bold(),
        ]);
        let block = Block::bordered()
            .title(title.centered())
            .title_bottom(instructions.centered())
            .border_set(border::THICK);

        let widths = column_widths(model);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            "location: ".into(),
            model.url().as_str().to_string().yellow(),
        ]));
        lines.push(Line::from(""));
        lines.push(header_line(model, &widths));
        for row in model.rows() {
            lines.push(row_line(row, &widths));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(model.status_message().to_string().italic()));

        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), frame.area());
    }
}

fn marker(state: SortState) -> &'static str {
    match state {
        SortState::Unsorted => "",
        SortState::Ascending => " ▲",
        SortState::Descending => " ▼",
    }
}

fn column_widths(model: &Model) -> Vec<usize> {
    model
        .headers()
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            // Leave room for the sort marker next to the title
            let mut width = header.title.chars().count() + 2;
            for row in model.rows() {
                width = width.max(row[idx].chars().count());
            }
            width + COLUMN_MARGIN
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn header_line(model: &Model, widths: &[usize]) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (idx, header) in model.headers().iter().enumerate() {
        let cell = pad(&format!("{}{}", header.title, marker(header.state)), widths[idx]);
        let mut span = Span::from(cell).bold();
        if idx == model.selected() {
            span = span.reversed();
        }
        spans.push(span);
    }
    Line::from(spans)
}

fn row_line(row: &[String], widths: &[usize]) -> Line<'static> {
    Line::from(
        row.iter()
            .zip(widths)
            .map(|(cell, &width)| Span::from(pad(cell, width)))
            .collect::<Vec<_>>(),
    )
}
