//! Table rendering.
//!
//! Rendering is a pure function from state to styled lines; the terminal
//! layer only paints them. Layout from top to bottom: title, header, rule,
//! rows, optional error banner, pager, key help.

use artic_lib::view::PageState;
use artic_lib::view::SelectionSet;

use crate::text::fit;

use super::column::Field;
use super::column::layout_widths;
use super::state::TableState;

const TITLE: &str = "Artworks from the Art Institute of Chicago";
const HELP: &str =
    "space select  a select page  n/p page  +/- page size  1-6 sort  r retry  q quit";
const SEPARATOR: &str = "│";

/// How a line is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Header,
    Normal,
    Selected,
    Cursor,
    Muted,
    Error,
}

/// One painted terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Everything the renderer reads.
pub struct RenderContext<'a> {
    pub page: &'a PageState,
    pub selection: &'a SelectionSet,
    pub table: &'a TableState,
    /// Image path drawn for records without an image.
    pub placeholder: &'a str,
    /// Current spinner frame, drawn while loading.
    pub spinner: &'a str,
    pub width: u16,
    pub height: u16,
}

/// Renders the whole screen.
pub fn render(cx: &RenderContext<'_>) -> Vec<Line> {
    let width = cx.width as usize;
    let mut lines = Vec::with_capacity(cx.height as usize);

    lines.push(title_line(cx));
    lines.push(Line::new(fit(&header_text(cx), width), LineStyle::Header));
    lines.push(Line::new("─".repeat(width), LineStyle::Muted));

    let mut footer = Vec::new();
    if let Some(error) = cx.page.error() {
        footer.push(Line::new(
            fit(&format!("Error: {} (press r to retry)", error.message), width),
            LineStyle::Error,
        ));
    }
    footer.push(Line::new(fit(&pager_text(cx), width), LineStyle::Muted));
    footer.push(Line::new(fit(HELP, width), LineStyle::Muted));

    let body_height = (cx.height as usize).saturating_sub(lines.len() + footer.len());
    lines.extend(body_lines(cx, body_height));
    lines.extend(footer);
    lines.truncate(cx.height as usize);
    lines
}

fn title_line(cx: &RenderContext<'_>) -> Line {
    let width = cx.width as usize;
    let text = if cx.page.is_loading() {
        let spinner_width = crate::text::display_width(cx.spinner);
        let title_width = width.saturating_sub(spinner_width + 1);
        format!("{} {}", fit(TITLE, title_width), cx.spinner)
    } else {
        TITLE.to_string()
    };
    Line::new(fit(&text, width), LineStyle::Title)
}

fn header_text(cx: &RenderContext<'_>) -> String {
    let columns = cx.table.columns();
    let widths = layout_widths(columns, cx.width);
    let records = cx.page.records();

    let cells: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &w)| {
            let label = match column.field {
                Field::Select => checkbox(
                    cx.selection.all_selected(records),
                    records.iter().any(|r| cx.selection.contains(r.id)),
                )
                .to_string(),
                field => match cx.table.sort() {
                    Some((sorted, true)) if sorted == field => format!("{} ▲", column.header),
                    Some((sorted, false)) if sorted == field => format!("{} ▼", column.header),
                    _ => column.header.to_string(),
                },
            };
            fit(&label, w as usize)
        })
        .collect();
    cells.join(SEPARATOR)
}

fn checkbox(all: bool, some: bool) -> &'static str {
    match (all, some) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    }
}

fn body_lines(cx: &RenderContext<'_>, height: usize) -> Vec<Line> {
    let width = cx.width as usize;
    let rows = cx.table.rows(cx.page.records());

    let mut lines = Vec::with_capacity(height);
    if rows.is_empty() {
        let message = if cx.page.is_loading() {
            "Loading…"
        } else if cx.page.error().is_some() {
            ""
        } else {
            "No records"
        };
        if height > 0 {
            lines.push(Line::new(fit(message, width), LineStyle::Muted));
        }
    } else {
        let columns = cx.table.columns();
        let widths = layout_widths(columns, cx.width);
        let cursor = cx.table.cursor().min(rows.len() - 1);
        let offset = (cursor + 1).saturating_sub(height);

        for (i, record) in rows.iter().enumerate().skip(offset).take(height) {
            let selected = cx.selection.contains(record.id);
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(column, &w)| match column.field {
                    Field::Select => fit(checkbox(selected, false), w as usize),
                    field => fit(&field.cell(record, cx.placeholder), w as usize),
                })
                .collect();

            let style = if i == cursor {
                LineStyle::Cursor
            } else if selected {
                LineStyle::Selected
            } else {
                LineStyle::Normal
            };
            lines.push(Line::new(fit(&cells.join(SEPARATOR), width), style));
        }
    }

    while lines.len() < height {
        lines.push(Line::new(" ".repeat(width), LineStyle::Normal));
    }
    lines
}

fn pager_text(cx: &RenderContext<'_>) -> String {
    let page = cx.page;
    format!(
        "{}-{} of {}  page {}/{}  {} per page  {} selected",
        page.first_row(),
        page.last_row(),
        page.total(),
        page.page_number(),
        page.page_count(),
        page.page_size(),
        cx.selection.len()
    )
}
