//! Column definitions of the artworks table.

use std::cmp::Ordering;

use artic_lib::ArtworkRecord;

use crate::text::single_line;

/// Column width specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in characters.
    Fixed(u16),
    /// Flexible width with weight.
    Flex(u16),
}

/// What a column shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Select,
    Title,
    Artist,
    PlaceOfOrigin,
    Inscriptions,
    DateStart,
    DateEnd,
    Image,
}

impl Field {
    /// Cell text for `record`. The select column is drawn by the renderer.
    pub fn cell(&self, record: &ArtworkRecord, placeholder: &str) -> String {
        match self {
            Field::Select => String::new(),
            Field::Title => single_line(&record.title),
            Field::Artist => single_line(&record.artist_display),
            Field::PlaceOfOrigin => single_line(&record.place_of_origin),
            Field::Inscriptions => single_line(record.inscriptions.as_deref().unwrap_or("")),
            Field::DateStart => year(record.date_start),
            Field::DateEnd => year(record.date_end),
            Field::Image => record.image_source(placeholder).to_string(),
        }
    }

    /// Ascending order of two records by this column. Missing values sort first.
    pub fn compare(&self, a: &ArtworkRecord, b: &ArtworkRecord) -> Ordering {
        match self {
            Field::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Field::Artist => a
                .artist_display
                .to_lowercase()
                .cmp(&b.artist_display.to_lowercase()),
            Field::PlaceOfOrigin => a.place_of_origin.cmp(&b.place_of_origin),
            Field::Inscriptions => a.inscriptions.cmp(&b.inscriptions),
            Field::DateStart => a.date_start.cmp(&b.date_start),
            Field::DateEnd => a.date_end.cmp(&b.date_end),
            Field::Select | Field::Image => Ordering::Equal,
        }
    }
}

fn year(value: Option<i32>) -> String {
    value.map(|y| y.to_string()).unwrap_or_default()
}

/// A table column definition.
#[derive(Clone, Debug)]
pub struct Column {
    pub field: Field,
    /// Header text displayed at the top.
    pub header: &'static str,
    pub width: ColumnWidth,
    pub sortable: bool,
}

impl Column {
    fn new(field: Field, header: &'static str, width: ColumnWidth, sortable: bool) -> Self {
        Self {
            field,
            header,
            width,
            sortable,
        }
    }
}

/// Checkbox, Title, Artist, Place of Origin, Inscriptions, Start Date,
/// End Date, Image.
pub fn artwork_columns() -> Vec<Column> {
    vec![
        Column::new(Field::Select, "", ColumnWidth::Fixed(3), false),
        Column::new(Field::Title, "Title", ColumnWidth::Flex(3), true),
        Column::new(Field::Artist, "Artist", ColumnWidth::Flex(3), true),
        Column::new(Field::PlaceOfOrigin, "Place of Origin", ColumnWidth::Flex(2), true),
        Column::new(Field::Inscriptions, "Inscriptions", ColumnWidth::Flex(2), true),
        Column::new(Field::DateStart, "Start Date", ColumnWidth::Fixed(12), true),
        Column::new(Field::DateEnd, "End Date", ColumnWidth::Fixed(10), true),
        Column::new(Field::Image, "Image", ColumnWidth::Flex(2), false),
    ]
}

/// The sortable columns, in the order the number keys address them.
pub fn sortable_fields(columns: &[Column]) -> Vec<Field> {
    columns.iter().filter(|c| c.sortable).map(|c| c.field).collect()
}

/// Resolves column widths for `total` terminal columns.
///
/// One separator column sits between adjacent columns. Fixed columns get
/// their width first; flex columns share the rest by weight, with the
/// rounding remainder going to the last flex column.
pub fn layout_widths(columns: &[Column], total: u16) -> Vec<u16> {
    let separators = columns.len().saturating_sub(1) as u16;
    let fixed: u16 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex(_) => 0,
        })
        .sum();
    let weights: u16 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Flex(w) => w,
            ColumnWidth::Fixed(_) => 0,
        })
        .sum();
    let flexible = total.saturating_sub(fixed + separators);

    let mut widths: Vec<u16> = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex(w) if weights > 0 => {
                (u32::from(flexible) * u32::from(w) / u32::from(weights)) as u16
            }
            ColumnWidth::Flex(_) => 0,
        })
        .collect();

    let used: u16 = widths.iter().sum::<u16>() + separators;
    if let Some(last_flex) = columns
        .iter()
        .rposition(|c| matches!(c.width, ColumnWidth::Flex(_)))
    {
        widths[last_flex] += total.saturating_sub(used);
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_match_table_layout() {
        let headers: Vec<_> = artwork_columns().iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            vec![
                "",
                "Title",
                "Artist",
                "Place of Origin",
                "Inscriptions",
                "Start Date",
                "End Date",
                "Image"
            ]
        );
        assert_eq!(sortable_fields(&artwork_columns()).len(), 6);
    }

    #[test]
    fn test_widths_fill_available_space() {
        let columns = artwork_columns();
        let widths = layout_widths(&columns, 120);
        let used: u16 = widths.iter().sum::<u16>() + (columns.len() as u16 - 1);
        assert_eq!(used, 120);
        assert_eq!(widths[0], 3);
        assert_eq!(widths[5], 12);
    }

    #[test]
    fn test_narrow_terminal_collapses_flex_columns() {
        let widths = layout_widths(&artwork_columns(), 20);
        assert_eq!(widths[1], 0);
        assert_eq!(widths[6], 10);
    }
}
