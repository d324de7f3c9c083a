//! Table widget state: cursor, sort and columns.

use artic_lib::ArtworkRecord;
use artic_lib::view::SelectionSet;

use super::column::Column;
use super::column::Field;
use super::column::artwork_columns;
use super::column::sortable_fields;

/// Page sizes offered by the pager.
pub const PAGE_SIZES: &[usize] = &[5, 10, 25, 50, 100];

/// Presentation state of the artworks table.
///
/// Sorting only reorders the rows as drawn; the page state keeps server order.
#[derive(Debug)]
pub struct TableState {
    columns: Vec<Column>,
    /// Cursor position among the drawn (sorted) rows.
    cursor: usize,
    /// Current sort (column, ascending).
    sort: Option<(Field, bool)>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new()
    }
}

impl TableState {
    pub fn new() -> Self {
        Self {
            columns: artwork_columns(),
            cursor: 0,
            sort: None,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sort(&self) -> Option<(Field, bool)> {
        self.sort
    }

    /// Rows in drawing order.
    pub fn rows<'a>(&self, records: &'a [ArtworkRecord]) -> Vec<&'a ArtworkRecord> {
        let mut rows: Vec<&ArtworkRecord> = records.iter().collect();
        if let Some((field, ascending)) = self.sort {
            rows.sort_by(|a, b| {
                let order = field.compare(a, b);
                if ascending { order } else { order.reverse() }
            });
        }
        rows
    }

    /// Moves the cursor by `delta`, clamped to `len` rows.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
    }

    /// Keeps the cursor on a row after the record list changed.
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Toggles sort on the `n`-th sortable column (zero-based). Repeating
    /// the same column flips the direction.
    pub fn toggle_sort(&mut self, n: usize) -> Option<(Field, bool)> {
        let field = *sortable_fields(&self.columns).get(n)?;
        let next = match self.sort {
            Some((current, ascending)) if current == field => (field, !ascending),
            _ => (field, true),
        };
        self.sort = Some(next);
        Some(next)
    }

    /// The record under the cursor.
    pub fn cursor_record<'a>(&self, records: &'a [ArtworkRecord]) -> Option<&'a ArtworkRecord> {
        self.rows(records).get(self.cursor).copied()
    }

    /// Full selection after toggling the row under the cursor.
    pub fn toggle_cursor_row(
        &self,
        records: &[ArtworkRecord],
        selection: &SelectionSet,
    ) -> Option<Vec<ArtworkRecord>> {
        self.cursor_record(records)
            .map(|record| selection.toggled(record))
    }
}

/// The next larger page size, or `current` if it is already the largest.
pub fn larger_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|&size| size > current)
        .unwrap_or(current)
}

/// The next smaller page size, or `current` if it is already the smallest.
pub fn smaller_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&size| size < current)
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str, start: Option<i32>) -> ArtworkRecord {
        ArtworkRecord {
            id,
            title: title.to_string(),
            artist_display: String::new(),
            date_display: String::new(),
            place_of_origin: String::new(),
            inscriptions: None,
            date_start: start,
            date_end: None,
            image_url: None,
        }
    }

    fn ids(rows: &[&ArtworkRecord]) -> Vec<u64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_rows_keep_server_order_without_sort() {
        let records = vec![record(3, "c", None), record(1, "a", None), record(2, "b", None)];
        let table = TableState::new();
        assert_eq!(ids(&table.rows(&records)), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let records = vec![
            record(1, "Nighthawks", Some(1942)),
            record(2, "American Gothic", Some(1930)),
            record(3, "The Bedroom", None),
        ];
        let mut table = TableState::new();

        assert_eq!(table.toggle_sort(0), Some((Field::Title, true)));
        assert_eq!(ids(&table.rows(&records)), vec![2, 1, 3]);

        assert_eq!(table.toggle_sort(0), Some((Field::Title, false)));
        assert_eq!(ids(&table.rows(&records)), vec![3, 1, 2]);

        assert_eq!(table.toggle_sort(4), Some((Field::DateStart, true)));
        assert_eq!(ids(&table.rows(&records)), vec![3, 2, 1]);

        // Sorting never touches the records themselves.
        assert_eq!(records[0].id, 1);
    }

    #[test]
    fn test_sort_out_of_range_is_ignored() {
        let mut table = TableState::new();
        assert_eq!(table.toggle_sort(6), None);
        assert_eq!(table.sort(), None);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut table = TableState::new();
        table.move_cursor(5, 3);
        assert_eq!(table.cursor(), 2);
        table.move_cursor(-10, 3);
        assert_eq!(table.cursor(), 0);
        table.cursor_to_end(4);
        table.clamp_cursor(2);
        assert_eq!(table.cursor(), 1);
        table.move_cursor(1, 0);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_toggle_follows_sorted_cursor() {
        let records = vec![record(1, "b", None), record(2, "a", None)];
        let mut table = TableState::new();
        table.toggle_sort(0);

        let next = table
            .toggle_cursor_row(&records, &SelectionSet::new())
            .unwrap();
        assert_eq!(next.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_page_size_steps() {
        assert_eq!(larger_page_size(10), 25);
        assert_eq!(larger_page_size(100), 100);
        assert_eq!(smaller_page_size(10), 5);
        assert_eq!(smaller_page_size(5), 5);
        assert_eq!(larger_page_size(12), 25);
        assert_eq!(smaller_page_size(12), 10);
    }
}
