//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Display width per column (labels such as "CO₂" are not 1 byte/char).
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| c.width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let mut push_line = |cells: Vec<&str>| {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = cells.get(i).copied().unwrap_or("");
                let pad = " ".repeat(widths[i].saturating_sub(cell.width()));
                if col.right_align {
                    line.push_str(&pad);
                    line.push_str(cell);
                } else {
                    line.push_str(cell);
                    line.push_str(&pad);
                }
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        };

        // Header
        push_line(self.columns.iter().map(|c| c.header.as_str()).collect());

        // Rows
        for row in &self.rows {
            push_line(row.iter().map(|c| c.as_str()).collect());
        }

        out
    }
}
