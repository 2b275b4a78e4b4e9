//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Columns start as wide as their header and grow with the rows.
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width: h.chars().count(),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        out.push_str(&self.render_line(self.columns.iter().map(|c| c.header.as_str())));

        // Rows
        for row in &self.rows {
            out.push_str(&self.render_line(row.iter().map(String::as_str)));
        }

        out
    }

    fn render_line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let line = self
            .columns
            .iter()
            .zip(cells)
            .map(|(col, cell)| format!("{:<width$}", cell, width = col.width))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    }
}
