use crate::types::OutdatedRecord;
use colored::{ColoredString, Colorize};

/// Column alignment within the record table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Renders one outdated record as a small table under its header
pub struct TableRenderer {
    show_colors: bool,
}

impl TableRenderer {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Render the header row and the record row, one string per line
    pub fn render(&self, header: &[String], record: &OutdatedRecord) -> Vec<String> {
        let row = record.cells();
        let header: Vec<&str> = header.iter().map(String::as_str).collect();

        // Calculate column widths
        let columns = header.len().max(row.len());
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                let head = header.get(col).map_or(0, |c| c.chars().count());
                let cell = row.get(col).map_or(0, |c| c.chars().count());
                head.max(cell)
            })
            .collect();

        let header_line = self.render_line(&header, &widths, |_, cell| self.style_header(cell));
        let record_line = self.render_line(&row, &widths, |col, cell| {
            self.style_cell(record, col, cell)
        });

        vec![header_line, record_line]
    }

    fn render_line<F>(&self, cells: &[&str], widths: &[usize], style: F) -> String
    where
        F: Fn(usize, &str) -> String,
    {
        let last = cells.len().saturating_sub(1);
        cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let width = widths.get(col).copied().unwrap_or(0);
                let padding = " ".repeat(width.saturating_sub(cell.chars().count()));
                let styled = style(col, cell);
                match column_align(col) {
                    Align::Right => format!("{padding}{styled}"),
                    // No trailing padding on the last cell
                    Align::Left if col == last => styled,
                    Align::Left => format!("{styled}{padding}"),
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn style_header(&self, cell: &str) -> String {
        self.paint(cell.underline())
    }

    /// Name is yellow when already at wanted, red otherwise. Wanted, latest
    /// and location each get their own color.
    fn style_cell(&self, record: &OutdatedRecord, col: usize, cell: &str) -> String {
        match col {
            0 if record.is_at_wanted() => self.paint(cell.yellow()),
            0 => self.paint(cell.red()),
            2 => self.paint(cell.green()),
            3 => self.paint(cell.magenta()),
            4 => self.paint(cell.cyan()),
            _ => cell.to_string(),
        }
    }

    fn paint(&self, styled: ColoredString) -> String {
        if self.show_colors {
            styled.to_string()
        } else {
            styled.clear().to_string()
        }
    }
}

/// Name left, versions right, location and anything after left
fn column_align(col: usize) -> Align {
    match col {
        1..=3 => Align::Right,
        _ => Align::Left,
    }
}
