use crate::types::{OutdatedRecord, OutdatedTable};
use thiserror::Error;

/// Minimum cells a data line needs: name, current, wanted, latest
const REQUIRED_COLUMNS: usize = 4;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed outdated line {line}: expected at least 4 columns, found {found}")]
    MalformedLine { line: usize, found: usize },
}

/// Parses the tabular output of an "outdated" command
///
/// The first non-blank line is the header; every following non-blank line is
/// one package. Cells are separated by runs of two or more spaces, which lets
/// single spaces survive inside a cell (npm's "Depended by" header).
pub struct OutdatedParser;

impl OutdatedParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<OutdatedTable, ParseError> {
        let mut lines = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header_line)) = lines.next() else {
            return Ok(OutdatedTable::default());
        };

        let header = split_cells(header_line)
            .into_iter()
            .map(String::from)
            .collect();

        let records = lines
            .map(|(idx, line)| self.parse_record(line, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OutdatedTable { header, records })
    }

    fn parse_record(&self, line: &str, line_number: usize) -> Result<OutdatedRecord, ParseError> {
        let cells = split_cells(line);
        if cells.len() < REQUIRED_COLUMNS {
            return Err(ParseError::MalformedLine {
                line: line_number,
                found: cells.len(),
            });
        }

        let mut cells = cells.into_iter().map(String::from);
        // Length checked above
        let mut next = || cells.next().unwrap_or_default();
        let name = next();
        let current = next();
        let wanted = next();
        let latest = next();
        let location = cells.next();
        let extra = cells.collect();

        Ok(OutdatedRecord {
            name,
            current,
            wanted,
            latest,
            location,
            extra,
        })
    }
}

impl Default for OutdatedParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a line on runs of two or more spaces
fn split_cells(line: &str) -> Vec<&str> {
    let line = line.trim();
    let mut cells = Vec::new();
    let mut start = 0;
    let mut rest = line;

    while let Some(idx) = rest.find("  ") {
        let cell_end = start + idx;
        cells.push(&line[start..cell_end]);

        let gap = rest[idx..].len() - rest[idx..].trim_start_matches(' ').len();
        start = cell_end + gap;
        rest = &line[start..];
    }

    if !rest.is_empty() {
        cells.push(rest);
    }

    cells
}
