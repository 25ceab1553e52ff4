use std::fmt;

/// One row of a package manager's "outdated" listing
///
/// Versions are kept as the raw strings the package manager printed; they are
/// only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedRecord {
    /// Package name
    pub name: String,
    /// Currently installed version
    pub current: String,
    /// Highest version satisfying the declared range
    pub wanted: String,
    /// Highest published version
    pub latest: String,
    /// Install location, when the listing has that column
    pub location: Option<String>,
    /// Any columns after location (display only)
    pub extra: Vec<String>,
}

impl OutdatedRecord {
    /// Check if the installed version already satisfies the declared range
    pub fn is_at_wanted(&self) -> bool {
        self.current == self.wanted
    }

    /// Check if wanted is a distinct stop between current and latest
    pub fn has_intermediate_wanted(&self) -> bool {
        !self.is_at_wanted() && self.wanted != self.latest
    }

    /// Cells in listing order, for rendering
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![
            self.name.as_str(),
            self.current.as_str(),
            self.wanted.as_str(),
            self.latest.as_str(),
        ];
        if let Some(location) = &self.location {
            cells.push(location);
        }
        cells.extend(self.extra.iter().map(String::as_str));
        cells
    }
}

/// A parsed "outdated" listing: header labels plus records in listing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutdatedTable {
    pub header: Vec<String>,
    pub records: Vec<OutdatedRecord>,
}

impl OutdatedTable {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Request to install exactly `name@version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDirective {
    pub name: String,
    pub version: String,
}

impl UpdateDirective {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for UpdateDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
