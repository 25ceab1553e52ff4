pub mod output;
pub mod parser;
pub mod selection;
pub mod types;

// Re-export commonly used types at crate root
pub use output::TableRenderer;
pub use parser::{OutdatedParser, ParseError};
pub use selection::{AutoDecision, Choice, auto_wanted, choices_for, default_choice};
pub use types::{OutdatedRecord, OutdatedTable, UpdateDirective};
