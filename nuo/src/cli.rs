use clap::Parser;

/// Interactively update outdated npm dependencies
#[derive(Parser, Debug, Clone)]
#[command(name = "npm-update-outdated")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Update every outdated package to its wanted version without prompting
    #[arg(short = 'w', long)]
    pub auto_wanted: bool,
}

/// Options resolved once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub auto_wanted: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            auto_wanted: self.auto_wanted,
        }
    }
}
