pub mod cli;
pub mod error;
pub mod executor;
pub mod logging;
pub mod npm;
pub mod pipeline;
pub mod prompt;
pub mod selector;
pub mod session;
pub mod terminal;

#[cfg(test)]
mod testing;
