//! CLI module

mod commands;
mod dispatch;
mod logging;

pub use commands::{Cli, Commands, RunArgs};
pub use dispatch::dispatch;
pub use logging::init_cli_logger;
