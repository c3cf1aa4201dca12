mod app;
mod cli;
mod input;
mod intents;
mod logging;
mod ui;

pub use app::run_app;
pub use cli::Cli;
