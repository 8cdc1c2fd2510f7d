//! Terminal shell: configuration, logging and the interactive session loop.
mod app;
mod config;
mod logging;
mod ui;

pub use app::run_app;
