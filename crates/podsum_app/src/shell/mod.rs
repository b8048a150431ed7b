//! Line-oriented terminal shell driving the core state machine.

mod app;
mod effects;
mod input;
mod ui;

use std::path::PathBuf;

use podsum_engine::ClientSettings;

pub use app::run_app;

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub client: ClientSettings,
    /// Exports are written here.
    pub output_dir: PathBuf,
    pub color: bool,
    /// Submitted as soon as the shell starts.
    pub initial_url: Option<String>,
}
