use std::io::stdout;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use costgrid::cli::CliArgs;
use costgrid::config::EditorConfig;
use costgrid::remote::HttpStore;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    costgrid::tracing::init();

    let args = CliArgs::parse();
    let startup = args
        .into_config(EditorConfig::load())
        .map_err(|e| anyhow!(e))?;

    if startup.save_config {
        startup.editor.save().map_err(|e| anyhow!(e))?;
    }

    let store = HttpStore::new(startup.editor.base_url(), startup.editor.request_timeout())
        .with_context(|| format!("Invalid API URL {}", startup.editor.api_base_url))?;
    tracing::info!("Using remote store at {}", store.base_url());

    let mut app = App::new(startup, Arc::new(store));

    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .context("Failed to enable mouse capture")
        .and_then(|()| app.run(&mut terminal));
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    result
}
