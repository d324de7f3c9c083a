mod app;
mod error;
mod paths;
mod settings;
mod table;
mod terminal;
mod text;
mod widgets;

use std::fs;
use std::fs::File;
use std::process::ExitCode;

use artic_lib::view::ArtworkView;
use log::info;
use log::warn;
use simplelog::Config;
use simplelog::WriteLogger;

use crate::app::App;
use crate::error::AppError;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let settings = match paths::config_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    init_logging(&settings);
    info!("Starting artic-tui against {}", settings.base_url);

    let client = settings.client()?;
    let view = ArtworkView::with_page_size(client, settings.page_size);
    App::new(view, &settings).run().await
}

/// Logs go to `latest.log` in the cache directory. Failing to set up the log
/// file is reported but does not stop the program.
fn init_logging(settings: &Settings) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        eprintln!("Warning: no cache directory, logging disabled");
        return;
    };
    if let Some(dir) = path.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("Warning: cannot create {}: {}", dir.display(), e);
        return;
    }
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot create {}: {}", path.display(), e);
            return;
        }
    };
    if WriteLogger::init(settings.log_level(), Config::default(), file).is_err() {
        eprintln!("Warning: logger already initialized");
        return;
    }
    if paths::config_file().is_none() {
        warn!("No config directory, using default settings");
    }
}
