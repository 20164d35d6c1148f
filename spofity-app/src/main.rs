use std::fs::File;
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};
use spofity_app::config::AppConfig;
use spofity_app::console::Console;
use spofity_app::error::AppError;
use spofity_app::paths;
use spofity_app::session::SessionStore;
use spofity_app::settings::{SettingsProvider, SqliteBackend};
use tokio::io::BufReader;

fn init_logging() {
    paths::rotate_logs();
    let Some(log_path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = log_path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        eprintln!("could not create log directory: {}", e);
        return;
    }
    match File::create(&log_path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("could not initialise logging: {}", e);
            }
        }
        Err(e) => eprintln!("could not create {}: {}", log_path.display(), e),
    }
}

async fn open_settings() -> Result<SettingsProvider, AppError> {
    let path = paths::settings_db().ok_or(AppError::NoDataDir)?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(SettingsProvider::new(SqliteBackend::new(&path).await?))
}

async fn run() -> Result<(), AppError> {
    let settings = match open_settings().await {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("falling back to in-memory settings: {}", e);
            SettingsProvider::in_memory()
        }
    };

    let config = AppConfig::load(&settings).await?;
    log::info!("backend at {}", config.api_url);

    let session = SessionStore::new(settings);
    let client = config.build_client(session.clone())?;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(stdin, std::io::stdout(), client, session);
    console.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    log::info!("spofity {} starting", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
