use std::fs::{self, File};
use std::time::Instant;

use crm_lib::Store;
use crm_tui::{App, AppError, Config, paths, runtime};
use log::{LevelFilter, info};
use simplelog::WriteLogger;

/// Log to `<cache_dir>/latest.log`, keeping older runs. Without a home
/// directory nothing is logged.
fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(level, simplelog::Config::default(), file)?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = Config::load()?;
    init_logging(config.level_filter()?)?;
    info!("crm-tui {} starting", env!("CARGO_PKG_VERSION"));

    let app = App::new(config, Store::seeded(), Instant::now())?;
    runtime::run(app).await
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
