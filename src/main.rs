use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use bidquiz::api::HttpQuizService;
use bidquiz::data::{Database, MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use bidquiz::session::{PageSize, SessionDriver, PAGE_SIZES};
use bidquiz::{util, App, Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bidquiz")]
#[command(about = "Terminal trainer for bridge bidding quizzes", version)]
struct Args {
    /// Base URL of the quiz service (overrides config.toml)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Directory for config, database, logs and exports
    #[arg(long, value_name = "PATH", env = "BIDQUIZ_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Deals per history page (10, 20, 50 or 100)
    #[arg(long, value_name = "N", value_parser = parse_page_size)]
    page_size: Option<PageSize>,
}

fn parse_page_size(value: &str) -> Result<PageSize, String> {
    let size: usize = value.parse().map_err(|_| format!("not a number: {value}"))?;
    PageSize::new(size).ok_or_else(|| format!("page size must be one of {:?}", PAGE_SIZES))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    util::init_data_dir(args.data_dir);

    // Initialize logging to file (~/.bidquiz/logs/bidquiz.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if let Some(server) = args.server {
        config.server.base_url = server.trim_end_matches('/').to_string();
    }
    if let Some(page_size) = args.page_size {
        config.history.page_size = page_size;
    }

    // Preferences are a convenience; run without persistence if the database is unusable
    let preferences: Arc<dyn PreferenceStore> = match Database::open_default() {
        Ok(db) => Arc::new(SqlitePreferenceStore::new(&db)),
        Err(e) => {
            tracing::warn!(error = %e, "Preference database unavailable, using in-memory store");
            Arc::new(MemoryPreferenceStore::new())
        }
    };

    let service = HttpQuizService::new(&config.server.base_url, config.server.timeout)?;
    let driver = SessionDriver::new(
        Arc::new(service),
        preferences,
        config.history.page_size,
        util::exports_dir(),
    );

    let mut app = App::new(config, driver);
    app.run().await
}
