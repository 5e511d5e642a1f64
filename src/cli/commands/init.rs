use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::diagnostics::record;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::settings;
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the settings file, including the `sessionLog` fragment
///  - the SQLite database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli
        .config
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing sessionlog…");

    let mut cfg = Config::init_all(&config_path, cli.db.as_deref())?;

    // Write the fragment explicitly so the file documents it
    let panel = settings::deserialize(&cfg.features);
    settings::embed(&mut cfg.features, &panel);
    cfg.save()?;

    let db_path = cfg.database_path();
    let pool = DbPool::new(&db_path)?;

    println!("✅ Database initialized at {}", db_path.display());

    record(
        &pool,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", db_path.display()),
    );

    println!("🎉 sessionlog initialization completed!");
    Ok(())
}
