use clap::{Args, Parser, Subcommand};
use configuration::{load_settings, Settings, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use web_server::StorageBackend;

mod logging;

/// The main entry point for the Bookshelf service.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment may already be populated.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let _log_guard = logging::init(&settings.logging)?;
    tracing::debug!(config = %cli.config.display(), "Configuration loaded.");

    match cli.command {
        Commands::Serve(args) => {
            let backend = if args.in_memory {
                StorageBackend::InMemory
            } else {
                StorageBackend::Postgres
            };
            tracing::info!(?backend, "Starting web server.");
            web_server::run_server(&settings, backend).await?;
        }
        Commands::Migrate(_) => {
            let db_pool = database::connect(&settings.database).await?;
            database::run_migrations(&db_pool).await?;
            db_pool.close().await;
            tracing::info!("Migrations complete.");
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A small REST service for managing a catalogue of books.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the books API over HTTP.
    Serve(ServeArgs),
    /// Apply the database migrations and exit.
    Migrate(MigrateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Overrides `server.host` from the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Overrides `server.port` from the configuration.
    #[arg(long)]
    port: Option<u16>,

    /// Keep books in memory instead of PostgreSQL.
    #[arg(long)]
    in_memory: bool,
}

#[derive(Args, Debug)]
struct MigrateArgs {}

impl Cli {
    /// Loads the configuration file and applies command-line overrides on top.
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = load_settings(&self.config)?;
        if let Commands::Serve(args) = &self.command {
            if let Some(host) = &args.host {
                settings.server.host = host.clone();
            }
            if let Some(port) = args.port {
                settings.server.port = port;
            }
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_overrides_bind_address() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let cli = Cli::parse_from([
            "bookshelf",
            "--config",
            config.to_str().unwrap(),
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--in-memory",
        ]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.server.bind_addr(), "127.0.0.1:9000");
        assert!(matches!(cli.command, Commands::Serve(ServeArgs { in_memory: true, .. })));
    }

    #[test]
    fn migrate_keeps_configured_server() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let cli = Cli::parse_from(["bookshelf", "migrate", "--config", config.to_str().unwrap()]);

        let settings = cli.settings().unwrap();
        assert_eq!(settings.server.port, 8080);
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
