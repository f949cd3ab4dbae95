use anyhow::Context;
use clap::{Parser, Subcommand};

use supreg_cli::commands;
use supreg_cli::config::Config;
use supreg_db::SupplierRegistry;

#[derive(Parser)]
#[command(name = "supreg")]
#[command(about = "Supplier registry over a local SQLite store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new supplier
    Register(commands::register::RegisterArgs),

    /// Fetch a supplier by national id
    Fetch(commands::fetch::FetchArgs),

    /// List the ids of all registered suppliers
    List,

    /// Delete the supplier with the given national id
    Delete(commands::delete::DeleteArgs),

    /// Delete every supplier (asks for confirmation)
    DeleteAll(commands::delete_all::DeleteAllArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    tracing::debug!(db = %config.database_path.display(), "configuration loaded");
    let cli = Cli::parse();

    // One connection for the whole process; closed when `registry` drops.
    let registry = SupplierRegistry::open(&config.database_path)
        .with_context(|| format!("failed to open store at {}", config.database_path.display()))?;

    match cli.command {
        Commands::Register(args) => commands::register::execute(&registry, args),
        Commands::Fetch(args) => commands::fetch::execute(&registry, args),
        Commands::List => commands::list::execute(&registry),
        Commands::Delete(args) => commands::delete::execute(&registry, args),
        Commands::DeleteAll(args) => commands::delete_all::execute(&registry, args),
    }
}
