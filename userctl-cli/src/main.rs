//! userctl CLI - CRUD commands for a single-table SQLite user database
//!
//! Every invocation runs exactly one command in one scoped session:
//! - `initialize` resets the table and inserts the seed user
//! - `get-user`, `get-all-users`, `partial-match`, `first-users` read
//! - `create-user`, `change-email`, `delete-user` write
//!
//! The database is chosen with `--database-url`, `DATABASE_URL` (also read
//! from `./.env` or `~/.userctl/.env`), or defaults to `sqlite://users.db`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

mod commands;
mod config;
mod output;
mod tracing_setup;

use output::Output;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "userctl",
    author,
    version,
    about = "Create, read, update and delete users in a SQLite database"
)]
struct Cli {
    /// SQLite database URL (e.g. sqlite://users.db)
    #[arg(long, global = true, env = "DATABASE_URL", value_name = "URL")]
    database_url: Option<String>,

    /// Print users as JSON instead of text lines
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    User(commands::UserCommand),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's `env = "DATABASE_URL"` sees .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();
    for path in &env_files {
        debug!("loaded environment from {}", path.display());
    }

    match cli.command {
        Commands::User(command) => {
            let db_config = config::database_config(cli.database_url);
            commands::run_user_command(command, &db_config, Output::new(cli.json)).await?
        }
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
