//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use exploitx_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "exploitx")]
#[command(version)]
#[command(about = "ExploitX CTF event page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level (overrides `log.level`; `RUST_LOG` still wins)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the full-screen event page (default)
    Page,
    /// Look up the profile and score for the signed-in user
    Profile {
        /// Look up this email instead of the cached sign-in
        #[arg(long)]
        email: Option<String>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the published challenges (flags are never shown)
    Challenges {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the storage key and record paths for an email
    Key {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Cache a sign-in for this machine
    Login {
        #[arg(long)]
        email: String,
    },
    /// Remove the cached sign-in
    Logout,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the database URL, keeping the rest of the file intact
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    let level = if cli.verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };

    // default to the event page
    let command = cli.command.unwrap_or(Commands::Page);

    // the page owns the terminal and logs to a file instead
    if !matches!(command, Commands::Page) {
        logging::init_stderr(level);
    }

    match command {
        Commands::Page => commands::page::run(&config, level).await,
        Commands::Profile { email, json } => {
            commands::profile::run(&config, email.as_deref(), json).await
        }
        Commands::Challenges { json } => commands::challenges::list(json),
        Commands::Key { email } => commands::key::show(&email),
        Commands::Login { email } => commands::auth::login(&email),
        Commands::Logout => commands::auth::logout(),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&config, &url),
        },
    }
}
