//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use signin_core::{auth, config};

mod commands;

#[derive(Parser)]
#[command(name = "signin")]
#[command(version)]
#[command(about = "Log in against a json-server user directory")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// User listing endpoint (overrides users_url from config)
    #[arg(long, global = true, env = "SIGNIN_USERS_URL", value_name = "URL")]
    users_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check one email/password pair without opening the login screen
    Check {
        /// Email to look up
        #[arg(long, value_parser = parse_email)]
        email: String,

        /// Password to compare (sent nowhere; compared locally)
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        password: String,
    },

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
}

/// Same rule the login form applies to its email field.
fn parse_email(value: &str) -> Result<String, String> {
    if auth::is_plausible_email(value) {
        Ok(value.to_string())
    } else {
        Err("expected an email address containing '@'".to_string())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, users_url } = cli;

    let mut config = config::Config::load().context("load config")?;
    if let Some(url) = users_url {
        config.users_url = url;
    }

    // default to the interactive login screen
    let Some(command) = command else {
        return commands::ui::run(&config).await;
    };

    match command {
        Commands::Check { email, password } => {
            commands::check::run(&config, email, password).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
