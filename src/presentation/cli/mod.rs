pub mod commands;

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::common::error::DevSetupError;
use crate::domain::entities::Environment;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::process::{CommandExecutor, CommandRunner};
use crate::infrastructure::scm::{GitScm, ScmOperations};

use commands::{BuildModulesCommand, InitCommand, MklinksCommand, RestartIisCommand, UpdateCommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    " for ",
    env!("BUILD_TARGET"),
    ")"
);

/// devsetup - set up a multi-repository developer environment
#[derive(Parser)]
#[command(name = "devsetup")]
#[command(about = "Clone, update, link and build the repositories of a developer environment")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding repositories.json, directories.json, iis-settings.json,
    /// build-settings.json and secrets.json (defaults to current directory)
    #[arg(long, global = true, env = "DEVSETUP_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Clone every configured repository that is not on disk yet
    Init,

    /// Pull the dev and qa branches from origin into every cloned repository
    #[command(alias = "pull")]
    Update,

    /// Link each module's *Web directory into the platform modules root
    Mklinks,

    /// Recycle the configured IIS application pool
    #[command(name = "restart-iis")]
    RestartIis,

    /// Restore packages and build every module repository
    #[command(name = "build-modules")]
    BuildModules,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    /// Log to stderr; `RUST_LOG` overrides the verbosity flag
    pub fn init_logging(&self) {
        let default_directive = if self.cli.verbose {
            "devsetup=debug"
        } else {
            "devsetup=info"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(!self.cli.no_color)
            .try_init();
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        let Some(command) = self.cli.command else {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        };

        match self.handle_command(command).await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self, command: Commands) -> anyhow::Result<()> {
        let environment = self.load_environment()?;
        let scm: Arc<dyn ScmOperations> = Arc::new(GitScm::new());
        let runner: Arc<dyn CommandRunner> = Arc::new(CommandExecutor::new());

        tracing::debug!("Dispatching {:?}", command);
        match command {
            Commands::Init => {
                InitCommand::new(scm, self.cli.verbose)
                    .execute(&environment)
                    .await
            }
            Commands::Update => UpdateCommand::new(scm).execute(&environment).await,
            Commands::Mklinks => MklinksCommand::new().execute(&environment),
            Commands::RestartIis => RestartIisCommand::new(runner).execute(&environment).await,
            Commands::BuildModules => {
                BuildModulesCommand::new(runner)
                    .execute(&environment)
                    .await
            }
        }
    }

    fn load_environment(&self) -> anyhow::Result<Environment> {
        let config_dir = match &self.cli.config_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let environment = ConfigStore::new(config_dir)
            .load()
            .map_err(DevSetupError::from)?;
        Ok(environment)
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
