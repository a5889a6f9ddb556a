//! Ely CLI - Project and module scaffolding for Elysia web APIs

mod framework;

use apigen_core::cli::{finish, init_logging, resolve_project_dir, run_generate_module};
use apigen_core::InitArgs;
use clap::{Parser, Subcommand};
use framework::ElysiaConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ely-cli")]
#[command(about = "Elysia.js project and module generator")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Project root to run in (defaults to the current directory)
    #[arg(short = 'C', long, global = true, env = "ELY_CLI_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a new Elysia.js project
    Init(CliInitArgs),
    /// Generate a new module
    #[command(name = "generate:module", alias = "g:m")]
    GenerateModule {
        /// Module name (e.g. order, orderItem, order-item)
        name: String,
    },
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Project directory name
    pub name: Option<String>,

    /// Skip `bun init` and dependency installation
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs {
            name: args.name,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

async fn run(config: &ElysiaConfig, command: Command, dir: &Path) -> anyhow::Result<()> {
    match command {
        Command::Init(init_args) => {
            let result = apigen_core::run_init(config, init_args.into(), dir).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result.map(drop)
        }
        Command::GenerateModule { name } => {
            run_generate_module(config, dir, &name).await.map(drop)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let config = ElysiaConfig;
    let result = match resolve_project_dir(args.project_dir) {
        Ok(dir) => run(&config, args.command, &dir).await,
        Err(e) => Err(e),
    };

    finish(result)
}
