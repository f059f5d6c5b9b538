//! js-project-generator - Create JavaScript/TypeScript project skeletons

use clap::{Parser, Subcommand};
use colored::Colorize;
use jsgen_core::tui::CreateArgs;
use jsgen_core::{Archetype, GeneratorRegistry};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "js-project-generator")]
#[command(about = "CLI to create various JavaScript/TypeScript project structures")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,

    /// Log generation details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available project types
    List,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Project type (nodejs, express, nextjs, react, nest, electron, react-native)
    #[arg(short = 't', long = "type")]
    pub project_type: Option<String>,

    /// Language to use (js or ts)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Use defaults instead of prompting (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// YAML file with default answers (overrides $JSGEN_CONFIG)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.project_name,
            archetype: args.project_type,
            language: args.language,
            config: args.config,
            yes: args.yes,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_archetypes() {
    let registry = GeneratorRegistry::with_builtin();

    println!("{}", "Available project types:".bold());
    for id in registry.ids() {
        match id.parse::<Archetype>() {
            Ok(archetype) => {
                let note = match archetype.forced_language() {
                    Some(language) => format!(" ({} only)", language.display_name()),
                    None => String::new(),
                };
                println!(
                    "  {:<14} {}{}",
                    id.cyan(),
                    archetype.display_name(),
                    note.dimmed()
                );
            }
            Err(_) => println!("  {}", id.cyan()),
        }
    }
}

/// Prompt cancellation surfaces as an interrupted I/O error from cliclack
fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|e| e.kind() == std::io::ErrorKind::Interrupted)
    })
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
    init_tracing(args.verbose);
    tracing::debug!(?args, "parsed arguments");

    match args.command {
        Some(Command::List) => {
            print_archetypes();
            ExitCode::SUCCESS
        }
        None => {
            let result = jsgen_core::run(args.create.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if is_cancelled(&e) => {
                    eprintln!("{}", "Operation cancelled".yellow());
                    ExitCode::from(130)
                }
                Err(e) => {
                    eprintln!("{} {:#}", "Error:".red().bold(), e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
