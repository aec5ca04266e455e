use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use structdoc::cli::CommandContext;
use structdoc::cli::ui::Output;
use structdoc::cli::commands::{config, generate, print};

#[derive(Parser)]
#[command(name = "structdoc")]
#[command(
    version,
    about = "Generate REPOSITORY_STRUCTURE.md documents for source directories"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Project config file (default: .structdoc/config.toml)")]
    config: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a structure document into each root directory
    Generate {
        #[arg(help = "Root directories (default: generate.roots from config)")]
        roots: Vec<PathBuf>,
        #[arg(long, help = "Document file name written inside each root")]
        output_file: Option<String>,
        #[arg(long = "dry-run", help = "Show target files only, don't write")]
        dry_run: bool,
    },

    /// Print the structure document for one directory
    Print {
        #[arg(help = "Directory to document")]
        dir: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mstructdoc encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Config files are only read by commands that need them
    let load = || CommandContext::load(cli.config.as_deref(), cli.quiet);

    match cli.command {
        Commands::Generate {
            roots,
            output_file,
            dry_run,
        } => {
            let mut ctx = load()?;
            let summary = generate::run(
                &mut ctx,
                generate::GenerateOptions {
                    roots,
                    output_file,
                    dry_run,
                },
            )?;
            if !summary.skipped.is_empty() {
                ctx.output
                    .info(&format!("{} root(s) skipped", summary.skipped.len()));
            }
        }
        Commands::Print { dir } => {
            print::run(&load()?, &dir)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                config::show(&load()?, &format)?;
            }
            ConfigAction::Path => {
                config::path()?;
            }
            ConfigAction::Init { global, force } => {
                config::init(&Output::quiet(cli.quiet), global, force)?;
            }
        },
    }

    Ok(())
}
