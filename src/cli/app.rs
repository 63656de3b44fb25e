//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, GenerateArgs};
use globfile::output::OutputMode;

/// globfile - glob module specifiers as virtual modules
#[derive(Parser, Debug)]
#[command(
    name = "globfile",
    version,
    about = "Resolve glob module specifiers into virtual modules",
    long_about = "Resolve glob module specifiers into virtual modules.\n\n\
                  Specifiers like glob:./components/*.ts resolve to a virtual file path.\n\
                  Loading that path generates a module that re-exports or lists every match."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter globfile.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Check whether a specifier is a glob specifier
    Check {
        /// Module specifier, e.g. glob:./x/*.ts
        specifier: String,
    },

    /// Resolve a specifier to its virtual file path
    Resolve {
        /// Module specifier, e.g. glob:./x/*.ts
        specifier: String,

        /// File containing the import
        #[arg(short, long)]
        importer: PathBuf,
    },

    /// List the files matched by a virtual file path
    Matches {
        /// Virtual file path (output of `resolve`)
        virtual_path: PathBuf,
    },

    /// Generate the module source for a virtual file path
    Generate {
        /// Virtual file path (output of `resolve`)
        virtual_path: PathBuf,

        /// Module dialect: module, commonjs
        #[arg(short, long)]
        module_type: Option<String>,

        /// Import paths to emit: absolute, relative
        #[arg(short, long)]
        filepath_type: Option<String>,

        /// Project root for files/filepaths keys
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Check { specifier }) => commands::check(&specifier, output_mode),
        Some(Command::Resolve {
            specifier,
            importer,
        }) => commands::resolve(&specifier, &importer, output_mode),
        Some(Command::Matches { virtual_path }) => commands::matches(&virtual_path, output_mode),
        Some(Command::Generate {
            virtual_path,
            module_type,
            filepath_type,
            root,
        }) => commands::generate(
            GenerateArgs {
                virtual_path,
                module_type,
                filepath_type,
                root,
            },
            output_mode,
        ),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": globfile::VERSION
                    })
                );
            } else {
                println!("globfile v{}", globfile::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": globfile::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("globfile v{}", globfile::VERSION);
                println!("\nRun 'globfile --help' for usage");
                println!("Run 'globfile resolve <specifier> --importer <file>' to get started");
            }
            Ok(())
        },
    }
}
