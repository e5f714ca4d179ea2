#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod logging;

use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use wherefrom_core::ResolverConfig;

#[derive(Parser, Debug)]
#[command(name = "wherefrom")]
#[command(author, version, about = "Resolve import specifiers the way the lint plugin does", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON formatted output (stable, machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print version information
    Version,

    /// Resolve a single import specifier from a source file
    Resolve {
        /// The specifier as written in the source file
        specifier: String,

        /// The source file the import appears in
        source_file: PathBuf,

        /// Extension to probe, in order (repeatable; default "js")
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Project root for tilde imports, relative to the package boundary
        #[arg(long, value_name = "DIR")]
        root_dir: Option<PathBuf>,
    },

    /// Scan a source file and resolve every import it contains
    Check {
        /// The source file to scan
        source_file: PathBuf,

        /// Extension to probe, in order (repeatable; default "js")
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Project root for tilde imports, relative to the package boundary
        #[arg(long, value_name = "DIR")]
        root_dir: Option<PathBuf>,
    },
}

fn resolver_config(extensions: Vec<String>, root_dir: Option<PathBuf>) -> ResolverConfig {
    let mut config = ResolverConfig::default();
    if !extensions.is_empty() {
        config = config.with_extensions(extensions);
    }
    if let Some(root_dir) = root_dir {
        config = config.with_root_dir(root_dir);
    }
    config
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    let exit_code = match cli.command {
        Commands::Version => commands::version::run(cli.json)?,
        Commands::Resolve {
            specifier,
            source_file,
            extensions,
            root_dir,
        } => {
            let config = resolver_config(extensions, root_dir);
            commands::resolve::run(&specifier, &source_file, &config, cli.json)?
        }
        Commands::Check {
            source_file,
            extensions,
            root_dir,
        } => {
            let config = resolver_config(extensions, root_dir);
            commands::check::run(&source_file, &config, cli.json)?
        }
    };

    if exit_code != 0 {
        std::process::exit(i32::from(exit_code));
    }
    Ok(())
}
