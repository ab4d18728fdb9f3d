mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "airframe",
    version,
    about = "Build an airliner performance dataset from encyclopedia pages"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every article in a catalog and extract the dataset
    Build {
        /// Predefined catalog (default: airliners)
        #[arg(short, long, value_name = "NAME", conflicts_with = "catalog")]
        preset: Option<String>,

        /// Custom JSON catalog file
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Read saved pages from DIR/<document>.html instead of fetching
        #[arg(long, value_name = "DIR")]
        offline: Option<PathBuf>,

        /// Base URL the document identifier is appended to
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// User-Agent header for article requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Minimum delay between requests in milliseconds
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Extraction worker threads
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Only build these aircraft ids (repeatable)
        #[arg(long = "only", value_name = "ID")]
        only: Vec<String>,

        /// Report failed aircraft and keep the rest instead of stopping
        #[arg(long)]
        keep_going: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the dataset JSON to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Extract one aircraft from a saved article
    Extract {
        /// Saved HTML page
        input_file: PathBuf,

        /// Aircraft id from the catalog
        #[arg(short, long, value_name = "ID")]
        aircraft: String,

        /// Predefined catalog (default: airliners)
        #[arg(short, long, value_name = "NAME", conflicts_with = "catalog")]
        preset: Option<String>,

        /// Custom JSON catalog file
        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect aircraft catalogs
    Profiles {
        #[command(subcommand)]
        action: ProfilesAction,
    },
}

#[derive(Subcommand)]
enum ProfilesAction {
    /// List the aircraft in a catalog
    List {
        #[arg(short, long, value_name = "NAME", conflicts_with = "catalog")]
        preset: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Explain how one aircraft is extracted
    Explain {
        /// Aircraft id (e.g., "B767-300F")
        id: String,

        #[arg(short, long, value_name = "NAME", conflicts_with = "catalog")]
        preset: Option<String>,

        #[arg(short, long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog
        file: PathBuf,
    },
    /// List the optional fields and the labels they match
    Fields,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Build {
            preset,
            catalog,
            offline,
            base_url,
            user_agent,
            timeout,
            interval_ms,
            jobs,
            only,
            keep_going,
            output,
            out,
        } => commands::build::run(commands::build::BuildArgs {
            catalog: commands::CatalogArg { preset, catalog },
            offline,
            base_url,
            user_agent,
            timeout,
            interval_ms,
            jobs,
            only,
            keep_going,
            output,
            out,
        }),
        Commands::Extract {
            input_file,
            aircraft,
            preset,
            catalog,
            output,
        } => commands::extract::run(
            input_file,
            &aircraft,
            commands::CatalogArg { preset, catalog },
            &output,
        ),
        Commands::Profiles { action } => match action {
            ProfilesAction::List { preset, catalog } => {
                commands::profiles::list(commands::CatalogArg { preset, catalog })
            }
            ProfilesAction::Explain {
                id,
                preset,
                catalog,
            } => commands::profiles::explain(&id, commands::CatalogArg { preset, catalog }),
            ProfilesAction::Validate { file } => commands::profiles::validate(&file),
            ProfilesAction::Fields => commands::profiles::fields(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
