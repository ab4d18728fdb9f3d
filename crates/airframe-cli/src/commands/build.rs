use airframe_core::batch::{run_batch, BatchOptions};
use airframe_core::error::AirframeError;
use airframe_core::source::{DirectorySource, DocumentSource, FetchConfig, HttpSource};
use std::path::PathBuf;
use std::time::Duration;

use crate::commands::CatalogArg;
use crate::output;

pub struct BuildArgs {
    pub catalog: CatalogArg,
    pub offline: Option<PathBuf>,
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Option<u64>,
    pub interval_ms: Option<u64>,
    pub jobs: Option<usize>,
    pub only: Vec<String>,
    pub keep_going: bool,
    pub output: String,
    pub out: Option<PathBuf>,
}

pub fn run(args: BuildArgs) -> Result<(), AirframeError> {
    let catalog = args.catalog.load()?;

    let source: Box<dyn DocumentSource> = match &args.offline {
        Some(dir) => {
            log::info!("reading saved pages from {}", dir.display());
            Box::new(DirectorySource::new(dir))
        }
        None => {
            let config = fetch_config(&args);
            log::info!("fetching pages from {}", config.base_url);
            Box::new(HttpSource::new(config)?)
        }
    };

    let options = BatchOptions {
        jobs: args.jobs,
        fail_fast: !args.keep_going,
        only: args.only,
    };
    let outcome = run_batch(&catalog, source.as_ref(), &options)?;

    match args.output.as_str() {
        "json" => output::json::print(&outcome.records)?,
        _ => output::table::print(&outcome),
    }

    if let Some(path) = &args.out {
        airframe_core::dataset::write_dataset(path, &outcome.records)?;
        eprintln!(
            "Built {} aircraft, written to {}",
            outcome.records.len(),
            path.display()
        );
    }

    if !outcome.failures.is_empty() {
        eprintln!("{} aircraft failed:", outcome.failures.len());
        for failure in &outcome.failures {
            eprintln!("  {}: {}", failure.id, failure.error);
        }
    }

    Ok(())
}

fn fetch_config(args: &BuildArgs) -> FetchConfig {
    let mut config = FetchConfig::default();
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(secs) = args.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(ms) = args.interval_ms {
        config.min_interval = Duration::from_millis(ms);
    }
    config
}
