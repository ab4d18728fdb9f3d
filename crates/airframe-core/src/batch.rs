use crate::error::AirframeError;
use crate::model::OutputRecord;
use crate::profiles::schema::{AircraftProfile, Catalog};
use crate::source::DocumentSource;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// How a batch run is scoped and how it reacts to failures.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Worker threads for extraction. `None` lets rayon pick.
    pub jobs: Option<usize>,
    /// Turn the first per-aircraft failure into the batch error.
    pub fail_fast: bool,
    /// Restrict the run to these aircraft ids. Empty means all.
    pub only: Vec<String>,
}

#[derive(Debug)]
pub struct ProfileFailure {
    pub id: String,
    pub error: AirframeError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful records in rank order.
    pub records: Vec<OutputRecord>,
    /// Failed aircraft in rank order.
    pub failures: Vec<ProfileFailure>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch every article the selected profiles need and extract them all.
///
/// Articles are fetched once each, one at a time, in rank order. Extraction
/// then runs on a bounded worker pool over the shared markup.
pub fn run_batch(
    catalog: &Catalog,
    source: &dyn DocumentSource,
    options: &BatchOptions,
) -> Result<BatchOutcome, AirframeError> {
    let profiles = select(catalog, &options.only)?;
    let pages = fetch_all(&profiles, source);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.jobs.unwrap_or(0))
        .build()
        .map_err(|e| AirframeError::WorkerPool(e.to_string()))?;

    let results: Vec<Result<OutputRecord, AirframeError>> = pool.install(|| {
        profiles
            .par_iter()
            .map(|profile| match pages.get(profile.document.as_str()) {
                Some(Ok(markup)) => crate::extract(profile, catalog, markup),
                Some(Err(reason)) => Err(unavailable(profile, reason)),
                None => Err(unavailable(profile, "not fetched")),
            })
            .collect()
    });

    let mut outcome = BatchOutcome::default();
    for (profile, result) in profiles.iter().zip(results) {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                log::warn!("{}: {}", profile.id, error);
                outcome.failures.push(ProfileFailure {
                    id: profile.id.clone(),
                    error,
                });
            }
        }
    }

    log::info!(
        "batch finished: {} records, {} failures",
        outcome.records.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}

fn select<'a>(catalog: &'a Catalog, only: &[String]) -> Result<Vec<&'a AircraftProfile>, AirframeError> {
    if let Some(unknown) = only.iter().find(|id| catalog.profile(id).is_none()) {
        return Err(AirframeError::UnknownAircraft(unknown.clone()));
    }
    Ok(catalog
        .ranked()
        .into_iter()
        .filter(|p| only.is_empty() || only.contains(&p.id))
        .collect())
}

/// Fetch failures are kept as reasons and rebuilt per aircraft.
fn fetch_all<'a>(
    profiles: &[&'a AircraftProfile],
    source: &dyn DocumentSource,
) -> BTreeMap<&'a str, Result<String, String>> {
    let mut pages = BTreeMap::new();
    for profile in profiles {
        let document = profile.document.as_str();
        if pages.contains_key(document) {
            continue;
        }
        log::info!("fetching {}", document);
        let page = source.fetch(document).map_err(|e| match e {
            AirframeError::DocumentUnavailable { reason, .. } => reason,
            other => other.to_string(),
        });
        pages.insert(document, page);
    }
    pages
}

fn unavailable(profile: &AircraftProfile, reason: &str) -> AirframeError {
    AirframeError::DocumentUnavailable {
        document: profile.document.clone(),
        reason: reason.to_string(),
    }
}
