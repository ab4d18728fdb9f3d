use crate::error::AirframeError;
use crate::model::OutputRecord;
use std::path::Path;

/// Render records as the published dataset: a pretty JSON array ending in a
/// newline.
pub fn to_json(records: &[OutputRecord]) -> Result<String, AirframeError> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

pub fn write_dataset(path: &Path, records: &[OutputRecord]) -> Result<(), AirframeError> {
    let json = to_json(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    log::info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
