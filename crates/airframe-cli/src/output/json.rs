use airframe_core::error::AirframeError;
use airframe_core::model::OutputRecord;

pub fn print(records: &[OutputRecord]) -> Result<(), AirframeError> {
    let json = airframe_core::dataset::to_json(records)?;
    print!("{json}");
    Ok(())
}
