pub mod build;
pub mod extract;
pub mod profiles;

use airframe_core::error::AirframeError;
use airframe_core::profiles::builtin;
use airframe_core::profiles::schema::Catalog;
use std::path::PathBuf;

pub const DEFAULT_PRESET: &str = "airliners";

/// Which catalog a command runs against.
pub struct CatalogArg {
    pub preset: Option<String>,
    pub catalog: Option<PathBuf>,
}

impl CatalogArg {
    pub fn load(&self) -> Result<Catalog, AirframeError> {
        match (&self.catalog, &self.preset) {
            (Some(path), _) => airframe_core::profiles::load_catalog(path),
            (None, Some(name)) => builtin::load_preset(name),
            (None, None) => builtin::load_preset(DEFAULT_PRESET),
        }
    }
}
