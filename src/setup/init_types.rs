use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::types::GeoPoint;
use crate::error::{GeneratorError, Result};
use crate::fixtures::LocationRequest;

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub request: LocationRequest,
    pub seed: u64,
    /// Anchor for ripeness dates.
    pub today: NaiveDate,
    pub locations_output: PathBuf,
    pub vehicles_output: PathBuf,
}

impl GeneratorSettings {
    /// Checks the caller-supplied bounds the generator itself does not guard.
    pub fn new(
        num_records: usize,
        center: GeoPoint,
        radius_miles: f64,
        seed: u64,
        today: NaiveDate,
        locations_output: PathBuf,
        vehicles_output: PathBuf,
    ) -> Result<Self> {
        if num_records < 1 {
            return Err(GeneratorError::InvalidRecordCount);
        }
        if !radius_miles.is_finite() || radius_miles < 0.0 {
            return Err(GeneratorError::InvalidRadius(radius_miles));
        }

        Ok(Self {
            request: LocationRequest {
                num_records,
                center,
                radius_miles,
            },
            seed,
            today,
            locations_output,
            vehicles_output,
        })
    }
}
