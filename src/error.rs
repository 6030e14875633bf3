use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No depot found in locations data; cannot generate vehicles")]
    NoDepot,

    #[error("At least one location record is required")]
    InvalidRecordCount,

    #[error("Expiry must fall 2 to 7 days after ripeness, got {days}")]
    InvalidShelfLife { days: u32 },

    #[error("Invalid availability window {start:02}:00-{end:02}:00")]
    InvalidAvailability { start: u8, end: u8 },

    #[error("Radius must be a finite, non-negative number of miles, got {0}")]
    InvalidRadius(f64),

    #[error("Invalid seed '{0}', expected an unsigned integer")]
    InvalidSeed(String),

    #[error("Invalid date '{0}', expected MM/DD/YYYY")]
    InvalidDate(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
