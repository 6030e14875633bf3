use std::fmt;

use chrono::{Days, NaiveDate};

use crate::config::constant::{
    DEPOT_FLAG_FALSE, DEPOT_FLAG_TRUE, HOURS_IN_DAY, MAX_EXPIRY_OFFSET_DAYS,
    MIN_EXPIRY_OFFSET_DAYS, PRODUCT_TEMPERATURE_BANDS, TIME_SLOT_WINDOWS,
};
use crate::error::{GeneratorError, Result};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            lat: crate::utils::round_to(self.lat, decimals),
            lon: crate::utils::round_to(self.lon, decimals),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:03}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{:03}", self.0)
    }
}

/// Inclusive temperature range in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureBand {
    pub min: i32,
    pub max: i32,
}

impl TemperatureBand {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

/// Wall clock time, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub const fn on_the_hour(hour: u8) -> Self {
        Self { hour, minute: 0 }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// Variant order matches PRODUCT_TEMPERATURE_BANDS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Leafy,
    Dairy,
    Herbs,
    Meat,
    Fruit,
}

impl ProductType {
    pub const ALL: [ProductType; 5] = [
        ProductType::Leafy,
        ProductType::Dairy,
        ProductType::Herbs,
        ProductType::Meat,
        ProductType::Fruit,
    ];

    pub fn temperature_band(self) -> TemperatureBand {
        PRODUCT_TEMPERATURE_BANDS[self as usize].1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Leafy => "Leafy",
            ProductType::Dairy => "Dairy",
            ProductType::Herbs => "Herbs",
            ProductType::Meat => "Meat",
            ProductType::Fruit => "Fruit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Packaging {
    Crate,
    Box,
    Pallet,
}

impl Packaging {
    pub const ALL: [Packaging; 3] = [Packaging::Crate, Packaging::Box, Packaging::Pallet];

    pub fn as_str(self) -> &'static str {
        match self {
            Packaging::Crate => "Crate",
            Packaging::Box => "Box",
            Packaging::Pallet => "Pallet",
        }
    }
}

/// Goods in different groups must not share a vehicle downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContaminationGroup {
    A,
    B,
    C,
}

impl ContaminationGroup {
    pub const ALL: [ContaminationGroup; 3] =
        [ContaminationGroup::A, ContaminationGroup::B, ContaminationGroup::C];

    pub fn as_str(self) -> &'static str {
        match self {
            ContaminationGroup::A => "A",
            ContaminationGroup::B => "B",
            ContaminationGroup::C => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlingNote {
    Fragile,
    KeepUpright,
    None,
}

impl HandlingNote {
    pub const ALL: [HandlingNote; 3] =
        [HandlingNote::Fragile, HandlingNote::KeepUpright, HandlingNote::None];

    pub fn as_str(self) -> &'static str {
        match self {
            HandlingNote::Fragile => "Fragile",
            HandlingNote::KeepUpright => "Keep Upright",
            HandlingNote::None => "None",
        }
    }
}

// Variant order matches TIME_SLOT_WINDOWS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub fn start(self) -> ClockTime {
        TIME_SLOT_WINDOWS[self as usize].1
    }

    pub fn end(self) -> ClockTime {
        TIME_SLOT_WINDOWS[self as usize].2
    }
}

/// Ripeness and expiration dates of a delivery.
///
/// Only [`ShelfLife::new`] builds one, so expiration always lands 2 to 7 days
/// after ripeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfLife {
    ripeness: NaiveDate,
    expiration: NaiveDate,
}

impl ShelfLife {
    pub fn new(ripeness: NaiveDate, expiry_offset_days: u32) -> Result<Self> {
        if !(MIN_EXPIRY_OFFSET_DAYS..=MAX_EXPIRY_OFFSET_DAYS).contains(&expiry_offset_days) {
            return Err(GeneratorError::InvalidShelfLife {
                days: expiry_offset_days,
            });
        }

        let expiration = ripeness
            .checked_add_days(Days::new(u64::from(expiry_offset_days)))
            .ok_or(GeneratorError::InvalidShelfLife {
                days: expiry_offset_days,
            })?;

        Ok(Self {
            ripeness,
            expiration,
        })
    }

    pub fn ripeness(&self) -> NaiveDate {
        self.ripeness
    }

    pub fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    pub fn days_to_expiry(&self) -> i64 {
        (self.expiration - self.ripeness).num_days()
    }
}

/// Hours a vehicle may operate, `start_hour..=end_hour`. Zero-length windows are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityWindow {
    start_hour: u8,
    end_hour: u8,
}

impl AvailabilityWindow {
    pub fn new(start_hour: u8, end_hour: u8) -> Result<Self> {
        if end_hour < start_hour || end_hour >= HOURS_IN_DAY {
            return Err(GeneratorError::InvalidAvailability {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn from_time(&self) -> ClockTime {
        ClockTime::on_the_hour(self.start_hour)
    }

    pub fn until_time(&self) -> ClockTime {
        ClockTime::on_the_hour(self.end_hour)
    }
}

/// Perishable-goods fields carried by every location, depot or not.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeBundle {
    pub demand: u32,
    pub product: ProductType,
    pub temperature: TemperatureBand,
    pub shelf_life: ShelfLife,
    pub packaging: Packaging,
    pub contamination_group: ContaminationGroup,
    pub handling: HandlingNote,
    pub urgency: f64,
    pub time_slot: TimeSlot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub point: GeoPoint,
    pub is_depot: bool,
    pub attributes: AttributeBundle,
}

impl Location {
    pub fn depot_flag(&self) -> &'static str {
        if self.is_depot {
            DEPOT_FLAG_TRUE
        } else {
            DEPOT_FLAG_FALSE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub capacity: u32,
    pub temperature: TemperatureBand,
    pub start_location: LocationId,
    pub availability: AvailabilityWindow,
}
