pub mod constant {
    use crate::domain::types::{ClockTime, ProductType, TemperatureBand, TimeSlot};

    /// Mean Earth radius used to turn a linear radius into an angular one.
    pub const EARTH_RADIUS_MILES: f64 = 3958.8;

    /// Chance that a sampled location (anything after L001) is also a depot.
    pub const DEPOT_PROBABILITY: f64 = 0.10;

    /// Fleet size is this share of the location count, rounded up.
    pub const FLEET_PERCENT: usize = 30;

    pub const COORDINATE_DECIMALS: i32 = 6;
    pub const URGENCY_DECIMALS: i32 = 2;

    pub const MIN_DEMAND: u32 = 1;
    pub const MAX_DEMAND: u32 = 25;

    pub const MIN_RIPENESS_OFFSET_DAYS: u32 = 0;
    pub const MAX_RIPENESS_OFFSET_DAYS: u32 = 3;
    pub const MIN_EXPIRY_OFFSET_DAYS: u32 = 2;
    pub const MAX_EXPIRY_OFFSET_DAYS: u32 = 7;

    pub const MIN_CAPACITY: u32 = 100;
    pub const MAX_CAPACITY: u32 = 500;

    // 0 through 23
    pub const HOURS_IN_DAY: u8 = 24;

    pub const PRODUCT_TEMPERATURE_BANDS: [(ProductType, TemperatureBand); 5] = [
        (ProductType::Leafy, TemperatureBand::new(1, 7)),
        (ProductType::Dairy, TemperatureBand::new(0, 4)),
        (ProductType::Herbs, TemperatureBand::new(5, 10)),
        (ProductType::Meat, TemperatureBand::new(-2, 0)),
        (ProductType::Fruit, TemperatureBand::new(4, 8)),
    ];

    pub const VEHICLE_TEMPERATURE_BANDS: [TemperatureBand; 3] = [
        TemperatureBand::new(-2, 10),
        TemperatureBand::new(0, 8),
        TemperatureBand::new(-5, 4),
    ];

    pub const TIME_SLOT_WINDOWS: [(TimeSlot, ClockTime, ClockTime); 3] = [
        (
            TimeSlot::Morning,
            ClockTime::on_the_hour(8),
            ClockTime::on_the_hour(12),
        ),
        (
            TimeSlot::Afternoon,
            ClockTime::on_the_hour(12),
            ClockTime::on_the_hour(17),
        ),
        (
            TimeSlot::Evening,
            ClockTime::on_the_hour(17),
            ClockTime::on_the_hour(20),
        ),
    ];

    // Consumers of the CSV match these exactly.
    pub const DEPOT_FLAG_TRUE: &str = "TRUE";
    pub const DEPOT_FLAG_FALSE: &str = "FALSE";

    pub const DATE_FORMAT: &str = "%m/%d/%Y";

    pub const DEFAULT_LOCATIONS_OUTPUT: &str = "locations.csv";
    pub const DEFAULT_VEHICLES_OUTPUT: &str = "vehicles.csv";
    pub const SEED_ENV_KEY: &str = "FIXTURE_SEED";
}
