pub mod csv_writer;

pub use csv_writer::{write_locations, write_locations_csv, write_vehicles, write_vehicles_csv};
