use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;
use tracing::info;

use crate::config::constant::{COORDINATE_DECIMALS, DATE_FORMAT, URGENCY_DECIMALS};
use crate::domain::types::{Location, Vehicle};
use crate::error::Result;

/// One row of `locations.csv`. Field order is the column order.
#[derive(Debug, Serialize)]
struct LocationRow {
    #[serde(rename = "Location_ID")]
    location_id: String,
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Demand_unit")]
    demand_unit: u32,
    #[serde(rename = "Depot_Flag")]
    depot_flag: &'static str,
    #[serde(rename = "Product_Type")]
    product_type: &'static str,
    #[serde(rename = "Temp_Min")]
    temp_min: i32,
    #[serde(rename = "Temp_Max")]
    temp_max: i32,
    #[serde(rename = "Ripeness_Date")]
    ripeness_date: String,
    #[serde(rename = "Expiration_Date")]
    expiration_date: String,
    #[serde(rename = "Packaging_Type")]
    packaging_type: &'static str,
    #[serde(rename = "Contamination_Group")]
    contamination_group: &'static str,
    #[serde(rename = "Handling_Notes")]
    handling_notes: &'static str,
    #[serde(rename = "Urgency_Score")]
    urgency_score: String,
    #[serde(rename = "Time_Window_Start")]
    time_window_start: String,
    #[serde(rename = "Time_Window_End")]
    time_window_end: String,
}

impl From<&Location> for LocationRow {
    fn from(location: &Location) -> Self {
        let attrs = &location.attributes;
        Self {
            location_id: location.id.to_string(),
            latitude: format!("{:.*}", COORDINATE_DECIMALS as usize, location.point.lat),
            longitude: format!("{:.*}", COORDINATE_DECIMALS as usize, location.point.lon),
            demand_unit: attrs.demand,
            depot_flag: location.depot_flag(),
            product_type: attrs.product.as_str(),
            temp_min: attrs.temperature.min,
            temp_max: attrs.temperature.max,
            ripeness_date: attrs.shelf_life.ripeness().format(DATE_FORMAT).to_string(),
            expiration_date: attrs.shelf_life.expiration().format(DATE_FORMAT).to_string(),
            packaging_type: attrs.packaging.as_str(),
            contamination_group: attrs.contamination_group.as_str(),
            handling_notes: attrs.handling.as_str(),
            urgency_score: format!("{:.*}", URGENCY_DECIMALS as usize, attrs.urgency),
            time_window_start: attrs.time_slot.start().to_string(),
            time_window_end: attrs.time_slot.end().to_string(),
        }
    }
}

/// One row of `vehicles.csv`.
#[derive(Debug, Serialize)]
struct VehicleRow {
    #[serde(rename = "Vehicle_ID")]
    vehicle_id: String,
    #[serde(rename = "Capacity_boxes")]
    capacity_boxes: u32,
    #[serde(rename = "Temp_Min")]
    temp_min: i32,
    #[serde(rename = "Temp_Max")]
    temp_max: i32,
    #[serde(rename = "Start_Location")]
    start_location: String,
    #[serde(rename = "Available_From")]
    available_from: String,
    #[serde(rename = "Available_Until")]
    available_until: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id.to_string(),
            capacity_boxes: vehicle.capacity,
            temp_min: vehicle.temperature.min,
            temp_max: vehicle.temperature.max,
            start_location: vehicle.start_location.to_string(),
            available_from: vehicle.availability.from_time().to_string(),
            available_until: vehicle.availability.until_time().to_string(),
        }
    }
}

pub fn write_locations<W: Write>(writer: W, locations: &[Location]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for location in locations {
        wtr.serialize(LocationRow::from(location))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_vehicles<W: Write>(writer: W, vehicles: &[Vehicle]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for vehicle in vehicles {
        wtr.serialize(VehicleRow::from(vehicle))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_locations_csv<P: AsRef<Path>>(path: P, locations: &[Location]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_locations(file, locations)?;
    info!("Wrote {} locations to {}", locations.len(), path.as_ref().display());
    Ok(())
}

pub fn write_vehicles_csv<P: AsRef<Path>>(path: P, vehicles: &[Vehicle]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_vehicles(file, vehicles)?;
    info!("Wrote {} vehicles to {}", vehicles.len(), path.as_ref().display());
    Ok(())
}
