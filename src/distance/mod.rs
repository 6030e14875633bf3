pub mod geodesic;

pub use geodesic::{great_circle_distance, sample_point};
