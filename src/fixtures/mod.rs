pub mod attributes;
pub mod data_generator;
pub mod locations;
pub mod vehicles;

pub use data_generator::{generate_fixtures, FixtureSet};
pub use locations::LocationRequest;

use rand::Rng;

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}
