use chrono::{Days, NaiveDate};
use rand::Rng;
use tracing::trace;

use super::pick;
use crate::config::constant::{
    MAX_DEMAND, MAX_EXPIRY_OFFSET_DAYS, MAX_RIPENESS_OFFSET_DAYS, MIN_DEMAND,
    MIN_EXPIRY_OFFSET_DAYS, MIN_RIPENESS_OFFSET_DAYS, URGENCY_DECIMALS,
};
use crate::domain::types::{
    AttributeBundle, ContaminationGroup, HandlingNote, Packaging, ProductType, ShelfLife, TimeSlot,
};
use crate::error::{GeneratorError, Result};
use crate::utils::round_to;

/// Draws one complete attribute bundle for a location.
///
/// `today` anchors the ripeness date. Draws happen in a fixed order (product,
/// demand, ripeness, expiry, packaging, contamination, handling, urgency,
/// time slot) so a seeded rng always yields the same bundle.
pub fn generate_attributes<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
) -> Result<AttributeBundle> {
    let product = pick(rng, &ProductType::ALL);
    let demand = rng.gen_range(MIN_DEMAND..=MAX_DEMAND);

    let ripeness_offset = rng.gen_range(MIN_RIPENESS_OFFSET_DAYS..=MAX_RIPENESS_OFFSET_DAYS);
    let ripeness = today
        .checked_add_days(Days::new(u64::from(ripeness_offset)))
        .ok_or_else(|| GeneratorError::InvalidDate(today.to_string()))?;
    let expiry_offset = rng.gen_range(MIN_EXPIRY_OFFSET_DAYS..=MAX_EXPIRY_OFFSET_DAYS);
    let shelf_life = ShelfLife::new(ripeness, expiry_offset)?;

    let packaging = pick(rng, &Packaging::ALL);
    let contamination_group = pick(rng, &ContaminationGroup::ALL);
    let handling = pick(rng, &HandlingNote::ALL);
    let urgency = round_to(rng.gen::<f64>(), URGENCY_DECIMALS);
    let time_slot = pick(rng, &TimeSlot::ALL);

    trace!(?product, demand, ?shelf_life, ?time_slot, "generated attributes");

    Ok(AttributeBundle {
        demand,
        product,
        temperature: product.temperature_band(),
        shelf_life,
        packaging,
        contamination_group,
        handling,
        urgency,
        time_slot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn bundles_respect_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(64);
        for _ in 0..5_000 {
            let bundle = generate_attributes(&mut rng, today()).unwrap();

            assert!((1..=25).contains(&bundle.demand));
            assert_eq!(bundle.temperature, bundle.product.temperature_band());

            let ripeness_gap = (bundle.shelf_life.ripeness() - today()).num_days();
            assert!((0..=3).contains(&ripeness_gap));
            assert!((2..=7).contains(&bundle.shelf_life.days_to_expiry()));

            assert!((0.0..=1.0).contains(&bundle.urgency));
            let hundredths = bundle.urgency * 100.0;
            assert!((hundredths - hundredths.round()).abs() < 1e-9);

            assert!(bundle.time_slot.end() > bundle.time_slot.start());
        }
    }

    #[test]
    fn every_category_shows_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut products = HashSet::new();
        let mut slots = HashSet::new();
        let mut handling = HashSet::new();
        let mut demands = HashSet::new();

        for _ in 0..2_000 {
            let bundle = generate_attributes(&mut rng, today()).unwrap();
            products.insert(bundle.product);
            slots.insert(bundle.time_slot);
            handling.insert(bundle.handling);
            demands.insert(bundle.demand);
        }

        assert_eq!(products.len(), ProductType::ALL.len());
        assert_eq!(slots.len(), TimeSlot::ALL.len());
        assert_eq!(handling.len(), HandlingNote::ALL.len());
        assert_eq!(demands.len(), 25);
    }

    #[test]
    fn same_seed_same_bundle() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            generate_attributes(&mut a, today()).unwrap(),
            generate_attributes(&mut b, today()).unwrap()
        );
    }
}
