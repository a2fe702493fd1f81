//! Deterministic synthetic attributes for placement rows.

use crate::domain::model::{
    Company, Position, SyntheticAttributes, DURATION_MAX, DURATION_MIN, PACKAGE_MAX, PACKAGE_MIN,
    PLACEMENT_YEARS,
};
use rand::Rng;

/// Draws the five generated fields for every row from one random source.
///
/// Per row the draws happen in a fixed order (company, position, package,
/// duration, year) and rows are drawn in order, so a seeded source always
/// yields the same table for the same `n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticGenerator;

impl SyntheticGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<SyntheticAttributes> {
        let rows: Vec<SyntheticAttributes> = (0..n).map(|_| self.draw_row(rng)).collect();
        tracing::debug!(rows = rows.len(), "generated synthetic attributes");
        rows
    }

    fn draw_row<R: Rng + ?Sized>(&self, rng: &mut R) -> SyntheticAttributes {
        let company = pick(&Company::ALL, rng);
        let position = pick(&Position::ALL, rng);
        let package = round_to_cents(rng.gen_range(PACKAGE_MIN..=PACKAGE_MAX));
        let duration = rng.gen_range(DURATION_MIN..=DURATION_MAX);
        let year = pick(&PLACEMENT_YEARS, rng);

        SyntheticAttributes {
            company,
            position,
            package,
            duration,
            year,
        }
    }
}

/// Uniform choice through a `u32` index so the draw consumes the same words
/// of the stream on 32- and 64-bit targets.
fn pick<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    items[rng.gen_range(0..items.len() as u32) as usize]
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
