use rand::Rng;

use interface::{Field, RateSnapshot};

/// 0.1% either way.
pub const DEFAULT_VARIANCE: f64 = 0.001;

/// Produces a nearby snapshot when no real data is available.
///
/// Every moving field gets its own random factor in `[1 - v, 1 + v]` and is
/// written back with the decimal places it came with (2 when it had none).
/// Everything else is copied from the base snapshot.
#[derive(Debug, Clone, Copy)]
pub struct VariationSimulator {
    variance: f64,
}

impl VariationSimulator {
    pub fn new(variance: f64) -> Self {
        Self {
            variance: variance.abs(),
        }
    }

    pub fn simulate<R: Rng + ?Sized>(&self, base: &RateSnapshot, rng: &mut R) -> RateSnapshot {
        let mut next = base.clone();
        for field in Field::ALL.into_iter().filter(|f| f.is_moving()) {
            let factor = rng.gen_range(1.0 - self.variance..=1.0 + self.variance);
            *next.get_mut(field) = vary(base.get(field), factor, self.variance);
        }
        next
    }
}

impl Default for VariationSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANCE)
    }
}

/// Decimal places of a numeric string; 2 for integers.
pub fn decimal_places(value: &str) -> usize {
    match value.trim().split_once('.') {
        Some((_, frac)) if !frac.is_empty() => frac.len(),
        _ => 2,
    }
}

fn vary(value: &str, factor: f64, variance: f64) -> String {
    let trimmed = value.trim();
    let x = match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => x,
        _ => return value.to_string(),
    };

    let places = decimal_places(trimmed);
    let candidate = format!("{:.*}", places, x * factor);

    // rounding to the source precision may step just outside the band
    match candidate.parse::<f64>() {
        Ok(v) if within_band(v, x, variance) => candidate,
        _ => format!("{:.*}", places, x),
    }
}

fn within_band(v: f64, x: f64, variance: f64) -> bool {
    let a = x * (1.0 - variance);
    let b = x * (1.0 + variance);
    v >= a.min(b) && v <= a.max(b)
}
