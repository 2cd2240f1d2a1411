use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::catalog::{Entity, MetricKind};

const TREND_MONTHS: usize = 12;
const RAMP_HALF_WIDTH: f64 = 6.0;
const JITTER: f64 = 2.0;

/// One simulated month across the three charted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub governance: f64,
    pub esg: f64,
    pub finance: f64,
}

/// Illustrative 12-month trend for the detail panel.
///
/// This is a presentation aid, not part of the scoring contract: each series
/// is a linear ramp around the entity's current value plus bounded jitter,
/// seeded from the entity's own index so demo output is stable across runs.
pub fn simulate(entity: &Entity, end: NaiveDate) -> Vec<TrendPoint> {
    let seed = (entity.index * 10.0).round().max(0.0) as u64;
    let mut rng = StdRng::seed_from_u64(seed);

    let governance = ramp(&mut rng, entity.metrics.get(MetricKind::AiGovernance));
    let esg = ramp(&mut rng, entity.metrics.get(MetricKind::Sustainability));
    let finance = ramp(&mut rng, entity.metrics.get(MetricKind::Finance));

    (0..TREND_MONTHS)
        .map(|position| {
            let back = (TREND_MONTHS - 1 - position) as u32;
            let month = end.checked_sub_months(Months::new(back)).unwrap_or(end);
            TrendPoint {
                month,
                governance: governance[position],
                esg: esg[position],
                finance: finance[position],
            }
        })
        .collect()
}

fn ramp(rng: &mut StdRng, value: f64) -> Vec<f64> {
    let start = value - RAMP_HALF_WIDTH;
    let step = (2.0 * RAMP_HALF_WIDTH) / (TREND_MONTHS as f64 - 1.0);
    (0..TREND_MONTHS)
        .map(|position| {
            let base = start + step * position as f64;
            let jitter = rng.gen_range(-JITTER..JITTER);
            let sampled = (base + jitter).clamp(0.0, 100.0);
            (sampled * 10.0).round() / 10.0
        })
        .collect()
}
