use serde::Serialize;

use super::catalog::{Catalog, MetricScores};

/// Entities at or above this index are counted healthy.
pub const HEALTHY_FLOOR: f64 = 70.0;
/// Entities strictly below this index are counted at risk.
pub const CRITICAL_CEILING: f64 = 65.0;

/// Round to one decimal place, half away from zero (`f64::round` semantics).
///
/// Board-facing figures must reproduce bit-for-bit, so the rounding rule is
/// fixed here rather than inherited from a formatting layer.
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Composite readiness index: arithmetic mean of the five metric values,
/// rounded to one decimal. Pure and total; the denominator is fixed at five
/// by construction of [`MetricScores`].
pub fn compute_index(metrics: &MetricScores) -> f64 {
    let sum: f64 = metrics.values().iter().sum();
    round_to_tenth(sum / 5.0)
}

/// Three-tier readiness banding derived from the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Critical,
    Warning,
    Healthy,
}

impl Status {
    /// index < 65 is critical, 65 <= index < 70 is warning, index >= 70 is
    /// healthy. The middle band is deliberate; it belongs to neither
    /// aggregate count below.
    pub fn classify(index: f64) -> Self {
        if index < CRITICAL_CEILING {
            Status::Critical
        } else if index < HEALTHY_FLOOR {
            Status::Warning
        } else {
            Status::Healthy
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Status::Critical => "Critical",
            Status::Warning => "Warning",
            Status::Healthy => "Healthy",
        }
    }

    /// Card/text color used by KPI tiles and the per-metric detail panel.
    pub const fn color(self) -> &'static str {
        match self {
            Status::Critical => "#b91c1c",
            Status::Warning => "#b45309",
            Status::Healthy => "#065f46",
        }
    }

    /// Marker color used by the hotspot map.
    pub const fn marker_color(self) -> &'static str {
        match self {
            Status::Critical => "red",
            Status::Warning => "orange",
            Status::Healthy => "green",
        }
    }
}

/// KPI aggregates over the whole catalog.
///
/// `healthy_count` and `at_risk_count` intentionally leave the warning band
/// uncounted, so their sum can be strictly less than `entity_count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexSummary {
    pub global_index: f64,
    pub healthy_count: usize,
    pub at_risk_count: usize,
    pub entity_count: usize,
}

pub fn summarize(catalog: &Catalog) -> IndexSummary {
    let entities = catalog.entities();
    let entity_count = entities.len();

    let global_index = if entity_count == 0 {
        0.0
    } else {
        let sum: f64 = entities.iter().map(|entity| entity.index).sum();
        round_to_tenth(sum / entity_count as f64)
    };

    let healthy_count = entities
        .iter()
        .filter(|entity| entity.index >= HEALTHY_FLOOR)
        .count();
    let at_risk_count = entities
        .iter()
        .filter(|entity| entity.index < CRITICAL_CEILING)
        .count();

    IndexSummary {
        global_index,
        healthy_count,
        at_risk_count,
        entity_count,
    }
}
