use chrono::NaiveDate;

use super::super::alerts::AlertEngine;
use super::super::catalog::{Catalog, Entity, MetricKind};
use super::super::scoring::{self, Status};
use super::super::trend;
use super::views::{
    AlertPanelView, DashboardSummary, EntityDetailView, EntityView, KpiRow, MapMarkerView,
    MetricView,
};

impl DashboardSummary {
    /// Assemble the full page model from the immutable catalog. Every call
    /// recomputes scoring, classification, and alerting from scratch; the
    /// catalog is the only input.
    pub fn build(catalog: &Catalog, engine: &AlertEngine, generated: NaiveDate) -> Self {
        let aggregates = scoring::summarize(catalog);
        let kpi = KpiRow {
            generated,
            global_index: aggregates.global_index,
            healthy_count: aggregates.healthy_count,
            at_risk_count: aggregates.at_risk_count,
            entity_count: aggregates.entity_count,
        };

        let entities = catalog.entities().iter().map(entity_view).collect();
        let map = catalog.entities().iter().map(map_marker_view).collect();
        let alerts = AlertPanelView::from_digest(&engine.digest(catalog));

        Self {
            kpi,
            entities,
            map,
            alerts,
        }
    }
}

impl EntityDetailView {
    pub fn build(entity: &Entity, trend_end: NaiveDate) -> Self {
        Self {
            entity: entity_view(entity),
            trend: trend::simulate(entity, trend_end),
        }
    }
}

fn entity_view(entity: &Entity) -> EntityView {
    let status = entity.status();
    let metrics = MetricKind::ordered()
        .into_iter()
        .map(|kind| {
            let value = entity.metrics.get(kind);
            MetricView {
                metric: kind,
                label: kind.label(),
                value,
                // Per-metric coloring reuses the index bands on the raw value.
                color: Status::classify(value).color(),
            }
        })
        .collect();

    EntityView {
        name: entity.name.clone(),
        country: entity.country.clone(),
        index: entity.index,
        status,
        status_label: status.label(),
        status_color: status.color(),
        metrics,
    }
}

fn map_marker_view(entity: &Entity) -> MapMarkerView {
    let status = entity.status();
    let hover = format!(
        "{} ({}) | Earth3 Index: {:.1} | Finance: {:.1} | AI Gov: {:.1} | Climate: {:.1}",
        entity.name,
        entity.country,
        entity.index,
        entity.metrics.get(MetricKind::Finance),
        entity.metrics.get(MetricKind::AiGovernance),
        entity.metrics.get(MetricKind::Climate),
    );

    MapMarkerView {
        name: entity.name.clone(),
        lat: entity.location.lat,
        lon: entity.location.lon,
        status,
        color: status.marker_color(),
        hover,
    }
}
