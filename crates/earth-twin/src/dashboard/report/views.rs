use chrono::NaiveDate;
use serde::Serialize;

use super::super::alerts::{Alert, AlertDigest, AlertRule};
use super::super::catalog::MetricKind;
use super::super::scoring::Status;
use super::super::trend::TrendPoint;

#[derive(Debug, Clone, Serialize)]
pub struct KpiRow {
    pub generated: NaiveDate,
    pub global_index: f64,
    pub healthy_count: usize,
    pub at_risk_count: usize,
    pub entity_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricView {
    pub metric: MetricKind,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub name: String,
    pub country: String,
    pub index: f64,
    pub status: Status,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub metrics: Vec<MetricView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarkerView {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub status: Status,
    pub color: &'static str,
    pub hover: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub entity: String,
    pub rule: AlertRule,
    pub rule_label: &'static str,
    pub detail: String,
}

impl AlertView {
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            entity: alert.entity.clone(),
            rule: alert.rule,
            rule_label: alert.rule.label(),
            detail: alert.detail.clone(),
        }
    }
}

/// Alert panel with the all-clear state spelled out, never just an empty
/// list without an affordance.
#[derive(Debug, Clone, Serialize)]
pub struct AlertPanelView {
    pub all_clear: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub alerts: Vec<AlertView>,
}

impl AlertPanelView {
    pub fn from_digest(digest: &AlertDigest) -> Self {
        Self {
            all_clear: digest.all_clear,
            message: digest.all_clear.then_some(AlertDigest::ALL_CLEAR_MESSAGE),
            alerts: digest.alerts.iter().map(AlertView::from_alert).collect(),
        }
    }
}

/// Everything the single-page dashboard renders in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub kpi: KpiRow,
    pub entities: Vec<EntityView>,
    pub map: Vec<MapMarkerView>,
    pub alerts: AlertPanelView,
}

/// Detail panel payload for one selected entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDetailView {
    pub entity: EntityView,
    pub trend: Vec<TrendPoint>,
}
