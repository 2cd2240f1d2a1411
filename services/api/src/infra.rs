use chrono::NaiveDate;
use earth_twin::dashboard::{AlertConfig, AlertEngine, Catalog};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared request context. The catalog is built once at startup and shared
/// read-only by every session; per-request state stays in the handlers.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) alerts: Arc<AlertEngine>,
}

impl AppState {
    pub(crate) fn new(
        readiness: Arc<AtomicBool>,
        metrics: Arc<PrometheusHandle>,
        catalog: Catalog,
    ) -> Self {
        Self {
            readiness,
            metrics,
            catalog: Arc::new(catalog),
            alerts: Arc::new(AlertEngine::new(AlertConfig::standard())),
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
