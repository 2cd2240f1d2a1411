use crate::infra::{deserialize_optional_date, AppState};
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate, TimeZone, Utc};
use earth_twin::dashboard::{BoardSnapshot, DashboardSummary, EntityDetailView};
use earth_twin::error::AppError;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    /// Pins the generated date so demo output is reproducible; defaults to today.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn dashboard_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard/summary", get(summary_endpoint))
        .route("/api/v1/dashboard/entities/:name", get(entity_endpoint))
        .route(
            "/api/v1/dashboard/entities/:name/snapshot",
            get(snapshot_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn summary_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Json<DashboardSummary> {
    let generated = query.date.unwrap_or_else(|| Local::now().date_naive());
    Json(DashboardSummary::build(
        &state.catalog,
        &state.alerts,
        generated,
    ))
}

pub(crate) async fn entity_endpoint(
    Extension(state): Extension<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<EntityDetailView>, AppError> {
    let entity = state.catalog.entity(&name)?;
    let trend_end = query.date.unwrap_or_else(|| Local::now().date_naive());
    Ok(Json(EntityDetailView::build(entity, trend_end)))
}

pub(crate) async fn snapshot_endpoint(
    Extension(state): Extension<AppState>,
    Path(name): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<BoardSnapshot>, AppError> {
    let generated_at = match query.date {
        Some(date) => Utc
            .from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()),
        None => Utc::now(),
    };
    let snapshot = BoardSnapshot::for_entity(&state.catalog, &name, generated_at)?;
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use earth_twin::dashboard::Catalog;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState::new(
            Arc::new(AtomicBool::new(true)),
            Arc::new(handle),
            Catalog::demo(),
        )
    }

    fn pinned_query() -> Query<DashboardQuery> {
        Query(DashboardQuery {
            date: NaiveDate::from_ymd_opt(2025, 12, 1),
        })
    }

    #[tokio::test]
    async fn summary_endpoint_reports_kpis_and_alerts() {
        let Json(summary) = summary_endpoint(Extension(test_state()), pinned_query()).await;

        assert_eq!(summary.kpi.global_index, 70.9);
        assert_eq!(summary.kpi.healthy_count, 3);
        assert_eq!(summary.kpi.at_risk_count, 2);
        assert_eq!(summary.entities.len(), 6);
        assert_eq!(summary.alerts.alerts.len(), 6);
        assert!(!summary.alerts.all_clear);
    }

    #[tokio::test]
    async fn entity_endpoint_returns_detail_with_trend() {
        let Json(detail) = entity_endpoint(
            Extension(test_state()),
            Path("Nippon Auto".to_string()),
            pinned_query(),
        )
        .await
        .expect("entity exists");

        assert_eq!(detail.entity.index, 81.6);
        assert_eq!(detail.entity.status_label, "Healthy");
        assert_eq!(detail.trend.len(), 12);
    }

    #[tokio::test]
    async fn unknown_entity_maps_to_not_found() {
        let app = dashboard_router().layer(Extension(test_state()));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/v1/dashboard/entities/Initech")
                    .body(axum::body::Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn snapshot_endpoint_returns_ordered_fields() {
        let Json(snapshot) = snapshot_endpoint(
            Extension(test_state()),
            Path("GreenEnergy Ltd".to_string()),
            pinned_query(),
        )
        .await
        .expect("entity exists");

        assert_eq!(snapshot.title, "Earth 3.0 — Board Snapshot: GreenEnergy Ltd");
        assert_eq!(
            snapshot.lines.last().map(String::as_str),
            Some("Earth3_Index: 58.2")
        );
    }
}
