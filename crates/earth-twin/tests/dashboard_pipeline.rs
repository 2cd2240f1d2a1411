use chrono::{NaiveDate, TimeZone, Utc};
use earth_twin::dashboard::{
    AlertEngine, BoardSnapshot, Catalog, DashboardSummary, Entity, Location, MetricScores, Status,
};

fn generated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date")
}

#[test]
fn demo_catalog_indexes_and_statuses_are_reproducible() {
    let catalog = Catalog::demo();
    let expected = [
        ("Unilever PLC", 74.6, Status::Healthy),
        ("ACME Motors", 64.6, Status::Critical),
        ("Nippon Auto", 81.6, Status::Healthy),
        ("GreenEnergy Ltd", 58.2, Status::Critical),
        ("Continental Foods", 79.6, Status::Healthy),
        ("GlobalBank", 66.8, Status::Warning),
    ];

    for (name, index, status) in expected {
        let entity = catalog.entity(name).expect("demo entity present");
        assert_eq!(entity.index, index, "index for {name}");
        assert_eq!(entity.status(), status, "status for {name}");
    }
}

#[test]
fn summary_counts_respect_the_three_way_partition() {
    let catalog = Catalog::demo();
    let summary = DashboardSummary::build(&catalog, &AlertEngine::default(), generated());

    assert_eq!(summary.kpi.global_index, 70.9);
    assert_eq!(summary.kpi.healthy_count, 3);
    assert_eq!(summary.kpi.at_risk_count, 2);
    assert_eq!(summary.kpi.entity_count, 6);
    // GlobalBank's warning-band index keeps the two counts from covering
    // the catalog.
    assert!(summary.kpi.healthy_count + summary.kpi.at_risk_count < summary.kpi.entity_count);
}

#[test]
fn all_clear_catalog_renders_an_explicit_empty_state() {
    let entities = vec![
        Entity::new(
            "Steady Corp",
            "Testland",
            Location::new(0.0, 0.0),
            MetricScores::new(80.0, 80.0, 80.0, 80.0, 80.0),
        )
        .expect("entity is well-formed"),
    ];
    let catalog = Catalog::from_entities(entities).expect("unique names");
    let summary = DashboardSummary::build(&catalog, &AlertEngine::default(), generated());

    assert!(summary.alerts.all_clear);
    assert!(summary.alerts.alerts.is_empty());
    assert_eq!(
        summary.alerts.message,
        Some("No critical alerts detected across monitored entities.")
    );
}

#[test]
fn snapshot_carries_the_contract_field_order() {
    let catalog = Catalog::demo();
    let generated_at = Utc
        .with_ymd_and_hms(2025, 12, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");
    let snapshot =
        BoardSnapshot::for_entity(&catalog, "Unilever PLC", generated_at).expect("entity exists");

    assert_eq!(snapshot.title, "Earth 3.0 — Board Snapshot: Unilever PLC");
    assert_eq!(
        snapshot.lines,
        vec![
            "Country: United Kingdom".to_string(),
            "Generated: December 01, 2025 09:30 UTC".to_string(),
            String::new(),
            "Finance: 78.0".to_string(),
            "AI Governance: 85.0".to_string(),
            "Climate: 62.0".to_string(),
            "Equity: 71.0".to_string(),
            "Sustainability: 77.0".to_string(),
            "Earth3_Index: 74.6".to_string(),
        ]
    );
}

#[test]
fn selecting_an_unknown_entity_is_reported_not_swallowed() {
    let catalog = Catalog::demo();
    let err = catalog.entity("Massive Dynamic").expect_err("unknown entity");
    assert!(err.to_string().contains("Massive Dynamic"));
}
