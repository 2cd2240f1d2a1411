use crate::infra::parse_date;
use chrono::{Local, NaiveDate, TimeZone, Utc};
use clap::Args;
use earth_twin::dashboard::{AlertDigest, AlertEngine, BoardSnapshot, Catalog, DashboardSummary};
use earth_twin::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct DashboardReportArgs {
    /// Generated date for the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Include the per-metric breakdown for every entity
    #[arg(long)]
    pub(crate) list_entities: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SnapshotArgs {
    /// Entity name exactly as listed in the catalog
    #[arg(long)]
    pub(crate) entity: String,
    /// Generation date for the snapshot header (defaults to now)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

pub(crate) fn run_dashboard_report(args: DashboardReportArgs) -> Result<(), AppError> {
    let generated = args.date.unwrap_or_else(|| Local::now().date_naive());
    let catalog = Catalog::demo();
    let summary = DashboardSummary::build(&catalog, &AlertEngine::default(), generated);

    println!("Earth 3.0 readiness dashboard (generated {generated})");
    println!(
        "Global index: {:.1} | healthy: {} | at risk: {} | monitored: {}",
        summary.kpi.global_index,
        summary.kpi.healthy_count,
        summary.kpi.at_risk_count,
        summary.kpi.entity_count
    );

    println!("\nEntities");
    for entity in &summary.entities {
        println!(
            "- {} ({}): index {:.1}, {}",
            entity.name, entity.country, entity.index, entity.status_label
        );
        if args.list_entities {
            for metric in &entity.metrics {
                println!("    {}: {:.1}", metric.label, metric.value);
            }
        }
    }

    println!("\nHotspot map markers");
    for marker in &summary.map {
        println!(
            "- [{}] {} at ({:.4}, {:.4})",
            marker.color, marker.name, marker.lat, marker.lon
        );
    }

    if summary.alerts.all_clear {
        println!("\n{}", AlertDigest::ALL_CLEAR_MESSAGE);
    } else {
        println!("\nExecutive alerts");
        for alert in &summary.alerts.alerts {
            println!("- {} — {} ({})", alert.entity, alert.rule_label, alert.detail);
        }
    }

    Ok(())
}

pub(crate) fn run_snapshot(args: SnapshotArgs) -> Result<(), AppError> {
    let generated_at = match args.date {
        Some(date) => Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default()),
        None => Utc::now(),
    };

    let catalog = Catalog::demo();
    let snapshot = match BoardSnapshot::for_entity(&catalog, &args.entity, generated_at) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("Known entities: {}", catalog.names().join(", "));
            return Err(err.into());
        }
    };
    print!("{}", snapshot.render_text());
    Ok(())
}
