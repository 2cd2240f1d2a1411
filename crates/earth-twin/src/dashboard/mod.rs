pub mod alerts;
pub mod catalog;
pub mod report;
pub mod scoring;
pub mod snapshot;
pub mod trend;

pub use alerts::{Alert, AlertConfig, AlertDigest, AlertEngine, AlertRule};
pub use catalog::{Catalog, CatalogError, Entity, Location, MetricKind, MetricScores};
pub use report::{DashboardSummary, EntityDetailView};
pub use scoring::{compute_index, IndexSummary, Status};
pub use snapshot::BoardSnapshot;
