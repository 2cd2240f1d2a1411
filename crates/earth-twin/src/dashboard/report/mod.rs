mod summary;
pub mod views;

pub use views::{DashboardSummary, EntityDetailView};
