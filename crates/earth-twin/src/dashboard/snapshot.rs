use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::{Catalog, CatalogError, MetricKind};

/// Board snapshot for one entity: the ordered field list handed to a
/// document exporter, plus a plain-text rendering.
///
/// Field order is part of the contract: country, generation timestamp, a
/// separator, the five metrics in [`MetricKind::ordered`] order, then the
/// composite index. The byte layout of any exported document is the
/// exporter's concern, not this module's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub title: String,
    pub lines: Vec<String>,
}

impl BoardSnapshot {
    pub fn for_entity(
        catalog: &Catalog,
        name: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, CatalogError> {
        let entity = catalog.entity(name)?;

        let mut lines = vec![
            format!("Country: {}", entity.country),
            format!("Generated: {}", generated_at.format("%B %d, %Y %H:%M UTC")),
            String::new(),
        ];
        for kind in MetricKind::ordered() {
            lines.push(format!("{}: {:.1}", kind.label(), entity.metrics.get(kind)));
        }
        lines.push(format!("Earth3_Index: {:.1}", entity.index));

        Ok(Self {
            title: format!("Earth 3.0 — Board Snapshot: {}", entity.name),
            lines,
        })
    }

    pub fn render_text(&self) -> String {
        let mut text = String::with_capacity(256);
        text.push_str(&self.title);
        text.push('\n');
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
