use serde::{Deserialize, Serialize};

use super::scoring;

/// The five readiness dimensions tracked per organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Finance,
    AiGovernance,
    Climate,
    Equity,
    Sustainability,
}

impl MetricKind {
    pub const fn ordered() -> [MetricKind; 5] {
        [
            MetricKind::Finance,
            MetricKind::AiGovernance,
            MetricKind::Climate,
            MetricKind::Equity,
            MetricKind::Sustainability,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            MetricKind::Finance => "Finance",
            MetricKind::AiGovernance => "AI Governance",
            MetricKind::Climate => "Climate",
            MetricKind::Equity => "Equity",
            MetricKind::Sustainability => "Sustainability",
        }
    }
}

/// Raw metric values for one organization.
///
/// Exactly five values must be present; a record missing one cannot be
/// deserialized, so an incomplete entity never silently averages a default.
/// Values outside [0, 100] are accepted and propagated as-is (documented
/// leniency for demo-grade upstream data); non-finite values are rejected
/// at catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub finance: f64,
    pub ai_governance: f64,
    pub climate: f64,
    pub equity: f64,
    pub sustainability: f64,
}

impl MetricScores {
    pub const fn new(
        finance: f64,
        ai_governance: f64,
        climate: f64,
        equity: f64,
        sustainability: f64,
    ) -> Self {
        Self {
            finance,
            ai_governance,
            climate,
            equity,
            sustainability,
        }
    }

    pub const fn get(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Finance => self.finance,
            MetricKind::AiGovernance => self.ai_governance,
            MetricKind::Climate => self.climate,
            MetricKind::Equity => self.equity,
            MetricKind::Sustainability => self.sustainability,
        }
    }

    pub const fn values(&self) -> [f64; 5] {
        [
            self.finance,
            self.ai_governance,
            self.climate,
            self.equity,
            self.sustainability,
        ]
    }

    fn ensure_finite(&self, entity: &str) -> Result<(), CatalogError> {
        for kind in MetricKind::ordered() {
            if !self.get(kind).is_finite() {
                return Err(CatalogError::MalformedMetric {
                    entity: entity.to_string(),
                    metric: kind.label(),
                });
            }
        }
        Ok(())
    }
}

/// Latitude/longitude pair used only for hotspot-map display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    fn ensure_in_range(&self, entity: &str) -> Result<(), CatalogError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(CatalogError::InvalidCoordinates {
                entity: entity.to_string(),
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

/// One monitored organization with its derived composite index.
///
/// The index is computed once at construction and never mutates afterwards,
/// matching the catalog's load-once lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    pub country: String,
    pub location: Location,
    pub metrics: MetricScores,
    pub index: f64,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        location: Location,
        metrics: MetricScores,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        metrics.ensure_finite(&name)?;
        location.ensure_in_range(&name)?;

        let index = scoring::compute_index(&metrics);
        Ok(Self {
            name,
            country: country.into(),
            location,
            metrics,
            index,
        })
    }

    pub fn status(&self) -> scoring::Status {
        scoring::Status::classify(self.index)
    }
}

/// The fixed, ordered set of monitored organizations.
///
/// Built once at process start; insertion order is display order. The
/// catalog is immutable after load, so services can share it read-only
/// without locking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, CatalogError> {
        for (position, entity) in entities.iter().enumerate() {
            if entities[..position]
                .iter()
                .any(|earlier| earlier.name == entity.name)
            {
                return Err(CatalogError::DuplicateName(entity.name.clone()));
            }
        }
        Ok(Self { entities })
    }

    /// The six fictitious organizations shipped with the demo.
    pub fn demo() -> Self {
        let rows = [
            (
                "Unilever PLC",
                "United Kingdom",
                Location::new(51.5074, -0.1278),
                MetricScores::new(78.0, 85.0, 62.0, 71.0, 77.0),
            ),
            (
                "ACME Motors",
                "USA",
                Location::new(38.9072, -77.0369),
                MetricScores::new(72.0, 65.0, 58.0, 68.0, 60.0),
            ),
            (
                "Nippon Auto",
                "Japan",
                Location::new(35.6762, 139.6503),
                MetricScores::new(82.0, 88.0, 74.0, 79.0, 85.0),
            ),
            (
                "GreenEnergy Ltd",
                "India",
                Location::new(28.6139, 77.2090),
                MetricScores::new(65.0, 59.0, 50.0, 62.0, 55.0),
            ),
            (
                "Continental Foods",
                "Germany",
                Location::new(52.5200, 13.4050),
                MetricScores::new(83.0, 80.0, 78.0, 75.0, 82.0),
            ),
            (
                "GlobalBank",
                "USA",
                Location::new(40.7128, -74.0060),
                MetricScores::new(75.0, 55.0, 68.0, 66.0, 70.0),
            ),
        ];

        let entities = rows
            .into_iter()
            .map(|(name, country, location, metrics)| {
                Entity::new(name, country, location, metrics).expect("demo entity is well-formed")
            })
            .collect();

        Self::from_entities(entities).expect("demo catalog has unique names")
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entities.iter().map(|entity| entity.name.as_str()).collect()
    }

    /// Look up an entity by its exact name. Unknown names are a lookup
    /// error, never a silent fallback to another record.
    pub fn entity(&self, name: &str) -> Result<&Entity, CatalogError> {
        self.entities
            .iter()
            .find(|entity| entity.name == name)
            .ok_or_else(|| CatalogError::UnknownEntity(name.to_string()))
    }
}

/// Validation and lookup errors raised while loading or reading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("entity name must not be empty")]
    EmptyName,
    #[error("duplicate entity name '{0}' in catalog")]
    DuplicateName(String),
    #[error("metric '{metric}' for entity '{entity}' is not a finite number")]
    MalformedMetric { entity: String, metric: &'static str },
    #[error("coordinates ({lat}, {lon}) for entity '{entity}' are out of geographic range")]
    InvalidCoordinates { entity: String, lat: f64, lon: f64 },
    #[error("unknown entity '{0}'")]
    UnknownEntity(String),
}
