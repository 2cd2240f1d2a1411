use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, Entity, MetricKind};

/// The three executive alert rules, checked per entity in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    LowOverallReadiness,
    AiGovernanceWeak,
    ClimateResilienceLow,
}

impl AlertRule {
    pub const fn ordered() -> [AlertRule; 3] {
        [
            AlertRule::LowOverallReadiness,
            AlertRule::AiGovernanceWeak,
            AlertRule::ClimateResilienceLow,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            AlertRule::LowOverallReadiness => "Low overall readiness",
            AlertRule::AiGovernanceWeak => "AI governance weak",
            AlertRule::ClimateResilienceLow => "Climate resilience low",
        }
    }
}

/// Alert thresholds. The readiness floor coincides with the critical-status
/// ceiling by tuning, not by definition; the metric floors are independent
/// alerting knobs and must not be conflated with the status bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    pub readiness_floor: f64,
    pub ai_governance_floor: f64,
    pub climate_floor: f64,
}

impl AlertConfig {
    pub fn standard() -> Self {
        Self {
            readiness_floor: 65.0,
            ai_governance_floor: 60.0,
            climate_floor: 60.0,
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// One finding: entity, which rule fired, and the observed value text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub entity: String,
    pub rule: AlertRule,
    pub detail: String,
}

/// Stateless evaluator applying the alert rule set to a catalog.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    config: AlertConfig,
}

impl AlertEngine {
    pub fn new(config: AlertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlertConfig {
        &self.config
    }

    /// Evaluate every rule against every entity: catalog order outer, rule
    /// order inner. Rules are independent, so one entity can contribute up
    /// to three findings. No deduplication, no severity sort.
    pub fn evaluate(&self, catalog: &Catalog) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for entity in catalog.entities() {
            self.evaluate_entity(entity, &mut alerts);
        }
        alerts
    }

    fn evaluate_entity(&self, entity: &Entity, alerts: &mut Vec<Alert>) {
        if entity.index < self.config.readiness_floor {
            alerts.push(Alert {
                entity: entity.name.clone(),
                rule: AlertRule::LowOverallReadiness,
                detail: format!("Index {:.1}", entity.index),
            });
        }

        let ai_governance = entity.metrics.get(MetricKind::AiGovernance);
        if ai_governance < self.config.ai_governance_floor {
            alerts.push(Alert {
                entity: entity.name.clone(),
                rule: AlertRule::AiGovernanceWeak,
                detail: format!("AI Gov {:.1}", ai_governance),
            });
        }

        let climate = entity.metrics.get(MetricKind::Climate);
        if climate < self.config.climate_floor {
            alerts.push(Alert {
                entity: entity.name.clone(),
                rule: AlertRule::ClimateResilienceLow,
                detail: format!("Climate {:.1}", climate),
            });
        }
    }

    pub fn digest(&self, catalog: &Catalog) -> AlertDigest {
        AlertDigest::from_alerts(self.evaluate(catalog))
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new(AlertConfig::standard())
    }
}

/// Alert list with the empty state made explicit, so callers can render
/// "all clear" as a distinct affordance rather than a blank panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDigest {
    pub all_clear: bool,
    pub alerts: Vec<Alert>,
}

impl AlertDigest {
    pub const ALL_CLEAR_MESSAGE: &'static str =
        "No critical alerts detected across monitored entities.";

    pub fn from_alerts(alerts: Vec<Alert>) -> Self {
        Self {
            all_clear: alerts.is_empty(),
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::catalog::{Catalog, Entity, Location, MetricScores};

    fn entity(name: &str, metrics: MetricScores) -> Entity {
        Entity::new(name, "Testland", Location::new(0.0, 0.0), metrics)
            .expect("test entity is well-formed")
    }

    fn catalog_of(entities: Vec<Entity>) -> Catalog {
        Catalog::from_entities(entities).expect("unique test names")
    }

    #[test]
    fn all_three_rules_fire_independently() {
        // index 55.0, AI Governance 55, Climate 55: every rule trips.
        let catalog = catalog_of(vec![entity(
            "Risky Corp",
            MetricScores::new(55.0, 55.0, 55.0, 55.0, 55.0),
        )]);
        let alerts = AlertEngine::default().evaluate(&catalog);
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].rule, AlertRule::LowOverallReadiness);
        assert_eq!(alerts[1].rule, AlertRule::AiGovernanceWeak);
        assert_eq!(alerts[2].rule, AlertRule::ClimateResilienceLow);
        assert_eq!(alerts[0].detail, "Index 55.0");
        assert_eq!(alerts[1].detail, "AI Gov 55.0");
        assert_eq!(alerts[2].detail, "Climate 55.0");
    }

    #[test]
    fn healthy_entity_emits_no_alerts() {
        let catalog = catalog_of(vec![entity(
            "Steady Corp",
            MetricScores::new(80.0, 80.0, 80.0, 80.0, 80.0),
        )]);
        let digest = AlertEngine::default().digest(&catalog);
        assert!(digest.all_clear);
        assert!(digest.alerts.is_empty());
    }

    #[test]
    fn emission_order_is_catalog_then_rule() {
        let catalog = catalog_of(vec![
            // AI Governance below floor only.
            entity("First Corp", MetricScores::new(90.0, 55.0, 90.0, 90.0, 90.0)),
            // Index and Climate below their floors.
            entity("Second Corp", MetricScores::new(60.0, 70.0, 50.0, 60.0, 60.0)),
        ]);
        let alerts = AlertEngine::default().evaluate(&catalog);
        let emitted: Vec<(&str, AlertRule)> = alerts
            .iter()
            .map(|alert| (alert.entity.as_str(), alert.rule))
            .collect();
        assert_eq!(
            emitted,
            vec![
                ("First Corp", AlertRule::AiGovernanceWeak),
                ("Second Corp", AlertRule::LowOverallReadiness),
                ("Second Corp", AlertRule::ClimateResilienceLow),
            ]
        );
    }

    #[test]
    fn demo_catalog_produces_six_alerts() {
        let alerts = AlertEngine::default().evaluate(&Catalog::demo());
        let emitted: Vec<(&str, AlertRule)> = alerts
            .iter()
            .map(|alert| (alert.entity.as_str(), alert.rule))
            .collect();
        assert_eq!(
            emitted,
            vec![
                ("ACME Motors", AlertRule::LowOverallReadiness),
                ("ACME Motors", AlertRule::ClimateResilienceLow),
                ("GreenEnergy Ltd", AlertRule::LowOverallReadiness),
                ("GreenEnergy Ltd", AlertRule::AiGovernanceWeak),
                ("GreenEnergy Ltd", AlertRule::ClimateResilienceLow),
                ("GlobalBank", AlertRule::AiGovernanceWeak),
            ]
        );
    }

    #[test]
    fn boundary_values_do_not_trip_strict_thresholds() {
        // Index exactly 65 and metrics exactly 60 sit on the closed side of
        // their comparisons and stay quiet.
        let catalog = catalog_of(vec![entity(
            "Edge Corp",
            MetricScores::new(75.0, 60.0, 60.0, 65.0, 65.0),
        )]);
        let digest = AlertEngine::default().digest(&catalog);
        assert_eq!(catalog.entities()[0].index, 65.0);
        assert!(digest.all_clear);
    }
}
