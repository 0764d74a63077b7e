use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_TEAM_SIZE: u32 = 5;
pub const DEFAULT_FUNDING_ALLOCATED: f64 = 100_000.0;

/// Project attributes as stored; absent fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub funding_allocated: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProject {
    pub team_size: u32,
    pub funding_allocated: f64,
}

impl ProjectProfile {
    pub fn resolve(&self) -> ResolvedProject {
        ResolvedProject {
            team_size: self.team_size.unwrap_or(DEFAULT_TEAM_SIZE),
            funding_allocated: self.funding_allocated.unwrap_or(DEFAULT_FUNDING_ALLOCATED),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumMetrics {
    pub crypto_agility: f64,
    pub entanglement_factor: f64,
    pub innovation_velocity: f64,
    pub resource_resilience: f64,
    pub readiness_score: u32,
}

pub fn calculate_quantum_readiness(project: &ProjectProfile) -> QuantumMetrics {
    let ResolvedProject {
        team_size,
        funding_allocated,
    } = project.resolve();
    let team_size = f64::from(team_size);

    let crypto_agility = (40.0 + team_size * 2.0).min(100.0);
    let entanglement_factor = (0.3 + funding_allocated / 500_000.0).min(1.0);
    let innovation_velocity = (2.0 + team_size / 2.0).min(10.0);
    let resource_resilience = (60.0 + funding_allocated / 10_000.0).min(100.0);

    let readiness_score = (crypto_agility * 0.3
        + entanglement_factor * 100.0 * 0.3
        + innovation_velocity * 10.0 * 0.2
        + resource_resilience * 0.2)
        .round()
        .max(0.0) as u32;

    debug!(
        team_size,
        funding_allocated, readiness_score, "calculated quantum readiness"
    );

    QuantumMetrics {
        crypto_agility,
        entanglement_factor,
        innovation_velocity,
        resource_resilience,
        readiness_score,
    }
}
