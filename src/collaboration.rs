//! Composite risk score for an active collaboration.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Severity;

pub const BASE_SCORE: u32 = 20;
pub const MAX_SCORE: u32 = 100;

const BUDGET_GAP_THRESHOLD: f64 = 0.2;
const LOW_COMMUNICATION_PER_WEEK: f64 = 2.0;
const STAGNATION_DAYS: u32 = 45;

const BUDGET_OVERRUN_POINTS: u32 = 25;
const ENGAGEMENT_DECAY_POINTS: u32 = 20;
const TIMELINE_STAGNATION_POINTS: u32 = 15;
const FRICTION_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationMetrics {
    pub days_since_last_milestone: u32,
    /// Share of budget spent, 0.0-1.0.
    pub budget_utilization: f64,
    /// Share of milestones completed, 0.0-1.0.
    pub milestone_progress: f64,
    /// Messages per week.
    pub communication_frequency: f64,
    /// -1.0 (hostile) to 1.0 (positive).
    pub sentiment_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub label: String,
    /// Directional weight, -10 to +10.
    pub impact: i8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: Severity,
    pub factors: Vec<RiskFactor>,
    pub recommendation: String,
}

pub fn assess_collaboration_risk(metrics: &CollaborationMetrics) -> RiskAssessment {
    let mut score = BASE_SCORE;
    let mut factors = Vec::<RiskFactor>::new();

    if metrics.budget_utilization - metrics.milestone_progress > BUDGET_GAP_THRESHOLD {
        score += BUDGET_OVERRUN_POINTS;
        factors.push(RiskFactor {
            label: "Budget Overrun".to_string(),
            impact: 8,
            description: format!(
                "Budget utilization ({}%) is outpacing milestone progress ({}%).",
                whole_percent(metrics.budget_utilization),
                whole_percent(metrics.milestone_progress)
            ),
        });
    }

    if metrics.communication_frequency < LOW_COMMUNICATION_PER_WEEK {
        score += ENGAGEMENT_DECAY_POINTS;
        factors.push(RiskFactor {
            label: "Engagement Decay".to_string(),
            impact: 6,
            description: format!(
                "Communication has dropped to {:.1} messages per week.",
                metrics.communication_frequency
            ),
        });
    }

    if metrics.days_since_last_milestone > STAGNATION_DAYS {
        score += TIMELINE_STAGNATION_POINTS;
        factors.push(RiskFactor {
            label: "Timeline Stagnation".to_string(),
            impact: 5,
            description: format!(
                "No milestone has been completed in {} days.",
                metrics.days_since_last_milestone
            ),
        });
    }

    if metrics.sentiment_score < 0.0 {
        score += FRICTION_POINTS;
        factors.push(RiskFactor {
            label: "Interpersonal Friction".to_string(),
            impact: 4,
            description: format!(
                "Recent communication sentiment is negative ({:.2}).",
                metrics.sentiment_score
            ),
        });
    }

    let score = score.min(MAX_SCORE);
    let level = level_for_score(score);

    debug!(
        score,
        level = %level,
        factor_count = factors.len(),
        "assessed collaboration risk"
    );

    RiskAssessment {
        score,
        level,
        factors,
        recommendation: recommendation_for(level).to_string(),
    }
}

pub fn level_for_score(score: u32) -> Severity {
    match score {
        76.. => Severity::Critical,
        51..=75 => Severity::High,
        36..=50 => Severity::Medium,
        _ => Severity::Low,
    }
}

pub fn recommendation_for(level: Severity) -> &'static str {
    match level {
        Severity::Critical => {
            "Immediate intervention required: convene an escalation meeting with all partners and freeze discretionary spending until milestones are re-baselined."
        }
        Severity::High => {
            "Schedule a steering review this week to realign budget, timeline, and communication cadence."
        }
        Severity::Medium => {
            "Monitor closely: increase check-in frequency and confirm the next milestone date with the partner."
        }
        Severity::Low => "Collaboration is healthy. Maintain the current cadence.",
    }
}

fn whole_percent(ratio: f64) -> i64 {
    (ratio * 100.0).round() as i64
}
