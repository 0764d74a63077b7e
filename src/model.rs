use std::fmt;

use serde::{Deserialize, Serialize};

/// Tier shared by agreement findings and collaboration assessments.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Legal,
    Financial,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    Operational,
    Compliance,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legal => "Legal",
            Self::Financial => "Financial",
            Self::IntellectualProperty => "Intellectual Property",
            Self::Operational => "Operational",
            Self::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
