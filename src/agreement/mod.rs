//! Keyword-driven risk flags for collaboration agreement sections.

mod rules;
#[cfg(test)]
mod tests;

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::model::{RiskCategory, Severity};

use self::rules::{RULES, SectionText};

pub const MAX_SECTION_SCORE: u8 = 10;
pub const TOP_RISK_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRisk {
    pub category: RiskCategory,
    pub score: u8,
    pub severity: Severity,
    pub label: String,
    pub description: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sections: BTreeMap<String, Vec<SectionRisk>>,
    pub overall_risk_score: u32,
    pub top_risks: Vec<SectionRisk>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementDocument {
    #[serde(default)]
    pub title: Option<String>,
    pub sections: Vec<AgreementSection>,
}

/// Flags risky clauses in one section.
///
/// Matching is case-insensitive substring search over `title` and `content`;
/// findings come back in rule order (IP, financial, operational, legal). An
/// empty vector means nothing was flagged.
pub fn analyze_section_risk(section_id: &str, title: &str, content: &str) -> Vec<SectionRisk> {
    let text = SectionText::new(title, content);

    let risks = RULES
        .iter()
        .filter(|rule| (rule.applies)(&text))
        .inspect(|rule| trace!(section_id, rule = rule.id, "agreement rule matched"))
        .map(|rule| rule.finding.to_section_risk())
        .collect::<Vec<SectionRisk>>();

    debug!(section_id, risk_count = risks.len(), "analyzed agreement section");
    risks
}

/// Mean finding score rescaled to 0-100; 0 when nothing was flagged.
pub fn calculate_overall_risk(all_risks: &[SectionRisk]) -> u32 {
    if all_risks.is_empty() {
        return 0;
    }

    let total = all_risks
        .iter()
        .map(|risk| f64::from(risk.score))
        .sum::<f64>();
    let maximum = all_risks.len() as f64 * f64::from(MAX_SECTION_SCORE);

    (total / maximum * 100.0).min(100.0).round() as u32
}

pub fn analyze_document(document: &AgreementDocument) -> AnalysisResult {
    let mut sections = BTreeMap::<String, Vec<SectionRisk>>::new();
    let mut pooled = Vec::<SectionRisk>::new();

    for section in &document.sections {
        let risks = analyze_section_risk(&section.id, &section.title, &section.content);
        pooled.extend(risks.iter().cloned());
        sections
            .entry(section.id.clone())
            .or_default()
            .extend(risks);
    }

    let overall_risk_score = calculate_overall_risk(&pooled);
    let top_risks = select_top_risks(pooled, TOP_RISK_LIMIT);

    AnalysisResult {
        sections,
        overall_risk_score,
        top_risks,
    }
}

fn select_top_risks(mut risks: Vec<SectionRisk>, limit: usize) -> Vec<SectionRisk> {
    // stable: ties keep section order, then rule order
    risks.sort_by_key(|risk| Reverse(risk.score));
    risks.truncate(limit);
    risks
}
