use std::sync::LazyLock;

use regex::Regex;

use super::SectionRisk;
use crate::model::{RiskCategory, Severity};

static UNCAPPED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\buncapped\b").expect("valid uncapped regex"));

/// Lowercased view of a section; all rule matching is case-insensitive.
pub(super) struct SectionText {
    title: String,
    content: String,
}

impl SectionText {
    pub(super) fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_lowercase(),
            content: content.to_lowercase(),
        }
    }

    fn title_has(&self, needle: &str) -> bool {
        self.title.contains(needle)
    }

    fn content_has(&self, needle: &str) -> bool {
        self.content.contains(needle)
    }

    fn content_has_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|needle| self.content_has(needle))
    }

    fn content_has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.content_has(needle))
    }
}

#[derive(Debug)]
pub(super) struct RiskFinding {
    pub(super) category: RiskCategory,
    pub(super) score: u8,
    pub(super) severity: Severity,
    pub(super) label: &'static str,
    pub(super) description: &'static str,
    pub(super) mitigation: &'static str,
}

impl RiskFinding {
    pub(super) fn to_section_risk(&self) -> SectionRisk {
        SectionRisk {
            category: self.category,
            score: self.score,
            severity: self.severity,
            label: self.label.to_string(),
            description: self.description.to_string(),
            mitigation: self.mitigation.to_string(),
        }
    }
}

pub(super) struct RiskRule {
    pub(super) id: &'static str,
    pub(super) applies: fn(&SectionText) -> bool,
    pub(super) finding: RiskFinding,
}

/// Evaluated in order; every matching rule contributes one finding.
pub(super) static RULES: [RiskRule; 6] = [
    RiskRule {
        id: "ip-ambiguous-definitions",
        applies: ambiguous_ip_definitions,
        finding: RiskFinding {
            category: RiskCategory::IntellectualProperty,
            score: 7,
            severity: Severity::High,
            label: "Ambiguous IP Definitions",
            description: "The section does not distinguish background IP brought into the collaboration from foreground IP created during it.",
            mitigation: "Define background IP and foreground IP explicitly and list pre-existing assets in a schedule.",
        },
    },
    RiskRule {
        id: "ip-aggressive-transfer",
        applies: aggressive_ip_transfer,
        finding: RiskFinding {
            category: RiskCategory::IntellectualProperty,
            score: 8,
            severity: Severity::High,
            label: "Aggressive IP Transfer",
            description: "Rights are granted on an irrevocable and exclusive basis, removing the institution's ability to use or relicense its own results.",
            mitigation: "Negotiate a non-exclusive license or retain academic publication and research-use rights.",
        },
    },
    RiskRule {
        id: "financial-extended-payment",
        applies: extended_payment_terms,
        finding: RiskFinding {
            category: RiskCategory::Financial,
            score: 5,
            severity: Severity::Medium,
            label: "Extended Payment Terms",
            description: "Payment is due only after 90 days, which delays funding for research staff and materials.",
            mitigation: "Request net 30 terms or milestone-based advance payments.",
        },
    },
    RiskRule {
        id: "financial-uncapped-liability",
        applies: uncapped_liability,
        finding: RiskFinding {
            category: RiskCategory::Financial,
            score: 9,
            severity: Severity::Critical,
            label: "Uncapped Liability",
            description: "Liability is not limited, exposing the institution to damages far beyond the value of the agreement.",
            mitigation: "Cap aggregate liability at the total fees paid under the agreement and exclude consequential damages.",
        },
    },
    RiskRule {
        id: "operational-intrusive-audit",
        applies: intrusive_audit,
        finding: RiskFinding {
            category: RiskCategory::Operational,
            score: 4,
            severity: Severity::Low,
            label: "Intrusive Audit Clause",
            description: "The partner may audit records at any time without notice, disrupting lab operations.",
            mitigation: "Limit audits to business hours with reasonable written notice and at most once per year.",
        },
    },
    RiskRule {
        id: "legal-asymmetric-termination",
        applies: asymmetric_termination,
        finding: RiskFinding {
            category: RiskCategory::Legal,
            score: 6,
            severity: Severity::Medium,
            label: "Asymmetric Termination",
            description: "The agreement can be terminated without cause, leaving ongoing research and student placements unprotected.",
            mitigation: "Require mutual termination rights, a notice period, and wind-down funding for committed work.",
        },
    },
];

fn is_ip_section(text: &SectionText) -> bool {
    text.title_has("intellectual property") || text.title_has("ip")
}

fn ambiguous_ip_definitions(text: &SectionText) -> bool {
    is_ip_section(text) && !text.content_has_all(&["background ip", "foreground ip"])
}

fn aggressive_ip_transfer(text: &SectionText) -> bool {
    is_ip_section(text) && text.content_has_all(&["irrevocable", "exclusive"])
}

fn is_financial_section(text: &SectionText) -> bool {
    text.content_has_any(&["payment", "fee", "budget"])
}

fn extended_payment_terms(text: &SectionText) -> bool {
    is_financial_section(text) && text.content_has_any(&["within 90 days", "net 90"])
}

fn uncapped_liability(text: &SectionText) -> bool {
    is_financial_section(text)
        && UNCAPPED_WORD.is_match(&text.content)
        && text.content_has("liability")
}

fn intrusive_audit(text: &SectionText) -> bool {
    text.content_has_all(&["audit", "any time"])
}

fn asymmetric_termination(text: &SectionText) -> bool {
    text.content_has_all(&["terminate", "without cause"])
}
