use super::*;

fn labels(risks: &[SectionRisk]) -> Vec<&str> {
    risks.iter().map(|risk| risk.label.as_str()).collect()
}

fn risk_with_score(score: u8) -> SectionRisk {
    SectionRisk {
        category: RiskCategory::Legal,
        score,
        severity: Severity::Medium,
        label: format!("score {score}"),
        description: String::new(),
        mitigation: String::new(),
    }
}

#[test]
fn ip_section_with_background_and_foreground_definitions_is_clean() {
    let risks = analyze_section_risk(
        "s1",
        "Intellectual Property Terms",
        "This covers background ip and foreground ip only.",
    );
    assert!(risks.is_empty());
}

#[test]
fn irrevocable_exclusive_license_flags_both_ip_rules() {
    let risks = analyze_section_risk("s1", "IP", "We require an irrevocable and exclusive license.");

    assert_eq!(
        labels(&risks),
        vec!["Ambiguous IP Definitions", "Aggressive IP Transfer"]
    );
    assert_eq!(risks[0].score, 7);
    assert_eq!(risks[0].severity, Severity::High);
    assert_eq!(risks[1].score, 8);
    assert_eq!(risks[1].category, RiskCategory::IntellectualProperty);
}

#[test]
fn matching_ignores_case() {
    let risks = analyze_section_risk(
        "s2",
        "Payment Schedule",
        "The Sponsor shall settle each FEE invoice WITHIN 90 DAYS of receipt.",
    );

    assert_eq!(labels(&risks), vec!["Extended Payment Terms"]);
    assert_eq!(risks[0].category, RiskCategory::Financial);
    assert_eq!(risks[0].severity, Severity::Medium);
}

#[test]
fn payment_terms_require_a_financial_keyword() {
    let risks = analyze_section_risk("s2", "Schedule", "Reports are due net 90 after kickoff.");
    assert!(risks.is_empty());
}

#[test]
fn uncapped_liability_is_critical() {
    let risks = analyze_section_risk(
        "s3",
        "Fees",
        "Partner fees are fixed, and the institution accepts uncapped liability for breaches.",
    );

    assert_eq!(labels(&risks), vec!["Uncapped Liability"]);
    assert_eq!(risks[0].score, 9);
    assert_eq!(risks[0].severity, Severity::Critical);
}

#[test]
fn uncapped_matches_as_a_whole_word_at_the_start_of_content() {
    let risks = analyze_section_risk(
        "s3",
        "Budget",
        "Uncapped liability applies to all budget overruns.",
    );
    assert_eq!(labels(&risks), vec!["Uncapped Liability"]);
}

#[test]
fn uncapped_does_not_match_inside_longer_words() {
    let risks = analyze_section_risk(
        "s3",
        "Budget",
        "The budget is nonuncapped and liability is shared.",
    );
    assert!(risks.is_empty());
}

#[test]
fn operational_and_legal_flags_follow_financial_ones() {
    let risks = analyze_section_risk(
        "s4",
        "General",
        "Sponsor may audit the lab at any time, may terminate without cause, and pays each fee net 90.",
    );

    assert_eq!(
        labels(&risks),
        vec![
            "Extended Payment Terms",
            "Intrusive Audit Clause",
            "Asymmetric Termination"
        ]
    );
    assert_eq!(risks[1].category, RiskCategory::Operational);
    assert_eq!(risks[1].severity, Severity::Low);
    assert_eq!(risks[2].category, RiskCategory::Legal);
}

#[test]
fn analysis_is_idempotent() {
    let first = analyze_section_risk("s1", "IP", "irrevocable exclusive grant");
    let second = analyze_section_risk("s1", "IP", "irrevocable exclusive grant");
    assert_eq!(first, second);
}

#[test]
fn overall_risk_is_zero_without_findings() {
    assert_eq!(calculate_overall_risk(&[]), 0);
}

#[test]
fn overall_risk_rescales_single_score() {
    for score in 0..=10 {
        assert_eq!(
            calculate_overall_risk(&[risk_with_score(score)]),
            u32::from(score) * 10
        );
    }
}

#[test]
fn overall_risk_averages_and_rounds() {
    let risks = vec![risk_with_score(7), risk_with_score(8), risk_with_score(4)];
    // 19 / 30 = 63.33%
    assert_eq!(calculate_overall_risk(&risks), 63);

    let risks = vec![risk_with_score(5), risk_with_score(6)];
    assert_eq!(calculate_overall_risk(&risks), 55);
}

#[test]
fn analyze_document_groups_by_section_and_ranks_top_risks() {
    let document = AgreementDocument {
        title: Some("Joint Research Agreement".to_string()),
        sections: vec![
            AgreementSection {
                id: "ip".to_string(),
                title: "Intellectual Property".to_string(),
                content: "An irrevocable, exclusive assignment of all results.".to_string(),
            },
            AgreementSection {
                id: "fin".to_string(),
                title: "Funding".to_string(),
                content: "Each fee is invoiced monthly. Uncapped liability applies.".to_string(),
            },
            AgreementSection {
                id: "misc".to_string(),
                title: "Miscellaneous".to_string(),
                content: "Notices shall be in writing.".to_string(),
            },
        ],
    };

    let result = analyze_document(&document);

    assert_eq!(result.sections.len(), 3);
    assert_eq!(result.sections["ip"].len(), 2);
    assert_eq!(result.sections["fin"].len(), 1);
    assert!(result.sections["misc"].is_empty());

    // (7 + 8 + 9) / 30
    assert_eq!(result.overall_risk_score, 80);
    assert_eq!(
        labels(&result.top_risks),
        vec![
            "Uncapped Liability",
            "Aggressive IP Transfer",
            "Ambiguous IP Definitions"
        ]
    );
}

#[test]
fn analyze_document_appends_repeated_section_ids() {
    let document = AgreementDocument {
        title: None,
        sections: vec![
            AgreementSection {
                id: "terms".to_string(),
                title: "Termination".to_string(),
                content: "Either party may terminate without cause.".to_string(),
            },
            AgreementSection {
                id: "terms".to_string(),
                title: "Audit".to_string(),
                content: "Records may be audited at any time.".to_string(),
            },
        ],
    };

    let result = analyze_document(&document);
    assert_eq!(
        labels(&result.sections["terms"]),
        vec!["Asymmetric Termination", "Intrusive Audit Clause"]
    );
}

#[test]
fn analysis_result_uses_camel_case_keys() {
    let result = analyze_document(&AgreementDocument {
        title: None,
        sections: Vec::new(),
    });

    let value = serde_json::to_value(&result).expect("result should serialize");
    assert_eq!(value["overallRiskScore"], 0);
    assert!(value["topRisks"].as_array().is_some_and(Vec::is_empty));
    assert!(value["sections"].as_object().is_some_and(|map| map.is_empty()));
}

#[test]
fn document_sections_default_missing_content() {
    let raw = r#"{ "sections": [ { "id": "a", "title": "Scope" } ] }"#;
    let document: AgreementDocument =
        serde_json::from_str(raw).expect("document should deserialize");

    assert!(document.title.is_none());
    assert_eq!(document.sections[0].content, "");
}
