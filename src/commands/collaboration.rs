use std::io::{self, Write};

use anyhow::{Result, bail};
use collabsync::collaboration::{CollaborationMetrics, RiskAssessment, assess_collaboration_risk};
use serde::Serialize;
use tracing::{info, warn};

use super::emit_report;
use crate::cli::CollaborationArgs;
use crate::report::{Report, ReportSource, SourceKind};
use crate::util::read_json_file;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationReport {
    pub metrics: CollaborationMetrics,
    pub assessment: RiskAssessment,
}

pub fn run(args: CollaborationArgs) -> Result<()> {
    let (metrics, source) = resolve_metrics(&args)?;
    warn_on_out_of_range(&metrics);

    let assessment = assess_collaboration_risk(&metrics);

    info!(
        score = assessment.score,
        level = %assessment.level,
        factors = assessment.factors.len(),
        "collaboration assessment complete"
    );

    let report = Report::new(
        "collaboration",
        source,
        CollaborationReport {
            metrics,
            assessment,
        },
    );

    emit_report(&args.report, &report, |output| {
        write_text_summary(output, &report.result.assessment)
    })
}

fn resolve_metrics(args: &CollaborationArgs) -> Result<(CollaborationMetrics, ReportSource)> {
    if let Some(path) = &args.input {
        let loaded = read_json_file::<CollaborationMetrics>(path)?;
        return Ok((loaded.value, ReportSource::file(path, loaded.sha256)));
    }

    match (
        args.days_since_last_milestone,
        args.budget_utilization,
        args.milestone_progress,
        args.communication_frequency,
        args.sentiment_score,
    ) {
        (
            Some(days_since_last_milestone),
            Some(budget_utilization),
            Some(milestone_progress),
            Some(communication_frequency),
            Some(sentiment_score),
        ) => Ok((
            CollaborationMetrics {
                days_since_last_milestone,
                budget_utilization,
                milestone_progress,
                communication_frequency,
                sentiment_score,
            },
            ReportSource::inline(SourceKind::Flags),
        )),
        _ => bail!(
            "collaboration metrics incomplete; pass --input or all of: {}",
            missing_flags(args).join(", ")
        ),
    }
}

fn missing_flags(args: &CollaborationArgs) -> Vec<&'static str> {
    [
        (
            "--days-since-last-milestone",
            args.days_since_last_milestone.is_none(),
        ),
        ("--budget-utilization", args.budget_utilization.is_none()),
        ("--milestone-progress", args.milestone_progress.is_none()),
        (
            "--communication-frequency",
            args.communication_frequency.is_none(),
        ),
        ("--sentiment-score", args.sentiment_score.is_none()),
    ]
    .into_iter()
    .filter_map(|(flag, missing)| missing.then_some(flag))
    .collect()
}

fn warn_on_out_of_range(metrics: &CollaborationMetrics) {
    let ratios = [
        ("budget_utilization", metrics.budget_utilization),
        ("milestone_progress", metrics.milestone_progress),
    ];
    for (field, value) in ratios {
        if !(0.0..=1.0).contains(&value) {
            warn!(field, value, "ratio outside 0.0-1.0");
        }
    }

    if metrics.communication_frequency < 0.0 {
        warn!(
            value = metrics.communication_frequency,
            "communication frequency is negative"
        );
    }

    if !(-1.0..=1.0).contains(&metrics.sentiment_score) {
        warn!(value = metrics.sentiment_score, "sentiment outside -1.0-1.0");
    }
}

fn write_text_summary(output: &mut dyn Write, assessment: &RiskAssessment) -> io::Result<()> {
    writeln!(
        output,
        "Collaboration risk: {}/100 ({})",
        assessment.score, assessment.level
    )?;

    for factor in &assessment.factors {
        writeln!(
            output,
            "  - {} [impact {:+}]: {}",
            factor.label, factor.impact, factor.description
        )?;
    }

    writeln!(output, "Recommendation: {}", assessment.recommendation)
}

#[cfg(test)]
mod tests {
    use collabsync::collaboration::assess_collaboration_risk;

    use super::*;
    use crate::cli::ReportArgs;

    fn flag_args() -> CollaborationArgs {
        CollaborationArgs {
            input: None,
            days_since_last_milestone: Some(50),
            budget_utilization: Some(0.8),
            milestone_progress: Some(0.5),
            communication_frequency: Some(1.0),
            sentiment_score: Some(-0.2),
            report: ReportArgs {
                output: None,
                json: false,
            },
        }
    }

    #[test]
    fn complete_flags_resolve_to_metrics() {
        let (metrics, source) = resolve_metrics(&flag_args()).expect("flags should resolve");
        assert_eq!(metrics.days_since_last_milestone, 50);
        assert_eq!(metrics.sentiment_score, -0.2);
        assert_eq!(source.kind, SourceKind::Flags);
    }

    #[test]
    fn incomplete_flags_name_what_is_missing() {
        let mut args = flag_args();
        args.budget_utilization = None;
        args.sentiment_score = None;

        let err = resolve_metrics(&args).expect_err("incomplete flags should fail");
        let message = err.to_string();
        assert!(message.contains("--budget-utilization"));
        assert!(message.contains("--sentiment-score"));
        assert!(!message.contains("--milestone-progress"));
    }

    #[test]
    fn text_summary_shows_signed_impacts_and_recommendation() {
        let (metrics, _) = resolve_metrics(&flag_args()).expect("flags should resolve");
        let assessment = assess_collaboration_risk(&metrics);

        let mut buffer = Vec::<u8>::new();
        write_text_summary(&mut buffer, &assessment).expect("summary should render");
        let text = String::from_utf8(buffer).expect("summary should be utf-8");

        assert!(text.starts_with("Collaboration risk: 90/100 (Critical)\n"));
        assert!(text.contains("  - Budget Overrun [impact +8]"));
        assert!(text.contains("Recommendation: Immediate intervention required"));
    }
}
