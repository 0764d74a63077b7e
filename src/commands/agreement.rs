use std::io::{self, Write};

use anyhow::Result;
use collabsync::agreement::{AgreementDocument, AnalysisResult, SectionRisk, analyze_document};
use serde::Serialize;
use tracing::{info, warn};

use super::emit_report;
use crate::cli::AgreementArgs;
use crate::report::{Report, ReportSource};
use crate::util::read_json_file;

#[derive(Debug, Clone, Serialize)]
pub struct AgreementReport {
    pub title: Option<String>,
    pub section_count: usize,
    pub analysis: AnalysisResult,
}

pub fn run(args: AgreementArgs) -> Result<()> {
    let loaded = read_json_file::<AgreementDocument>(&args.input)?;
    let document = loaded.value;

    if document.sections.is_empty() {
        warn!(path = %args.input.display(), "agreement has no sections");
    }

    let analysis = analyze_document(&document);
    let flagged_sections = analysis
        .sections
        .values()
        .filter(|risks| !risks.is_empty())
        .count();

    info!(
        path = %args.input.display(),
        sections = document.sections.len(),
        flagged_sections,
        overall_risk_score = analysis.overall_risk_score,
        "agreement analysis complete"
    );

    let report = Report::new(
        "agreement",
        ReportSource::file(&args.input, loaded.sha256),
        AgreementReport {
            title: document.title,
            section_count: document.sections.len(),
            analysis,
        },
    );

    emit_report(&args.report, &report, |output| {
        write_text_summary(output, &report.result)
    })
}

fn write_text_summary(output: &mut dyn Write, report: &AgreementReport) -> io::Result<()> {
    writeln!(
        output,
        "Agreement: {}",
        report.title.as_deref().unwrap_or("(untitled)")
    )?;
    writeln!(
        output,
        "Sections: {} | Overall risk: {}/100",
        report.section_count, report.analysis.overall_risk_score
    )?;

    for (section_id, risks) in &report.analysis.sections {
        if risks.is_empty() {
            writeln!(output, "\n[{section_id}] no risks found")?;
            continue;
        }

        writeln!(output, "\n[{section_id}]")?;
        for risk in risks {
            write_risk_line(output, risk)?;
        }
    }

    if !report.analysis.top_risks.is_empty() {
        writeln!(output, "\nTop risks:")?;
        for risk in &report.analysis.top_risks {
            write_risk_line(output, risk)?;
        }
    }

    Ok(())
}

fn write_risk_line(output: &mut dyn Write, risk: &SectionRisk) -> io::Result<()> {
    writeln!(
        output,
        "  - {} ({}, {}, score {}): {}",
        risk.label, risk.category, risk.severity, risk.score, risk.mitigation
    )
}
