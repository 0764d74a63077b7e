use std::io::{self, Write};

use anyhow::Result;
use collabsync::quantum::{ProjectProfile, QuantumMetrics, calculate_quantum_readiness};
use serde::Serialize;
use tracing::info;

use super::emit_report;
use crate::cli::QuantumArgs;
use crate::report::{Report, ReportSource, SourceKind};
use crate::util::read_json_file;

#[derive(Debug, Clone, Serialize)]
pub struct QuantumReport {
    pub team_size: u32,
    pub funding_allocated: f64,
    pub metrics: QuantumMetrics,
}

pub fn run(args: QuantumArgs) -> Result<()> {
    let (profile, source) = resolve_profile(&args)?;
    let resolved = profile.resolve();
    let metrics = calculate_quantum_readiness(&profile);

    info!(
        team_size = resolved.team_size,
        funding_allocated = resolved.funding_allocated,
        readiness_score = metrics.readiness_score,
        "quantum readiness complete"
    );

    let report = Report::new(
        "quantum",
        source,
        QuantumReport {
            team_size: resolved.team_size,
            funding_allocated: resolved.funding_allocated,
            metrics,
        },
    );

    emit_report(&args.report, &report, |output| {
        write_text_summary(output, &report.result)
    })
}

/// File values first, then flags on top; anything still missing defaults later.
fn resolve_profile(args: &QuantumArgs) -> Result<(ProjectProfile, ReportSource)> {
    let has_overrides = args.team_size.is_some() || args.funding_allocated.is_some();

    let (base, source) = match &args.input {
        Some(path) => {
            let loaded = read_json_file::<ProjectProfile>(path)?;
            let source = ReportSource::file(path, loaded.sha256);
            let source = if has_overrides {
                source.with_kind(SourceKind::FileWithOverrides)
            } else {
                source
            };
            (loaded.value, source)
        }
        None if has_overrides => (
            ProjectProfile::default(),
            ReportSource::inline(SourceKind::Flags),
        ),
        None => (
            ProjectProfile::default(),
            ReportSource::inline(SourceKind::Defaults),
        ),
    };

    let profile = ProjectProfile {
        team_size: args.team_size.or(base.team_size),
        funding_allocated: args.funding_allocated.or(base.funding_allocated),
    };

    Ok((profile, source))
}

fn write_text_summary(output: &mut dyn Write, report: &QuantumReport) -> io::Result<()> {
    let metrics = &report.metrics;
    writeln!(
        output,
        "Project: team of {}, funding {:.0}",
        report.team_size, report.funding_allocated
    )?;
    writeln!(output, "  Crypto agility:      {:.1}", metrics.crypto_agility)?;
    writeln!(output, "  Entanglement factor: {:.2}", metrics.entanglement_factor)?;
    writeln!(output, "  Innovation velocity: {:.1}", metrics.innovation_velocity)?;
    writeln!(output, "  Resource resilience: {:.1}", metrics.resource_resilience)?;
    writeln!(output, "Readiness score: {}/100", metrics.readiness_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ReportArgs;

    fn args(team_size: Option<u32>, funding_allocated: Option<f64>) -> QuantumArgs {
        QuantumArgs {
            input: None,
            team_size,
            funding_allocated,
            report: ReportArgs {
                output: None,
                json: false,
            },
        }
    }

    #[test]
    fn no_input_and_no_flags_uses_defaults() {
        let (profile, source) = resolve_profile(&args(None, None)).expect("profile resolves");
        assert_eq!(profile, ProjectProfile::default());
        assert_eq!(source.kind, SourceKind::Defaults);
    }

    #[test]
    fn flags_fill_only_the_fields_given() {
        let (profile, source) =
            resolve_profile(&args(Some(9), None)).expect("profile resolves");
        assert_eq!(profile.team_size, Some(9));
        assert!(profile.funding_allocated.is_none());
        assert_eq!(source.kind, SourceKind::Flags);
    }

    #[test]
    fn text_summary_reports_readiness() {
        let profile = ProjectProfile::default();
        let resolved = profile.resolve();
        let report = QuantumReport {
            team_size: resolved.team_size,
            funding_allocated: resolved.funding_allocated,
            metrics: calculate_quantum_readiness(&profile),
        };

        let mut buffer = Vec::<u8>::new();
        write_text_summary(&mut buffer, &report).expect("summary should render");
        let text = String::from_utf8(buffer).expect("summary should be utf-8");

        assert!(text.starts_with("Project: team of 5, funding 100000\n"));
        assert!(text.contains("  Entanglement factor: 0.50"));
        assert!(text.ends_with("Readiness score: 53/100\n"));
    }
}
