pub mod agreement;
pub mod collaboration;
pub mod pulse;
pub mod quantum;

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::cli::ReportArgs;
use crate::report::Report;
use crate::util::{print_json_pretty, write_json_pretty};

/// Writes `report` to `--output` and/or stdout.
///
/// The text summary is printed only when neither `--json` nor `--output` was
/// given, so piping JSON never mixes with prose.
fn emit_report<T, F>(args: &ReportArgs, report: &Report<T>, write_text: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    if let Some(path) = &args.output {
        write_json_pretty(path, report)?;
        info!(path = %path.display(), command = %report.command, "wrote report");
    }

    if args.json {
        print_json_pretty(report)?;
    } else if args.output.is_none() {
        let mut output = io::BufWriter::new(io::stdout().lock());
        write_text(&mut output)?;
        output.flush()?;
    }

    Ok(())
}
