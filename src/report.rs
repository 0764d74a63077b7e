use std::path::Path;

use serde::Serialize;

use crate::util::now_utc_string;

pub const REPORT_VERSION: u32 = 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    File,
    Flags,
    FileWithOverrides,
    Defaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSource {
    pub kind: SourceKind,
    pub path: Option<String>,
    pub sha256: Option<String>,
}

impl ReportSource {
    pub fn file(path: &Path, sha256: String) -> Self {
        Self {
            kind: SourceKind::File,
            path: Some(path.display().to_string()),
            sha256: Some(sha256),
        }
    }

    pub fn inline(kind: SourceKind) -> Self {
        Self {
            kind,
            path: None,
            sha256: None,
        }
    }

    pub fn with_kind(mut self, kind: SourceKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    pub report_version: u32,
    pub generated_at: String,
    pub command: String,
    pub source: ReportSource,
    pub result: T,
}

impl<T: Serialize> Report<T> {
    pub fn new(command: &str, source: ReportSource, result: T) -> Self {
        Self {
            report_version: REPORT_VERSION,
            generated_at: now_utc_string(),
            command: command.to_string(),
            source,
            result,
        }
    }
}
