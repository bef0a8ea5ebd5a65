use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of a formatting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Version of the report format
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of files processed
    pub files_processed: usize,

    /// Number of files whose content changed (or would change in check mode)
    pub files_changed: usize,

    /// Number of tags rewritten across all files
    pub tags_formatted: usize,

    /// Whether files were left untouched (check or dry-run)
    pub check_only: bool,

    /// Formatter version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter_version: Option<String>,
}

/// Per-file outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Tags with a class attribute found in the file
    pub tags_scanned: usize,

    /// Tags that were rewritten
    pub tags_formatted: usize,

    /// Whether the file content changed
    pub changed: bool,
}

/// Statistics about the run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatistics {
    /// Total bytes read
    pub bytes_processed: u64,

    /// Processing time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Files with the most rewritten tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_files: Option<Vec<BusyFile>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusyFile {
    pub path: String,
    pub tags_formatted: usize,
}

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatReport {
    pub metadata: ReportMetadata,

    /// Outcome per file path, in processing order
    pub files: IndexMap<String, FileReport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ReportStatistics>,
}

impl FormatReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self {
            metadata: ReportMetadata {
                version: "1.0.0".to_string(),
                generated_at: Utc::now(),
                files_processed: 0,
                files_changed: 0,
                tags_formatted: 0,
                check_only: false,
                formatter_version: Some(env!("CARGO_PKG_VERSION").to_string()),
            },
            files: IndexMap::new(),
            statistics: None,
        }
    }

    /// Record the outcome of one file
    pub fn add_file(&mut self, path: String, file: FileReport) {
        self.files.insert(path, file);
        self.update_counts();
    }

    fn update_counts(&mut self) {
        self.metadata.files_processed = self.files.len();
        self.metadata.files_changed = self.files.values().filter(|f| f.changed).count();
        self.metadata.tags_formatted = self.files.values().map(|f| f.tags_formatted).sum();
    }

    /// Files with the most rewritten tags, most first, ties in processing order
    pub fn busiest_files(&self, limit: usize) -> Vec<BusyFile> {
        let mut files: Vec<BusyFile> = self
            .files
            .iter()
            .filter(|(_, f)| f.tags_formatted > 0)
            .map(|(path, f)| BusyFile {
                path: path.clone(),
                tags_formatted: f.tags_formatted,
            })
            .collect();

        files.sort_by(|a, b| b.tags_formatted.cmp(&a.tags_formatted));
        files.truncate(limit);
        files
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Default for FormatReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for run reports
pub struct ReportBuilder {
    report: FormatReport,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: FormatReport::new(),
        }
    }

    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.report.metadata.check_only = check_only;
        self
    }

    pub fn with_files(mut self, files: IndexMap<String, FileReport>) -> Self {
        for (path, file) in files {
            self.report.files.insert(path, file);
        }
        self.report.update_counts();
        self
    }

    pub fn build(mut self, bytes_processed: u64, processing_time_ms: Option<u64>) -> FormatReport {
        let busiest = self.report.busiest_files(10);
        self.report.statistics = Some(ReportStatistics {
            bytes_processed,
            processing_time_ms,
            busiest_files: if busiest.is_empty() { None } else { Some(busiest) },
        });
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
