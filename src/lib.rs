pub mod args;
pub mod classifier;
pub mod config;
pub mod document;
pub mod errors;
pub mod grouper;
pub mod packer;
pub mod report;
pub mod tag_scanner;
pub mod variant;

pub use args::{Cli, Commands, FormatArgs, LayoutArgs, PackArgs, PipeArgs};
pub use classifier::{classify, Category, EMIT_ORDER, MATCH_ORDER};
pub use config::{FormatterConfig, LayoutOverrides};
pub use document::{apply_edits, format_document, format_text, FormattedDocument, TextEdit};
pub use errors::{FormatterError, Result};
pub use grouper::{group_responsive, ResponsiveCluster};
pub use packer::{format_class_list, pack, pack_lines, LayoutOptions, WrapIndentStyle};
pub use report::{FileReport, FormatReport, ReportBuilder};
pub use variant::{breakpoint_of, breakpoint_rank, class_property, split_classes, strip_variants, Breakpoint};

#[cfg(feature = "cli")]
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
use indicatif::{ProgressBar, ProgressStyle};

/// Security configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Maximum file size in bytes (default: 10MB)
    pub max_file_size: u64,
    /// Allow symbolic links
    pub allow_symlinks: bool,
    /// Working directory for path traversal checks
    pub working_directory: PathBuf,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
            allow_symlinks: false,
            working_directory: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}

/// Performance statistics
#[derive(Debug, Clone)]
pub struct PerformanceStats {
    pub total_duration: Duration,
    pub formatting_duration: Duration,
    pub files_per_second: f64,
    pub bytes_processed: u64,
}

/// Result of a formatting run
#[derive(Debug)]
pub struct FormatRunResult {
    pub report: FormatReport,
    pub total_files_processed: usize,
    pub files_changed: usize,
    pub tags_formatted: usize,
    pub performance_stats: Option<PerformanceStats>,
}

impl FormatRunResult {
    /// Paths of files that changed (or would change in check mode)
    pub fn changed_files(&self) -> Vec<&str> {
        self.report
            .files
            .iter()
            .filter(|(_, f)| f.changed)
            .map(|(path, _)| path.as_str())
            .collect()
    }
}

/// Load the configuration file if given and apply command line overrides
pub fn load_config(path: Option<&Path>, overrides: &LayoutOverrides) -> Result<FormatterConfig> {
    let config = match path {
        Some(path) => FormatterConfig::from_file(path)?,
        None => FormatterConfig::default(),
    };
    Ok(config.with_overrides(overrides))
}

/// Format every file matched by the input patterns
#[cfg(feature = "cli")]
pub async fn format_files(args: FormatArgs) -> Result<FormatRunResult> {
    let start_time = Instant::now();

    args.validate().map_err(FormatterError::InvalidInput)?;

    let config = load_config(args.config.as_deref(), &args.layout.overrides())?;
    let security = SecurityConfig::default();

    if let Some(report_path) = &args.report {
        validate_output_path(report_path)?;
    }

    let patterns = if args.input.is_empty() {
        config.include.clone()
    } else {
        args.input.clone()
    };
    let mut exclude = config.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    tracing::info!(
        max_line_width = config.max_line_width,
        wrap_indent = %config.wrap_indent_style,
        close_quote_on_new_line = config.close_quote_on_new_line,
        "starting Tailwind class formatting"
    );
    tracing::debug!(?patterns, ?exclude, "collecting files");

    let files = collect_files_with_security(&patterns, &exclude, &security)?;
    if files.is_empty() {
        return Err(FormatterError::NoFilesFound);
    }

    let bytes_processed: u64 = files.iter().map(|f| f.1).sum();
    tracing::info!(
        files = files.len(),
        bytes = bytes_processed,
        "found files to format"
    );

    let progress_bar = if !args.verbose {
        let pb = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({msg})")
        {
            pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
        }
        pb.set_message("Formatting...");
        Some(pb)
    } else {
        None
    };

    let formatting_start = Instant::now();
    let file_paths: Vec<PathBuf> = files.iter().map(|(path, _)| path.clone()).collect();
    let outcomes = format_files_parallel(
        &file_paths,
        &config,
        !args.is_read_only(),
        args.jobs,
        progress_bar.as_ref(),
    )?;
    let formatting_duration = formatting_start.elapsed();

    let mut file_reports = IndexMap::new();
    for (path, outcome) in file_paths.iter().zip(outcomes) {
        file_reports.insert(path.display().to_string(), outcome);
    }

    let total_duration = start_time.elapsed();
    let stats = PerformanceStats {
        total_duration,
        formatting_duration,
        files_per_second: files.len() as f64 / total_duration.as_secs_f64().max(f64::EPSILON),
        bytes_processed,
    };

    let report = ReportBuilder::new()
        .with_check_only(args.is_read_only())
        .with_files(file_reports)
        .build(bytes_processed, Some(total_duration.as_millis() as u64));

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("✓ Complete ({:.1} files/sec)", stats.files_per_second));
    }

    if let Some(report_path) = &args.report {
        write_report(report_path, &report)?;
    }

    tracing::info!(
        files = report.metadata.files_processed,
        changed = report.metadata.files_changed,
        tags = report.metadata.tags_formatted,
        elapsed_ms = total_duration.as_millis() as u64,
        "formatting complete"
    );

    Ok(FormatRunResult {
        total_files_processed: report.metadata.files_processed,
        files_changed: report.metadata.files_changed,
        tags_formatted: report.metadata.tags_formatted,
        report,
        performance_stats: Some(stats),
    })
}

/// Validate that a path is safe (no path traversal)
#[cfg(feature = "cli")]
fn validate_output_path(path: &Path) -> Result<()> {
    let escapes = path.is_relative()
        && path.components().any(|c| matches!(c, std::path::Component::ParentDir));

    if escapes {
        return Err(FormatterError::SecurityError(
            format!("Output path '{}' appears to use path traversal", path.display())
        ));
    }

    Ok(())
}

/// Check if a file is safe to read
fn validate_input_file(path: &Path, security: &SecurityConfig) -> Result<()> {
    if !security.allow_symlinks && path.is_symlink() {
        return Err(FormatterError::SecurityError(
            format!("Symbolic link not allowed: {}", path.display())
        ));
    }

    if security.allow_symlinks && path.is_symlink() {
        let target = fs::read_link(path).map_err(|e| FormatterError::SecurityError(
            format!("Cannot read symlink target for '{}': {}", path.display(), e)
        ))?;

        let canonical_target = target.canonicalize().unwrap_or_else(|_| target.clone());
        let working_dir = security.working_directory.canonicalize()
            .unwrap_or_else(|_| security.working_directory.clone());

        if !canonical_target.starts_with(&working_dir) {
            return Err(FormatterError::SecurityError(
                format!("Symlink target '{}' is outside working directory", target.display())
            ));
        }
    }

    let metadata = fs::metadata(path).map_err(|e| FormatterError::SecurityError(
        format!("Cannot read file metadata for '{}': {}", path.display(), e)
    ))?;

    if metadata.len() > security.max_file_size {
        return Err(FormatterError::SecurityError(
            format!("File '{}' exceeds maximum size limit ({} MB > {} MB)",
                    path.display(),
                    metadata.len() / (1024 * 1024),
                    security.max_file_size / (1024 * 1024))
        ));
    }

    Ok(())
}

/// Collect files matching the given patterns with security checks
pub fn collect_files_with_security(
    patterns: &[String],
    exclude_patterns: &[String],
    security: &SecurityConfig,
) -> Result<Vec<(PathBuf, u64)>> {
    let exclude = exclude_patterns
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut files = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut skipped_count = 0;

    for pattern in patterns {
        for entry in glob::glob(pattern)? {
            let path = entry?;

            if exclude.iter().any(|p| p.matches_path(&path)) {
                continue;
            }

            if path.is_dir() {
                continue;
            }

            if let Err(e) = validate_input_file(&path, security) {
                tracing::warn!("Skipping file - {}", e);
                skipped_count += 1;
                continue;
            }

            let size = fs::metadata(&path)
                .map(|m| m.len())
                .unwrap_or(0);

            if seen.insert(path.clone()) {
                files.push((path, size));
            }
        }
    }

    if skipped_count > 0 {
        tracing::warn!("Skipped {} files due to security constraints", skipped_count);
    }

    Ok(files)
}

/// Format one file, writing it back when it changed and `write` is set
pub fn format_file(path: &Path, config: &FormatterConfig, write: bool) -> Result<FileReport> {
    let source = fs::read_to_string(path).map_err(|e| FormatterError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let formatted = format_text(&source, config);
    tracing::debug!(
        path = %path.display(),
        scanned = formatted.tags_scanned,
        formatted = formatted.tags_formatted,
        "formatted file"
    );

    if write && formatted.changed() {
        write_atomic(path, &formatted.text).map_err(|e| FormatterError::OutputError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    }

    Ok(FileReport {
        tags_scanned: formatted.tags_scanned,
        tags_formatted: formatted.tags_formatted,
        changed: formatted.changed(),
    })
}

/// Format files in parallel, results in input order
#[cfg(feature = "cli")]
fn format_files_parallel(
    files: &[PathBuf],
    config: &FormatterConfig,
    write: bool,
    jobs: Option<usize>,
    progress_bar: Option<&ProgressBar>,
) -> Result<Vec<FileReport>> {
    use rayon::prelude::*;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_jobs) = jobs {
        builder = builder.num_threads(num_jobs);
    }
    let pool = builder
        .build()
        .map_err(|e| FormatterError::InvalidInput(format!("Failed to start thread pool: {}", e)))?;

    pool.install(|| {
        files
            .par_iter()
            .map(|file_path| {
                let result = format_file(file_path, config, write);

                if let Some(pb) = progress_bar {
                    pb.inc(1);
                    pb.set_message(format!("Formatting: {}",
                        file_path.file_name().unwrap_or_default().to_string_lossy()));
                }

                result
            })
            .collect()
    })
}

/// Write the JSON run report
#[cfg(feature = "cli")]
fn write_report(path: &Path, report: &FormatReport) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(report)?;
    write_atomic(path, &content).map_err(|e| FormatterError::OutputError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Write file atomically by writing to temp file then renaming
fn write_atomic<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
    use std::io::Write;

    let path = path.as_ref();
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Handle pipe command - read a document from stdin, write it formatted to stdout
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    use tokio::io::{self, AsyncReadExt, AsyncWriteExt};

    let config = load_config(args.config.as_deref(), &args.layout.overrides())?;

    let mut input = String::new();
    let mut stdin = io::stdin();
    stdin.read_to_string(&mut input).await
        .map_err(|e| FormatterError::InputError(format!("Failed to read from stdin: {}", e)))?;

    if input.is_empty() {
        return Ok(());
    }

    let formatted = format_text(&input, &config);
    tracing::debug!(
        scanned = formatted.tags_scanned,
        formatted = formatted.tags_formatted,
        "formatted stdin"
    );

    let mut stdout = io::stdout();
    stdout.write_all(formatted.text.as_bytes()).await
        .map_err(|e| FormatterError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    stdout.flush().await
        .map_err(|e| FormatterError::OutputError {
            path: "stdout".to_string(),
            message: e.to_string(),
        })?;

    Ok(())
}

/// Format a class list for the pack command, as a quoted attribute value
pub fn pack_command(args: &PackArgs) -> String {
    let config = FormatterConfig::default().with_overrides(&args.layout.overrides());
    let layout = config.layout_for(&" ".repeat(args.indent));
    format!("{}class=\"{}\"", layout.attribute_indent, pack(&args.classes, &layout))
}
