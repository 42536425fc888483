//! Run reporting.
//!
//! The walker collects results as plain data; this module turns a
//! [`RunReport`] into output afterwards. Structured formats serialize the
//! report directly. The text formats render through a template whose
//! `style` filter applies terminal colors picked for the viewer's own
//! color mode, so the report adapts to light and dark terminals the same
//! way the pages it cleans up do.

use clap::ValueEnum;
use console::{Style, Term};
use minijinja::{Environment, Value};
use serde::Serialize;
use thiserror::Error;

use duotone::{detect_color_mode, ColorMode};

/// One file with dark tokens, as found by the walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    /// Removed tokens, verbatim, in document order.
    pub matches: Vec<String>,
    /// False when the run was a dry run.
    pub applied: bool,
}

/// Everything one processing run found and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Files with at least one dark token, in visit order.
    pub files: Vec<FileReport>,
    /// Total files visited, matching or not.
    pub scanned: usize,
    /// Files skipped because their content is not UTF-8.
    pub skipped_non_utf8: usize,
    pub dry_run: bool,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            files: Vec::new(),
            scanned: 0,
            skipped_non_utf8: 0,
            dry_run,
        }
    }

    /// Total dark tokens found across all files.
    pub fn total_matches(&self) -> usize {
        self.files.iter().map(|f| f.matches.len()).sum()
    }
}

/// How a run report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Text, styled when the terminal supports color.
    Auto,
    /// Text without any styling.
    Plain,
    /// The report as JSON.
    Json,
    /// The report as YAML.
    Yaml,
}

/// Errors that can occur while rendering a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("report template failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Template for the text report. Keeps the per-file shape stable: path,
/// count, one line per removed token, and the applied / dry-run notice,
/// with a closing summary after all files.
///
/// Template variables:
/// - `files`: The file reports, in visit order
/// - `summary`: The pre-built closing summary line
const TEXT_REPORT_TEMPLATE: &str = r#"{% for file in files %}File: {{ file.path | style('path') }}
Found {{ file.matches | length | style('count') }} dark mode classes:
{% for match in file.matches %}  - {{ match | style('token') }}
{% endfor %}{% if file.applied %}{{ 'Changes applied successfully' | style('notice') }}
{% else %}{{ 'Dry run - no changes made' | style('notice') }}
{% endif %}{% endfor %}{% if files %}
{% endif %}{{ summary }}"#;

/// Terminal styles for the text report, one variant per color mode.
#[derive(Debug, Clone)]
struct ReportStyles {
    path: Style,
    count: Style,
    token: Style,
    notice: Style,
}

impl ReportStyles {
    fn for_mode(mode: ColorMode) -> Self {
        match mode {
            // Light terminals read better with the darker shades.
            ColorMode::Light => Self {
                path: Style::new().blue().bold(),
                count: Style::new().magenta(),
                token: Style::new().red(),
                notice: Style::new().green(),
            },
            ColorMode::Dark => Self {
                path: Style::new().cyan().bold(),
                count: Style::new().yellow(),
                token: Style::new().red(),
                notice: Style::new().green(),
            },
        }
    }

    fn apply(&self, name: &str, text: &str) -> String {
        let style = match name {
            "path" => &self.path,
            "count" => &self.count,
            "token" => &self.token,
            "notice" => &self.notice,
            _ => return text.to_string(),
        };
        style.apply_to(text).to_string()
    }
}

#[derive(Serialize)]
struct TextContext<'a> {
    files: &'a [FileReport],
    summary: String,
}

/// Renders a run report in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] if serialization or template rendering fails.
pub fn render_report(report: &RunReport, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Plain => render_text(report, None),
        ReportFormat::Auto => {
            let styles = if Term::stdout().features().colors_supported() {
                Some(ReportStyles::for_mode(detect_color_mode()))
            } else {
                None
            };
            render_text(report, styles)
        }
    }
}

fn render_text(report: &RunReport, styles: Option<ReportStyles>) -> Result<String, ReportError> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match &styles {
            Some(styles) => styles.apply(&name, &text),
            None => text,
        }
    });
    env.add_template("report", TEXT_REPORT_TEMPLATE)?;

    let context = TextContext {
        files: &report.files,
        summary: summary_line(report),
    };
    Ok(env.get_template("report")?.render(context)?)
}

fn summary_line(report: &RunReport) -> String {
    let summary = if report.files.is_empty() {
        format!("Scanned {} files: no dark mode classes found", report.scanned)
    } else if report.dry_run {
        format!(
            "Scanned {} files: would remove {} dark mode classes from {} files",
            report.scanned,
            report.total_matches(),
            report.files.len()
        )
    } else {
        format!(
            "Scanned {} files: removed {} dark mode classes from {} files",
            report.scanned,
            report.total_matches(),
            report.files.len()
        )
    };

    if report.skipped_non_utf8 > 0 {
        format!("{} ({} non-UTF-8 files skipped)", summary, report.skipped_non_utf8)
    } else {
        summary
    }
}
