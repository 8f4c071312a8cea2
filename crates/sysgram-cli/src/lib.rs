//! Sysgram CLI library
//!
//! This module contains the core CLI logic for the sysgram diagram tool:
//! rendering model files and markdown pages into an output directory,
//! skipping outputs that are already up to date.

pub mod error_adapter;

mod args;
mod config;
mod markdown;
mod rebuild;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use sysgram::{DiagramBuilder, OutputFormat, SysgramError};

use config::MarkdownConfig;
use markdown::PageRenderer;

/// A document that failed to render.
#[derive(Debug)]
pub struct Failure {
    pub input: PathBuf,
    pub error: SysgramError,
}

/// Outcome of a run over all inputs.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rendered: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Settings shared by every document of a run.
struct Job<'a> {
    builder: DiagramBuilder,
    markdown: MarkdownConfig,
    format: OutputFormat,
    out_dir: &'a Path,
    args: &'a Args,
}

/// Run the sysgram CLI application
///
/// Every input is rendered independently: a document that fails is logged
/// and recorded in the returned [`RunSummary`], and the remaining inputs
/// are still processed.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SysgramError` for failures that affect every document:
/// - Unsupported output format
/// - Configuration loading errors
/// - Output directory creation errors
pub fn run(args: &Args) -> Result<RunSummary, SysgramError> {
    let format: OutputFormat = args.format.parse()?;
    let config = config::load_config(args.config.as_ref())?;

    let out_dir = Path::new(&args.out_dir);
    fs::create_dir_all(out_dir)?;

    info!(
        inputs = args.inputs.len(),
        out_dir = args.out_dir,
        format:%;
        "Processing documents"
    );

    let job = Job {
        builder: DiagramBuilder::new(config.app().clone()),
        markdown: config.markdown().clone(),
        format,
        out_dir,
        args,
    };

    let mut summary = RunSummary::default();
    for input in &args.inputs {
        let input = PathBuf::from(input);
        match job.process(&input) {
            Ok(Outcome::Rendered(output)) => {
                info!(output = output.display().to_string(); "Document rendered");
                summary.rendered.push(output);
            }
            Ok(Outcome::Skipped(output)) => {
                debug!(output = output.display().to_string(); "Output is up to date, skipping");
                summary.skipped.push(output);
            }
            Err(err) => {
                debug!(input = input.display().to_string(), err:%; "Document failed");
                summary.failures.push(Failure { input, error: err });
            }
        }
    }

    info!(
        rendered = summary.rendered.len(),
        skipped = summary.skipped.len(),
        failed = summary.failures.len();
        "Run finished"
    );
    Ok(summary)
}

enum Outcome {
    Rendered(PathBuf),
    Skipped(PathBuf),
}

impl Job<'_> {
    fn process(&self, input: &Path) -> Result<Outcome, SysgramError> {
        let output = self.output_path(input)?;
        if overwrites_input(input, &output) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("output '{}' would overwrite its input", output.display()),
            )
            .into());
        }
        if !self.args.force && rebuild::is_up_to_date(input, &output) {
            return Ok(Outcome::Skipped(output));
        }

        let source = fs::read_to_string(input)?;
        let provenance = input.display().to_string();

        let rendered = if is_markdown(input) {
            let page = PageRenderer::new(
                &self.builder,
                &self.markdown,
                self.format,
                self.args.title.as_deref(),
            )
            .render_page(&source, &provenance)?;
            page.text
        } else {
            let model = self.builder.parse(&source, Some(&provenance));
            let title = self.args.title.as_deref().unwrap_or(&provenance);
            self.builder
                .render_as(&model, self.format, title, self.args.inline)?
        };

        fs::write(&output, rendered)?;
        Ok(Outcome::Rendered(output))
    }

    /// `<out-dir>/<file name>` for pages, `<out-dir>/<stem>.<ext>` for models.
    fn output_path(&self, input: &Path) -> Result<PathBuf, SysgramError> {
        let invalid = || {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' does not name a file", input.display()),
            )
        };

        if is_markdown(input) {
            let name = input.file_name().ok_or_else(invalid)?;
            return Ok(self.out_dir.join(name));
        }

        let mut name = input.file_stem().ok_or_else(invalid)?.to_os_string();
        name.push(".");
        name.push(self.format.extension());
        Ok(self.out_dir.join(name))
    }
}

/// Whether `output` names the same file as `input`.
///
/// Both are compared after resolving links and relative components; an
/// input that cannot be resolved is left for the read to report.
fn overwrites_input(input: &Path, output: &Path) -> bool {
    let Ok(input) = fs::canonicalize(input) else {
        return false;
    };
    let (Some(parent), Some(name)) = (output.parent(), output.file_name()) else {
        return false;
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    fs::canonicalize(parent).is_ok_and(|dir| dir.join(name) == input)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}
