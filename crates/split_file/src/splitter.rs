// crates/split_file/src/splitter.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use split_markers::{parse, SplitDocument, SPLIT_EXTENSION};
use tracing::{debug, info};

use crate::config::SplitConfig;

/// One file the splitter is about to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite<'a> {
    pub path: PathBuf,
    pub contents: &'a str,
}

/// A file produced (or, in dry-run mode, planned) by [`split_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of one run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    pub outputs: Vec<OutputFile>,
    /// True when nothing was written to disk.
    pub dry_run: bool,
}

/// Checks that `input` carries the `.split` extension and returns the path
/// with that extension removed (`dir/a.split` becomes `dir/a`).
///
/// # Errors
///
/// Returns an error if the extension is missing or different.
pub fn strip_split_extension(input: &Path) -> Result<PathBuf> {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == SPLIT_EXTENSION => Ok(input.with_extension("")),
        _ => anyhow::bail!(
            "Expected `.{}` file, got {}",
            SPLIT_EXTENSION,
            input.display()
        ),
    }
}

fn resolve(output_dir: Option<&Path>, name: &Path) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(name),
        None => name.to_path_buf(),
    }
}

/// Lays out every write for `doc` in document order.
///
/// A non-empty preamble goes first, to `stripped_input` (or to its file name
/// inside `output_dir`). Each section then goes to its target name. Repeated
/// target names stay in the plan, so the last one wins on disk.
pub fn plan_outputs<'a>(
    doc: &SplitDocument<'a>,
    stripped_input: &Path,
    output_dir: Option<&Path>,
) -> Vec<PlannedWrite<'a>> {
    let mut plan = Vec::with_capacity(doc.sections.len() + 1);

    if doc.has_preamble() {
        let path = match (output_dir, stripped_input.file_name()) {
            (Some(dir), Some(stem)) => dir.join(stem),
            _ => stripped_input.to_path_buf(),
        };
        plan.push(PlannedWrite {
            path,
            contents: doc.preamble,
        });
    }

    for section in &doc.sections {
        plan.push(PlannedWrite {
            path: resolve(output_dir, Path::new(section.target)),
            contents: section.body,
        });
    }

    plan
}

/// Creates or truncates the planned file and writes its contents.
///
/// # Errors
///
/// Returns an error naming the destination if it cannot be written.
pub fn write_output(write: &PlannedWrite<'_>) -> Result<()> {
    fs::write(&write.path, write.contents)
        .with_context(|| format!("Error writing file {}", write.path.display()))?;
    debug!(path = %write.path.display(), bytes = write.contents.len(), "wrote output");
    Ok(())
}

/// Reads `config.input` and writes one file per segment.
///
/// Outputs are written one after another; if a write fails, the files already
/// written stay on disk.
///
/// # Errors
///
/// Returns an error if the input is not a `.split` file, cannot be read as
/// UTF-8 text, or if any output cannot be written.
pub fn split_file(config: &SplitConfig) -> Result<SplitReport> {
    let stripped = strip_split_extension(&config.input)?;
    let text = fs::read_to_string(&config.input)
        .with_context(|| format!("Error reading file {}", config.input.display()))?;

    let doc = parse(&text);
    debug!(
        input = %config.input.display(),
        preamble_bytes = doc.preamble.len(),
        sections = doc.sections.len(),
        targets = ?doc.target_names().collect::<Vec<_>>(),
        "parsed split file"
    );

    let plan = plan_outputs(&doc, &stripped, config.output_dir.as_deref());
    if !config.dry_run {
        for write in &plan {
            write_output(write)?;
        }
    }

    info!(
        input = %config.input.display(),
        files = plan.len(),
        dry_run = config.dry_run,
        "split complete"
    );

    Ok(SplitReport {
        outputs: plan
            .iter()
            .map(|write| OutputFile {
                path: write.path.clone(),
                bytes: write.contents.len(),
            })
            .collect(),
        dry_run: config.dry_run,
    })
}
