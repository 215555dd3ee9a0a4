//! One checking run: resolve inputs, read and analyze them, render.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinSet;

use hacheck_glob::{PackageFile, PackageWalker};
use hacheck_kernel::{Checker, DocumentAnalysis, Report, SourceDocument};

use crate::cli::{Args, DEFAULT_PACKAGES_DIR, OutputFormat};
use crate::config::load_config;
use crate::render::{TextOptions, write_json, write_text};

/// Files named on the command line, or the contents of the packages directory.
///
/// The default directory may be missing; an explicit `--packages-dir` may not.
pub fn resolve_inputs(args: &Args) -> Result<Vec<PackageFile>> {
    if !args.files.is_empty() {
        return Ok(args.files.iter().map(PackageFile::explicit).collect());
    }

    let (dir, explicit) = match &args.packages_dir {
        Some(dir) => (dir.as_path(), true),
        None => (Path::new(DEFAULT_PACKAGES_DIR), false),
    };
    if !explicit && !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "default packages directory absent");
        return Ok(Vec::new());
    }

    PackageWalker::new(dir)
        .with_extension(&args.extension)
        .discover()
        .with_context(|| format!("cannot search {}", dir.display()))
}

/// Read every file and analyze it. Files are read concurrently; parsing runs
/// on the blocking pool. Order of completion does not matter, the report
/// sorts by name.
pub async fn analyze_files(checker: Arc<Checker>, files: Vec<PackageFile>) -> Result<Report> {
    let mut tasks = JoinSet::new();
    for file in files {
        let checker = Arc::clone(&checker);
        tasks.spawn(async move {
            match tokio::fs::read(&file.path).await {
                Ok(bytes) => {
                    let source = SourceDocument::new(file.display_name, bytes);
                    tokio::task::spawn_blocking(move || checker.analyze(&source)).await
                }
                Err(err) => {
                    tracing::warn!(file = %file.display_name, error = %err, "cannot read file");
                    Ok(DocumentAnalysis::unreadable(&file.display_name, &err))
                }
            }
        });
    }

    let mut analyses = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let analysis = joined.context("analysis task failed")?.context("analysis task failed")?;
        analyses.push(analysis);
    }
    Ok(Report::from_analyses(analyses))
}

/// Run with parsed arguments and return the process exit code.
pub async fn run(args: Args, out: &mut impl Write) -> Result<i32> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = args.apply_overrides(load_config(args.config.as_deref(), &cwd)?);
    let files = resolve_inputs(&args)?;

    if files.is_empty() {
        match args.format {
            OutputFormat::Text => writeln!(out, "no files found")?,
            OutputFormat::Json => write_json(out, &Report::default())?,
        }
        return Ok(0);
    }

    tracing::info!(files = files.len(), "checking");
    let report = analyze_files(Arc::new(Checker::new(config)), files).await?;

    match args.format {
        OutputFormat::Text => write_text(
            out,
            &report,
            TextOptions {
                list_entities: args.list_entities,
            },
        )?,
        OutputFormat::Json => write_json(out, &report)?,
    }
    Ok(report.exit_code())
}
