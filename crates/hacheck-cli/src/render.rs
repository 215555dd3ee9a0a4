//! Report rendering for the terminal and for machines.

use std::io::{self, Write};

use hacheck_kernel::Report;

/// Options for the text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub list_entities: bool,
}

/// Write the human-readable report.
pub fn write_text(out: &mut impl Write, report: &Report, options: TextOptions) -> io::Result<()> {
    writeln!(out, "hacheck: checked {} file(s)", report.files_checked)?;
    writeln!(
        out,
        "  {} entities referenced, {} automation id(s)",
        report.entity_count(),
        report.automations.len()
    )?;

    let warnings: Vec<_> = report.warnings().collect();
    if !warnings.is_empty() {
        writeln!(out, "\nWARNINGS ({})", warnings.len())?;
        for issue in warnings {
            writeln!(out, "  {issue}")?;
        }
    }

    let errors: Vec<_> = report.errors().collect();
    if !errors.is_empty() {
        writeln!(out, "\nERRORS ({})", errors.len())?;
        for issue in errors {
            writeln!(out, "  {issue}")?;
        }
    }

    if !report.duplicates.is_empty() {
        writeln!(out, "\nDUPLICATE AUTOMATION IDS ({})", report.duplicates.len())?;
        for group in &report.duplicates {
            writeln!(out, "  '{}'", group.id)?;
            for location in &group.locations {
                writeln!(out, "    - {} ({})", location.source_file, location.alias)?;
            }
        }
    }

    if !report.naming_warnings.is_empty() {
        writeln!(out, "\nNAMING ({})", report.naming_warnings.len())?;
        for item in &report.naming_warnings {
            writeln!(out, "  {}: {}", item.file, item.warning)?;
        }
    }

    if options.list_entities {
        writeln!(out, "\nENTITIES ({})", report.entity_count())?;
        for (domain, ids) in &report.entities_by_domain {
            writeln!(out, "  {domain} ({})", ids.len())?;
            for id in ids {
                writeln!(out, "    {id}  [{}]", report.files_referencing(id).join(", "))?;
            }
        }
    }

    let verdict = if report.passed() { "PASSED" } else { "FAILED" };
    writeln!(out, "\nRESULT: {verdict}")
}

/// Write the report as pretty JSON, followed by a newline.
pub fn write_json(out: &mut impl Write, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
