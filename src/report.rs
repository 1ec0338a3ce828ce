//! Textual report rendering.
//!
//! Presentation layer over the analysis records: one block per file, one per
//! function, labeled numeric fields. Machine consumers should serialize the
//! records themselves (they all derive `Serialize`); only the record shape
//! is contractual, not this layout.

use std::fmt::Write as _;

use crate::metrics::{FileAnalysis, ProjectAnalysis};

/// Render one file analysis as a human-readable block.
#[must_use]
pub fn render_text(analysis: &FileAnalysis) -> String {
    let mut out = String::new();
    let file = &analysis.file;

    let _ = writeln!(out, "{}", file.path.display());
    let _ = writeln!(out, "~~~~~~~~~~~~");
    let _ = writeln!(
        out,
        "imports: {}\tstrings: {}\tpackage complexity: {}\tcomparisons: {}",
        file.import_count,
        file.string_literal_count,
        file.package_complexity,
        file.comparison_count,
    );
    let _ = writeln!(out);

    for func in &analysis.functions {
        let _ = writeln!(out, "{} (line {})", func.name, func.line);
        let _ = writeln!(out, "============");
        let _ = writeln!(
            out,
            "cyclomatic: {}\tnesting depth: {}\tconditions: {}\tparameters: {}\tchain length: {}\treturns: {}\trisk: {}",
            func.cyclomatic_complexity,
            func.max_nesting_depth,
            func.max_conditions,
            func.parameter_count,
            func.max_chain_length,
            func.return_count,
            func.risk_level,
        );
        let _ = writeln!(out);
    }

    out
}

/// Render a whole project run: every file block, failures, and a summary.
#[must_use]
pub fn render_project_text(project: &ProjectAnalysis) -> String {
    let mut out = String::new();

    for analysis in &project.files {
        out.push_str(&render_text(analysis));
    }

    for error in &project.errors {
        let _ = writeln!(out, "SKIPPED {}: {}", error.file.display(), error.message);
    }
    if !project.errors.is_empty() {
        let _ = writeln!(out);
    }

    let stats = &project.stats;
    let _ = writeln!(
        out,
        "{} file(s), {} function(s), average complexity {:.2}, max complexity {}",
        stats.total_files,
        stats.total_functions,
        stats.average_complexity,
        stats.max_complexity,
    );

    out
}
