//! Static complexity metrics computed from syntax trees.
//!
//! One analysis run performs a single top-level walk of the tree. File-level
//! counters observe every node; every `FunctionDeclaration` encountered
//! launches bounded sub-walks scoped to that function's subtree to fill its
//! own record. Each run owns its accumulators and its result set - nothing
//! is shared across runs, so concurrent analyses of different files need no
//! synchronization.
//!
//! # Example
//!
//! ```ignore
//! use treemetrics::metrics::analyze_file;
//!
//! let analysis = analyze_file("./ast/main.json")?;
//! println!("{}: {} imports", analysis.file.path.display(), analysis.file.import_count);
//! for func in &analysis.functions {
//!     println!("{}: cc={} depth={}", func.name, func.cyclomatic_complexity, func.max_nesting_depth);
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ast::{parse_source_tree, walk, NodeKind, SourceTree};
use crate::error::{MetricsError, Result};

pub mod file;
pub mod function;
pub mod nesting;

pub use file::{FileMetrics, IMPORT_FUNCTION};
pub use function::{FunctionMetrics, RiskLevel};
pub use nesting::decision_depth;

use function::analyze_function;

// =============================================================================
// TYPES
// =============================================================================

/// Complete result set of one analysis run: the whole-file record plus one
/// record per function definition.
///
/// Function records keep first-insertion order. A later function with the
/// same identity overwrites the earlier record in place - a documented
/// limitation of the identity scheme, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// Whole-file metrics
    pub file: FileMetrics,
    /// Per-function metrics, in discovery order
    pub functions: Vec<FunctionMetrics>,
}

impl FileAnalysis {
    /// Look up a function record by identity.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionMetrics> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// Soft per-file failure recorded during a directory run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisError {
    /// File path
    pub file: PathBuf,
    /// Error message
    pub message: String,
}

/// Aggregate statistics over a set of file analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Files analyzed successfully
    pub total_files: usize,
    /// Function records across all files
    pub total_functions: usize,
    /// Average cyclomatic complexity across functions
    pub average_complexity: f64,
    /// Highest cyclomatic complexity found
    pub max_complexity: u32,
    /// Function count per risk level
    pub risk_distribution: HashMap<String, usize>,
}

impl AnalysisStats {
    fn from_analyses(analyses: &[FileAnalysis]) -> Self {
        let complexities: Vec<u32> = analyses
            .iter()
            .flat_map(|a| a.functions.iter().map(|f| f.cyclomatic_complexity))
            .collect();

        if complexities.is_empty() {
            return Self {
                total_files: analyses.len(),
                total_functions: 0,
                average_complexity: 0.0,
                max_complexity: 0,
                risk_distribution: HashMap::new(),
            };
        }

        let total = complexities.len();
        let sum: u64 = complexities.iter().map(|&c| u64::from(c)).sum();
        let max = complexities.iter().copied().max().unwrap_or(0);

        let mut risk_distribution = HashMap::new();
        for &c in &complexities {
            *risk_distribution
                .entry(RiskLevel::from_complexity(c).to_string())
                .or_insert(0) += 1;
        }

        Self {
            total_files: analyses.len(),
            total_functions: total,
            average_complexity: sum as f64 / total as f64,
            max_complexity: max,
            risk_distribution,
        }
    }
}

/// Result of analyzing a path (single document or a directory of documents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    /// Path that was analyzed
    pub path: PathBuf,
    /// Per-file analyses, in path order
    pub files: Vec<FileAnalysis>,
    /// Aggregate statistics
    pub stats: AnalysisStats,
    /// Files that could not be analyzed
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<AnalysisError>,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Analyze an already-ingested tree. The core operation; it never fails.
///
/// `file` labels the whole-file record - typically the path the document
/// was read from.
#[must_use]
pub fn analyze_tree(tree: &SourceTree, file: impl Into<PathBuf>) -> FileAnalysis {
    let mut file_metrics = FileMetrics::new(file.into());
    let mut functions: Vec<FunctionMetrics> = Vec::new();
    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    walk(tree, tree.root(), &mut |id| {
        file_metrics.observe(tree, id);

        if matches!(tree.kind(id), NodeKind::FunctionDeclaration { .. }) {
            let record = analyze_function(tree, id);
            match index.get(&record.name) {
                Some(&slot) => functions[slot] = record,
                None => {
                    index.insert(record.name.clone(), functions.len());
                    functions.push(record);
                }
            }
        }
    });

    FileAnalysis {
        file: file_metrics,
        functions,
    }
}

/// Read an ESTree JSON document from disk and analyze it.
///
/// # Errors
///
/// Fails when the file cannot be read or is not valid JSON. A valid JSON
/// document that contains no nodes analyzes to an empty result instead.
pub fn analyze_file(path: impl AsRef<Path>) -> Result<FileAnalysis> {
    let path = path.as_ref();
    let source =
        std::fs::read_to_string(path).map_err(|e| MetricsError::io_with_path(e, path))?;
    let tree = parse_source_tree(&source)?;
    debug!("analyzing {} ({} nodes)", path.display(), tree.len());
    Ok(analyze_tree(&tree, path))
}

/// Analyze a single document or every `.json` document under a directory.
///
/// Directory entries are discovered with gitignore-aware walking and
/// analyzed in parallel; every file gets an independent engine instance and
/// result set. Per-file failures are collected as soft [`AnalysisError`]s
/// rather than aborting the run.
///
/// # Errors
///
/// Fails when the path does not exist, or when a directory contains no
/// ESTree documents at all.
pub fn analyze_path(path: impl AsRef<Path>) -> Result<ProjectAnalysis> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MetricsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Path not found: {}", path.display()),
        )));
    }

    if path.is_file() {
        let analysis = analyze_file(path)?;
        let stats = AnalysisStats::from_analyses(std::slice::from_ref(&analysis));
        return Ok(ProjectAnalysis {
            path: path.to_path_buf(),
            files: vec![analysis],
            stats,
            errors: Vec::new(),
        });
    }

    let mut documents: Vec<PathBuf> = ignore::WalkBuilder::new(path)
        .build()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    documents.sort();

    if documents.is_empty() {
        return Err(MetricsError::InvalidArgument(format!(
            "No ESTree documents found in {}",
            path.display()
        )));
    }

    debug!("analyzing {} documents under {}", documents.len(), path.display());

    let results: Vec<std::result::Result<FileAnalysis, AnalysisError>> = documents
        .par_iter()
        .map(|document| {
            analyze_file(document).map_err(|e| AnalysisError {
                file: document.clone(),
                message: e.to_string(),
            })
        })
        .collect();

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(analysis) => files.push(analysis),
            Err(error) => errors.push(error),
        }
    }

    let stats = AnalysisStats::from_analyses(&files);

    Ok(ProjectAnalysis {
        path: path.to_path_buf(),
        files,
        stats,
        errors,
    })
}

// =============================================================================
// TESTS
// =============================================================================
