//! Diagnostic accumulation.
//!
//! [`ErrorReport`] collects the diagnostics of one document. [`FileReport`]
//! and [`RunReport`] record what happened to each file of a run.

use super::diagnostic::{Diagnostic, Region};
use std::path::PathBuf;

/// Diagnostics of one document, grouped by region.
///
/// The regions are fixed when the report is created: components and
/// parameters always, scripts only when script linting is enabled.
/// Diagnostics keep the order they were recorded in, which is the
/// depth-first order of the walk. Nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    categories: Vec<(Region, Vec<Diagnostic>)>,
}

impl ErrorReport {
    /// Create an empty report.
    pub fn new(scripts_enabled: bool) -> Self {
        let mut categories = vec![
            (Region::Components, Vec::new()),
            (Region::Parameters, Vec::new()),
        ];
        if scripts_enabled {
            categories.push((Region::Scripts, Vec::new()));
        }
        Self { categories }
    }

    /// Record a diagnostic in its region.
    ///
    /// Diagnostics for a region this report does not track are discarded.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match self
            .categories
            .iter_mut()
            .find(|(region, _)| *region == diagnostic.region)
        {
            Some((_, diagnostics)) => diagnostics.push(diagnostic),
            None => tracing::debug!("Discarding {} diagnostic {}", diagnostic.region, diagnostic),
        }
    }

    /// Whether this report tracks `region`.
    pub fn tracks(&self, region: Region) -> bool {
        self.categories.iter().any(|(r, _)| *r == region)
    }

    /// Diagnostics recorded for `region`.
    pub fn get(&self, region: Region) -> &[Diagnostic] {
        self.categories
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, diagnostics)| diagnostics.as_slice())
            .unwrap_or(&[])
    }

    /// Paths recorded for `region`, in order.
    pub fn paths(&self, region: Region) -> Vec<&str> {
        self.get(region).iter().map(|d| d.path.as_str()).collect()
    }

    /// Iterate over tracked regions and their diagnostics.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &[Diagnostic])> {
        self.categories
            .iter()
            .map(|(region, diagnostics)| (*region, diagnostics.as_slice()))
    }

    /// Clear every region, keeping the set of tracked regions.
    pub fn reset(&mut self) {
        for (_, diagnostics) in &mut self.categories {
            diagnostics.clear();
        }
    }

    /// Total number of diagnostics across all regions.
    pub fn count(&self) -> usize {
        self.categories.iter().map(|(_, d)| d.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// What happened when a file was linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was parsed and walked.
    Linted(ErrorReport),
    /// The file could not be read or is not valid JSON.
    ParseError(String),
    /// No file exists at the path.
    NotFound,
}

/// The result of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path as given by the caller (relative to the project root when
    /// discovered through a pattern).
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, outcome: FileOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    /// The diagnostics of a linted file.
    pub fn report(&self) -> Option<&ErrorReport> {
        match &self.outcome {
            FileOutcome::Linted(report) => Some(report),
            _ => None,
        }
    }

    /// Number of diagnostics. Files that were not linted contribute zero.
    pub fn violations(&self) -> usize {
        self.report().map_or(0, ErrorReport::count)
    }
}

/// The results of one run, in the order files were linted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: FileReport) {
        self.files.push(file);
    }

    /// Total diagnostics across all linted files.
    pub fn violations(&self) -> usize {
        self.files.iter().map(FileReport::violations).sum()
    }

    /// Files that were parsed and walked.
    pub fn linted(&self) -> impl Iterator<Item = (&FileReport, &ErrorReport)> {
        self.files
            .iter()
            .filter_map(|file| file.report().map(|report| (file, report)))
    }

    /// Number of files that could not be parsed or were missing.
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|f| f.report().is_none()).count()
    }

    /// Whether the run recorded no diagnostics.
    ///
    /// Parse failures and missing files do not make a run unclean.
    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

impl FromIterator<FileReport> for RunReport {
    fn from_iter<I: IntoIterator<Item = FileReport>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}
