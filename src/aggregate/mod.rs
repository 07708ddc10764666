use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::AggregateError;
use crate::io::load_survey_file;
use crate::models::{BandConfig, ResultTable, SurveyTable, TeacherRecord};

/// Counts reported at the end of an aggregation run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// CSV files discovered in the directory
    pub files_found: usize,
    /// Files that produced a teacher record
    pub files_processed: usize,
    /// Files skipped after a load or validation failure
    pub files_skipped: usize,
}

/// Result of a full aggregation run
#[derive(Debug)]
pub struct AggregateResult {
    pub table: ResultTable,
    pub summary: RunSummary,
}

/// List the survey CSV files in a directory
///
/// Returns paths in `read_dir` listing order, which is platform-dependent
/// and not guaranteed to be sorted.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, AggregateError> {
    let entries = std::fs::read_dir(dir).map_err(|source| AggregateError::Discovery {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AggregateError::Discovery {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path);
        }
    }
    Ok(files)
}

/// Check that a loaded table satisfies the band configuration
///
/// A table with exactly `min_rows()` rows is valid: band ends are exclusive,
/// so the largest end is the last consumed row index plus one.
pub fn validate(table: &SurveyTable, config: &BandConfig, file: &Path) -> Result<(), AggregateError> {
    let required = config.min_rows();
    let rows = table.row_count();
    if rows < required {
        return Err(AggregateError::TooFewRows {
            file: file.to_path_buf(),
            rows,
            required,
        });
    }
    Ok(())
}

/// Reduce a validated table to one teacher record, one band mean per metric
///
/// The band-range check repeats what `validate` already guaranteed; it only
/// fires if a caller extracts from an unvalidated table.
pub fn extract(table: &SurveyTable, config: &BandConfig) -> Result<TeacherRecord, AggregateError> {
    let mut metrics = Vec::with_capacity(config.bands.len());

    for band in &config.bands {
        if table.row_count() < band.end {
            return Err(AggregateError::BandRange {
                metric: band.name.clone(),
                end: band.end,
                rows: table.row_count(),
            });
        }
        let slice = &table.avg[band.start..band.end];
        let mean = slice.iter().sum::<f64>() / slice.len() as f64;
        metrics.push(mean);
    }

    Ok(TeacherRecord {
        name: table.name.clone(),
        metrics,
    })
}

/// Run the full aggregation over a directory of survey files
///
/// Drives discover -> load -> validate -> extract in file order. A failure
/// in any single file is logged as a warning and skips only that file; only
/// the directory-level discovery error aborts the run.
pub fn aggregate(dir: &Path, config: &BandConfig) -> Result<AggregateResult, AggregateError> {
    let files = discover(dir)?;
    info!("Found {} CSV files in {:?}", files.len(), dir);

    let mut table = ResultTable::new(config.metric_names());
    let mut files_skipped = 0;

    for file in &files {
        match process_file(file, config) {
            Ok(record) => {
                info!("Processed {}", record.name);
                table.records.push(record);
            }
            Err(e) => {
                warn!("Skipping {:?}: {}", file, e);
                files_skipped += 1;
            }
        }
    }

    let summary = RunSummary {
        files_found: files.len(),
        files_processed: table.len(),
        files_skipped,
    };

    info!(
        "Successfully processed {} of {} files",
        summary.files_processed, summary.files_found
    );

    Ok(AggregateResult { table, summary })
}

/// Load, validate, and extract a single survey file
fn process_file(file: &Path, config: &BandConfig) -> Result<TeacherRecord, AggregateError> {
    let table = load_survey_file(file)?;
    validate(&table, config, file)?;
    extract(&table, config)
}
