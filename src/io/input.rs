use std::path::Path;

use tracing::debug;

use crate::error::AggregateError;
use crate::models::SurveyTable;

/// Header of the score column every survey file must carry
pub const SCORE_COLUMN: &str = "AVG";

/// Load one survey CSV file into a SurveyTable
///
/// The teacher name is the file stem. The "AVG" column is located by header
/// at load time; a file without it fails with a named error rather than a
/// silent missing-key lookup later. Cells that do not parse as numbers are
/// kept as NaN so row indices stay aligned with the file.
pub fn load_survey_file(path: &Path) -> Result<SurveyTable, AggregateError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut reader = csv::Reader::from_path(path).map_err(|source| AggregateError::Load {
        file: path.to_path_buf(),
        source,
    })?;

    let headers = reader.headers().map_err(|source| AggregateError::Load {
        file: path.to_path_buf(),
        source,
    })?;

    let avg_index = headers
        .iter()
        .position(|h| h.trim() == SCORE_COLUMN)
        .ok_or_else(|| AggregateError::MissingColumn {
            file: path.to_path_buf(),
            column: SCORE_COLUMN.to_string(),
        })?;

    let mut avg = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|source| AggregateError::Load {
            file: path.to_path_buf(),
            source,
        })?;

        let cell = record.get(avg_index).unwrap_or("").trim();
        let value = match cell.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                debug!("{:?} row {}: non-numeric AVG cell {:?}", path, row, cell);
                f64::NAN
            }
        };
        avg.push(value);
    }

    Ok(SurveyTable { name, avg })
}
