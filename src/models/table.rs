use serde::{Deserialize, Serialize};

/// One loaded survey file: the teacher it belongs to and its score column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyTable {
    /// Teacher name, derived from the file name with the extension stripped
    pub name: String,
    /// Parsed "AVG" column in row order. Cells that failed to parse as a
    /// number are carried as NaN rather than dropped, so row indices stay
    /// aligned with the source file.
    pub avg: Vec<f64>,
}

impl SurveyTable {
    /// Number of data rows in the table
    pub fn row_count(&self) -> usize {
        self.avg.len()
    }
}

/// Metric averages for one teacher, one value per configured band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherRecord {
    /// Teacher name (file stem)
    pub name: String,
    /// Band means, aligned with the configuration's declaration order
    pub metrics: Vec<f64>,
}

/// Ordered collection of teacher records plus the metric column names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultTable {
    /// Metric column names in configuration-declaration order
    pub metric_names: Vec<String>,
    /// One record per successfully processed input file, in file order
    pub records: Vec<TeacherRecord>,
}

impl ResultTable {
    pub fn new(metric_names: Vec<String>) -> Self {
        Self {
            metric_names,
            records: Vec::new(),
        }
    }

    /// Full header row: Name followed by the metric names
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec!["Name".to_string()];
        headers.extend(self.metric_names.iter().cloned());
        headers
    }

    /// Number of teacher rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one metric column, by its position in `metric_names`
    pub fn metric_column(&self, index: usize) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.metrics.get(index).copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_lead_with_name() {
        let table = ResultTable::new(vec!["Skill".to_string(), "Interaction".to_string()]);
        assert_eq!(table.headers(), vec!["Name", "Skill", "Interaction"]);
    }

    #[test]
    fn test_metric_column_extraction() {
        let mut table = ResultTable::new(vec!["A".to_string(), "B".to_string()]);
        table.records.push(TeacherRecord {
            name: "smith".to_string(),
            metrics: vec![1.0, 2.0],
        });
        table.records.push(TeacherRecord {
            name: "jones".to_string(),
            metrics: vec![3.0, 4.0],
        });

        assert_eq!(table.metric_column(0), vec![1.0, 3.0]);
        assert_eq!(table.metric_column(1), vec![2.0, 4.0]);
    }

    #[test]
    fn test_row_count() {
        let table = SurveyTable {
            name: "smith".to_string(),
            avg: vec![4.2, 3.9, 4.7],
        };
        assert_eq!(table.row_count(), 3);
    }
}
