use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ResultTable;

/// Write the result table as a headered, unindexed CSV file
///
/// Column order is Name followed by the metric names in configuration order.
pub fn write_result_csv(table: &ResultTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;

    writer
        .write_record(table.headers())
        .context("Failed to write CSV header")?;

    for record in &table.records {
        let mut row = vec![record.name.clone()];
        row.extend(record.metrics.iter().map(|v| format_value(*v)));
        writer
            .write_record(&row)
            .with_context(|| format!("Failed to write row for {}", record.name))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Per-metric descriptive statistics over the result table
#[derive(Debug, Clone)]
pub struct MetricSummary {
    pub metric: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Compute descriptive statistics for every metric column
///
/// NaN values (non-numeric source cells that passed through) are excluded
/// from the statistics; `count` reports how many finite values remained.
pub fn summarize(table: &ResultTable) -> Vec<MetricSummary> {
    table
        .metric_names
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let values: Vec<f64> = table
                .metric_column(i)
                .into_iter()
                .filter(|v| !v.is_nan())
                .collect();
            summarize_column(metric, &values)
        })
        .collect()
}

fn summarize_column(metric: &str, values: &[f64]) -> MetricSummary {
    let count = values.len();
    if count == 0 {
        return MetricSummary {
            metric: metric.to_string(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;
    // Sample standard deviation, matching the usual describe() convention
    let std = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        f64::NAN
    };
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    MetricSummary {
        metric: metric.to_string(),
        count,
        mean,
        std,
        min,
        max,
    }
}

/// Render the result table as aligned text for console display
pub fn format_result_table(table: &ResultTable) -> String {
    let headers = table.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    let rows: Vec<Vec<String>> = table
        .records
        .iter()
        .map(|r| {
            let mut row = vec![r.name.clone()];
            row.extend(r.metrics.iter().map(|v| format_value(*v)));
            row
        })
        .collect();

    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut output = String::new();
    push_row(&mut output, &headers, &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output
}

/// Render the per-metric summary statistics as aligned text
pub fn format_summary(summaries: &[MetricSummary]) -> String {
    let mut output = String::new();
    let name_width = summaries
        .iter()
        .map(|s| s.metric.len())
        .max()
        .unwrap_or(6)
        .max("metric".len());

    output.push_str(&format!(
        "{:<name_width$}  {:>5}  {:>8}  {:>8}  {:>8}  {:>8}\n",
        "metric", "count", "mean", "std", "min", "max"
    ));
    for s in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:>5}  {:>8}  {:>8}  {:>8}  {:>8}\n",
            s.metric,
            s.count,
            format_value(s.mean),
            format_value(s.std),
            format_value(s.min),
            format_value(s.max),
        ));
    }
    output
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            output.push_str("  ");
        }
        output.push_str(&format!("{:<width$}", cell, width = widths[i]));
    }
    output.push('\n');
}

/// Format a metric value with two decimal places; NaN prints as "NaN"
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeacherRecord;
    use tempfile::tempdir;

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new(vec!["Skill".to_string(), "Interaction".to_string()]);
        table.records.push(TeacherRecord {
            name: "smith".to_string(),
            metrics: vec![4.0, 3.5],
        });
        table.records.push(TeacherRecord {
            name: "jones".to_string(),
            metrics: vec![3.0, 4.5],
        });
        table
    }

    #[test]
    fn test_write_result_csv() {
        let table = sample_table();
        let dir = tempdir().unwrap();
        let path = dir.path().join("metrics.csv");

        write_result_csv(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Name,Skill,Interaction"));
        assert_eq!(lines.next(), Some("smith,4.00,3.50"));
        assert_eq!(lines.next(), Some("jones,3.00,4.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_summarize() {
        let summaries = summarize(&sample_table());
        assert_eq!(summaries.len(), 2);

        let skill = &summaries[0];
        assert_eq!(skill.metric, "Skill");
        assert_eq!(skill.count, 2);
        assert!((skill.mean - 3.5).abs() < 1e-9);
        assert_eq!(skill.min, 3.0);
        assert_eq!(skill.max, 4.0);
        // std of {4.0, 3.0} with n-1 denominator
        assert!((skill.std - 0.7071067811865476).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_skips_nan() {
        let mut table = sample_table();
        table.records.push(TeacherRecord {
            name: "lee".to_string(),
            metrics: vec![f64::NAN, 4.0],
        });

        let summaries = summarize(&table);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].count, 3);
    }

    #[test]
    fn test_summarize_empty_table() {
        let table = ResultTable::new(vec!["Skill".to_string()]);
        let summaries = summarize(&table);
        assert_eq!(summaries[0].count, 0);
        assert!(summaries[0].mean.is_nan());
    }

    #[test]
    fn test_format_result_table_aligns_columns() {
        let text = format_result_table(&sample_table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("smith"));
        // Header and rows share the same column positions
        let header_skill = lines[0].find("Skill").unwrap();
        assert_eq!(lines[1].find("4.00").unwrap(), header_skill);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(4.0), "4.00");
        assert_eq!(format_value(3.456), "3.46");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
