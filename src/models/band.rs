use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A contiguous half-open range of row indices mapped to one output metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBand {
    /// Metric name, becomes a column header in the result table
    pub name: String,
    /// First row index covered by this band
    pub start: usize,
    /// One past the last row index covered by this band
    pub end: usize,
}

impl MetricBand {
    pub fn new(name: &str, start: usize, end: usize) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
        }
    }

    /// Number of rows this band covers
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl FromStr for MetricBand {
    type Err = String;

    /// Parse a `NAME=START..END` band argument, e.g. `Interaction=5..11`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, range) = s
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=START..END, got {s:?}"))?;
        let (start, end) = range
            .split_once("..")
            .ok_or_else(|| format!("expected START..END range, got {range:?}"))?;
        let start: usize = start
            .trim()
            .parse()
            .map_err(|_| format!("invalid band start {start:?}"))?;
        let end: usize = end
            .trim()
            .parse()
            .map_err(|_| format!("invalid band end {end:?}"))?;
        if end <= start {
            return Err(format!("band {name:?} is empty: {start}..{end}"));
        }
        Ok(MetricBand::new(name.trim(), start, end))
    }
}

/// Declarative list of metric bands, in output-column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub bands: Vec<MetricBand>,
}

impl BandConfig {
    pub fn new(bands: Vec<MetricBand>) -> Self {
        Self { bands }
    }

    /// Minimum number of data rows a table needs to satisfy every band
    pub fn min_rows(&self) -> usize {
        self.bands.iter().map(|b| b.end).max().unwrap_or(0)
    }

    /// Metric names in declaration order
    pub fn metric_names(&self) -> Vec<String> {
        self.bands.iter().map(|b| b.name.clone()).collect()
    }
}

impl Default for BandConfig {
    /// The standard survey layout: 21 rows split into four question groups
    fn default() -> Self {
        Self::new(vec![
            MetricBand::new("Instructor_Skill", 0, 5),
            MetricBand::new("Interaction", 5, 11),
            MetricBand::new("Student_Motivation", 11, 15),
            MetricBand::new("Course_Organization", 15, 21),
        ])
    }
}
