pub mod input;
pub mod output;

pub use input::{load_survey_file, SCORE_COLUMN};
pub use output::{format_result_table, format_summary, summarize, write_result_csv, MetricSummary};
