pub mod aggregate;
pub mod error;
pub mod io;
pub mod models;
pub mod text;

pub use aggregate::{aggregate, discover, extract, validate, AggregateResult, RunSummary};
pub use error::AggregateError;
pub use io::{format_result_table, format_summary, load_survey_file, summarize, write_result_csv};
pub use models::{BandConfig, MetricBand, ResultTable, SurveyTable, TeacherRecord};
pub use text::{Analyzer, EnglishAnalyzer, Normalizer};
