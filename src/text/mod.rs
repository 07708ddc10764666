pub mod analyzer;
pub mod normalizer;

pub use analyzer::{Analyzer, EnglishAnalyzer, Token};
pub use normalizer::Normalizer;
