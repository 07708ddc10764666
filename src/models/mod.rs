pub mod band;
pub mod table;

pub use band::*;
pub use table::*;
