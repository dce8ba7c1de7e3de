//! Mock trip generation and result ordering.

mod config;
mod generator;
mod sort;

pub use config::GeneratorConfig;
pub use generator::generate;
pub use sort::{SortKey, UnknownSortKey, sort_trips};
