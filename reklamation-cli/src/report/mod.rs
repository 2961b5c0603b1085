//! Monthly complaint report: load, filter, aggregate, write

pub mod aggregate;
pub mod csv_exporter;
pub mod engine;
pub mod excel;
pub mod prepare;
pub mod types;

pub use engine::{MonthlyReport, PreparedData, ReportEngine};
pub use types::{Month, Section};
