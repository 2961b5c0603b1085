//! Core types for the report pipeline

mod cell;
mod month;
mod section;
mod table;

pub use cell::Cell;
pub use month::Month;
pub use section::Section;
pub use table::{Table, row_cell};
