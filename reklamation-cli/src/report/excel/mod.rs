//! Excel input and output

mod reader;
mod workbook;
mod writer;

pub use reader::load_table;
pub use workbook::write_report;
pub use writer::write_table;
