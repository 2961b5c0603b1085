//! Fatal preparation stages: pruning, row filter, month filter, date normalization

mod dates;
mod filter;
mod month_filter;
mod prune;

pub use dates::normalize_dates;
pub use filter::filter_rows;
pub use month_filter::filter_month;
pub use prune::prune_columns;
