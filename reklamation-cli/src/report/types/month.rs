//! Report month selection

use std::fmt;

/// Calendar month the report is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Get all variants in calendar order
    pub fn all_variants() -> &'static [Month] {
        &[
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }

    /// English month name as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Month number, 1-12
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Exact (case-sensitive) lookup by English name
    pub fn from_name(name: &str) -> Option<Month> {
        Month::all_variants()
            .iter()
            .copied()
            .find(|m| m.name() == name)
    }

    /// Resolve the requested month name.
    ///
    /// A missing or unknown name falls back to January with a warning.
    pub fn resolve(name: Option<&str>) -> Month {
        match name {
            None => Month::January,
            Some(n) => match Month::from_name(n) {
                Some(m) => m,
                None => {
                    log::warn!(
                        "Unrecognized month '{}', falling back to {} (valid: {})",
                        n,
                        Month::January,
                        Month::all_variants()
                            .iter()
                            .map(|m| m.name())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    Month::January
                }
            },
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
