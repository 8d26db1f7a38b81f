use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month used as the ledger bucket key. Year-agnostic: transactions
/// are filed by month-of-year only.
///
/// Declaration order is calendar order, so the derived `Ord` makes a
/// `BTreeMap<Month, _>` iterate January through December. The serde form is
/// the uppercase token (`"JANUARY"`), which is what the snapshot file stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
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

pub const ALL_MONTHS: [Month; 12] = [
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
];

impl Month {
    /// Canonical display label, also the accepted `FromStr` spelling.
    pub fn label(self) -> &'static str {
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

    /// Maps a chrono month number (1-12) onto the enum.
    pub fn from_number(number: u32) -> Option<Month> {
        ALL_MONTHS.get(number.checked_sub(1)? as usize).copied()
    }

    pub fn from_date(date: NaiveDate) -> Month {
        // `Datelike::month` is always 1-12.
        Month::from_number(date.month()).unwrap_or(Month::January)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-sensitive parse of the canonical label (`"January"`, not `"january"`).
impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_MONTHS
            .iter()
            .copied()
            .find(|month| month.label() == s)
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown month `{0}`")]
pub struct UnknownMonth(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_order_chronologically() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
        let mut sorted = ALL_MONTHS;
        sorted.sort();
        assert_eq!(sorted, ALL_MONTHS);
    }

    #[test]
    fn serde_uses_uppercase_tokens() {
        let json = serde_json::to_string(&Month::September).unwrap();
        assert_eq!(json, "\"SEPTEMBER\"");
        let back: Month = serde_json::from_str("\"FEBRUARY\"").unwrap();
        assert_eq!(back, Month::February);
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("December".parse::<Month>().unwrap(), Month::December);
        assert!("december".parse::<Month>().is_err());
        assert!("DECEMBER".parse::<Month>().is_err());
    }

    #[test]
    fn from_number_covers_calendar_range() {
        assert_eq!(Month::from_number(1), Some(Month::January));
        assert_eq!(Month::from_number(12), Some(Month::December));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }
}
