use chrono::{Datelike, NaiveDate};

/// True day count of the month containing `date`, leap-aware. Distinct from
/// the fixed average month length used for vacation-pay proration.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_of_next
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn knows_month_lengths() {
        assert_eq!(days_in_month(date(2023, 1, 15)), 31);
        assert_eq!(days_in_month(date(2023, 4, 1)), 30);
        assert_eq!(days_in_month(date(2023, 12, 31)), 31);
    }

    #[test]
    fn february_is_leap_aware() {
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
    }
}
