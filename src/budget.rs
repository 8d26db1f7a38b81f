//! Budget engine: fixed salary constants and the pure arithmetic derived
//! from them. No state beyond the constants themselves.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::BudgetError;

/// Fixed monthly salary model. Defaults carry the figures of the original
/// deployment: a 30 000 gross salary minus a 9 750 deduction, a 3 000
/// monthly set-aside, and a 29.3-day average month used only for vacation
/// pay proration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    pub salary: i64,
    pub savings_reserve: i64,
    pub avg_days_per_month: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            salary: 30_000 - 9_750,
            savings_reserve: 3_000,
            avg_days_per_month: 29.3,
        }
    }
}

impl BudgetConfig {
    /// Reads overrides from a JSON config file; a missing file yields the
    /// defaults, a malformed one is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, BudgetError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// What is left to spend each month after the savings set-aside.
    pub fn monthly_allowance(&self) -> i64 {
        self.salary - self.savings_reserve
    }

    /// Allowance split over the true day count of one month.
    pub fn daily_budget(&self, days_in_month: u32) -> i64 {
        self.monthly_allowance() / i64::from(days_in_month)
    }

    /// Vacation pay for `days` calendar days, prorated over the average
    /// month length. Truncates toward zero: currency has no sub-unit here.
    pub fn vacation_bonus(&self, days: u32) -> i64 {
        (f64::from(days) * (self.salary as f64 / self.avg_days_per_month)) as i64
    }

    /// Monthly pay when `vacation_working_days` of the month's
    /// `working_days_in_month` are spent on a `vacation_days`-long vacation.
    pub fn salary_with_vacation(
        &self,
        vacation_days: u32,
        vacation_working_days: u32,
        working_days_in_month: u32,
    ) -> Result<i64, BudgetError> {
        if working_days_in_month == 0 {
            return Err(BudgetError::InvalidArgument(
                "working days in month must be greater than zero".into(),
            ));
        }
        let worked = (self.salary / i64::from(working_days_in_month))
            * (i64::from(working_days_in_month) - i64::from(vacation_working_days));
        Ok(worked + self.vacation_bonus(vacation_days))
    }
}
