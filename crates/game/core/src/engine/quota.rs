//! Daily action allowance.
//!
//! A day is the UTC calendar date. The stored counter only counts while the
//! last quota-consuming action happened on the same date as `today`; any
//! other date means a fresh day.

use chrono::NaiveDate;

use crate::action::ActionError;
use crate::state::Monster;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyQuota {
    limit: u32,
}

impl DailyQuota {
    pub const fn new(limit: u32) -> Self {
        Self { limit }
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Actions already spent on `today`.
    pub fn used(&self, monster: &Monster, today: NaiveDate) -> u32 {
        match monster.last_action_date() {
            Some(date) if date == today => monster.actions_today,
            _ => 0,
        }
    }

    pub fn remaining(&self, monster: &Monster, today: NaiveDate) -> u32 {
        self.limit.saturating_sub(self.used(monster, today))
    }

    /// Returns the effective count for `today`, or `QuotaExceeded` once the
    /// limit is reached.
    pub fn check(&self, monster: &Monster, today: NaiveDate) -> Result<u32, ActionError> {
        let used = self.used(monster, today);
        if used >= self.limit {
            return Err(ActionError::QuotaExceeded { limit: self.limit });
        }
        Ok(used)
    }
}
