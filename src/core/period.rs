use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::quantity::days::Days;

/// A contiguous date range during which a resource is assigned to a project.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[must_use]
pub struct UsagePeriod {
    /// Inclusive.
    pub starts_on: NaiveDate,

    /// Inclusive.
    pub ends_on: NaiveDate,
}

#[derive(Copy, Clone, Debug, derive_more::Display, derive_more::Error)]
#[display("usage period ends on {} before it starts on {}", _0.ends_on, _0.starts_on)]
pub struct InvalidPeriod(#[error(not(source))] pub UsagePeriod);

impl UsagePeriod {
    pub const fn new(starts_on: NaiveDate, ends_on: NaiveDate) -> Self {
        Self { starts_on, ends_on }
    }

    /// Inclusive day count, so a single-day assignment bills one day.
    pub fn n_days(self) -> Result<Days, InvalidPeriod> {
        if self.ends_on < self.starts_on {
            return Err(InvalidPeriod(self));
        }
        let n_days = (self.ends_on - self.starts_on).num_days() + 1;
        u32::try_from(n_days).map(Days).map_err(|_| InvalidPeriod(self))
    }
}
