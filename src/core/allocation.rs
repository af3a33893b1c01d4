use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{
    core::rate_card::RateCard,
    quantity::{cost::Cost, days::Days},
};

/// Chargeable days in one billing month, per the rental rate tiering convention.
pub const DAYS_PER_MONTH: u32 = 30;

/// Chargeable days in one billing week.
pub const DAYS_PER_WEEK: u32 = 7;

/// A combination of whole billing blocks.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Allocation {
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
}

impl Allocation {
    pub const NONE: Self = Self { months: 0, weeks: 0, days: 0 };

    /// Every block combination worth considering for the duration.
    ///
    /// Months range up to ⌈days ∕ 30⌉ and weeks up to ⌈remainder ∕ 7⌉, so
    /// over-covering candidates (one more week or month than the leftover days)
    /// are included, while combinations that would leave days unbilled are not.
    pub fn candidates(total_days: Days, rates: RateCard) -> impl Iterator<Item = Self> {
        let n_months =
            if rates.monthly.is_some() { total_days.0.div_ceil(DAYS_PER_MONTH) } else { 0 };
        (0..=n_months).flat_map(move |months| {
            let remainder = total_days.0.saturating_sub(months * DAYS_PER_MONTH);
            let n_weeks =
                if rates.weekly.is_some() { remainder.div_ceil(DAYS_PER_WEEK) } else { 0 };
            (0..=n_weeks).filter_map(move |weeks| {
                let days = remainder.saturating_sub(weeks * DAYS_PER_WEEK);
                (days == 0 || rates.daily.is_some()).then_some(Self { months, weeks, days })
            })
        })
    }

    /// Total cost of the blocks, `None` if a needed tier is not offered.
    pub fn cost(self, rates: RateCard) -> Option<Cost> {
        let months = match self.months {
            0 => Cost::ZERO,
            n => rates.monthly? * n,
        };
        let weeks = match self.weeks {
            0 => Cost::ZERO,
            n => rates.weekly? * n,
        };
        let days = match self.days {
            0 => Cost::ZERO,
            n => rates.daily? * n,
        };
        Some(months + weeks + days)
    }

    /// How many chargeable days the blocks pay for.
    #[must_use]
    pub const fn covered_days(self) -> u32 {
        self.months * DAYS_PER_MONTH + self.weeks * DAYS_PER_WEEK + self.days
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self == Self::NONE {
            return write!(f, "—");
        }
        let blocks = [(self.months, "mo"), (self.weeks, "wk"), (self.days, "d")];
        let blocks = blocks
            .iter()
            .filter(|(count, _)| *count != 0)
            .map(|(count, unit)| format!("{count} {unit}"))
            .join(" + ");
        write!(f, "{blocks}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CARD: RateCard = RateCard {
        daily: Some(Cost(1000.0)),
        weekly: Some(Cost(6000.0)),
        monthly: Some(Cost(20000.0)),
    };

    #[test]
    fn candidates_cover_every_day() {
        for candidate in Allocation::candidates(Days(45), FULL_CARD) {
            assert!(candidate.covered_days() >= 45, "{candidate:?} leaves days unbilled");
        }
    }

    #[test]
    fn candidates_skip_unoffered_tiers() {
        let weekly_only = RateCard { daily: None, weekly: Some(Cost(6000.0)), monthly: None };
        for candidate in Allocation::candidates(Days(10), weekly_only) {
            assert_eq!(candidate.months, 0);
            assert_eq!(candidate.days, 0);
        }
    }

    #[test]
    fn cost_requires_offered_tiers() {
        let allocation = Allocation { months: 1, weeks: 0, days: 0 };
        let weekly_only = RateCard { daily: None, weekly: Some(Cost(6000.0)), monthly: None };
        assert_eq!(allocation.cost(weekly_only), None);
        assert_eq!(allocation.cost(FULL_CARD), Some(Cost(20000.0)));
    }

    #[test]
    fn display() {
        assert_eq!(Allocation { months: 1, weeks: 0, days: 3 }.to_string(), "1 mo + 3 d");
        assert_eq!(Allocation::NONE.to_string(), "—");
    }
}
