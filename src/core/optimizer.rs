use bon::Builder;

use crate::{
    core::{allocation::Allocation, quote::Quote, rate_card::RateCard},
    prelude::*,
    quantity::{cost::Cost, days::Days},
};

/// No billing tier has a rate, so the cost cannot be computed.
///
/// Distinct from a zero-cost quote: callers render «cost unknown» for this.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
#[display("none of the billing tiers has a rate")]
pub struct NoRateAvailable;

/// Finds the cheapest combination of monthly, weekly and daily billing blocks
/// covering a usage duration.
///
/// Enumerates every bounded block combination instead of trusting the
/// largest-unit-first greedy order, so rate cards where a larger block is worse
/// value per day still quote correctly.
#[derive(Builder)]
pub struct Optimizer {
    rate_card: RateCard,
    total_days: Days,
}

impl Optimizer {
    #[instrument(skip_all, fields(total_days = %self.total_days))]
    pub fn run(self) -> Result<Quote, NoRateAvailable> {
        if self.total_days == Days::ZERO {
            return Ok(Quote::ZERO);
        }
        let (allocation, total_cost) = Allocation::candidates(self.total_days, self.rate_card)
            .filter_map(|allocation| Some((allocation, allocation.cost(self.rate_card)?)))
            .min_by_key(|(_, cost)| *cost)
            .ok_or(NoRateAvailable)?;
        trace!(%allocation, %total_cost, "optimised");
        let savings = self
            .rate_card
            .daily
            .map_or(Cost::ZERO, |daily| (daily * self.total_days - total_cost).max(Cost::ZERO));
        Ok(Quote { allocation, total_cost, savings })
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

    fn quote(total_days: u32, rate_card: RateCard) -> Quote {
        Optimizer::builder().rate_card(rate_card).total_days(Days(total_days)).build().run().unwrap()
    }

    #[test]
    fn zero_days_is_free() {
        let quote = quote(0, FULL_CARD);
        assert_eq!(quote.total_cost, Cost::ZERO);
        assert_eq!(quote.savings, Cost::ZERO);
    }

    #[test]
    fn zero_days_without_rates_is_free_too() {
        let quote = quote(0, RateCard::default());
        assert_eq!(quote.total_cost, Cost::ZERO);
    }

    #[test]
    fn no_rates_is_unpriceable() {
        let error = Optimizer::builder()
            .rate_card(RateCard::default())
            .total_days(Days(1))
            .build()
            .run()
            .unwrap_err();
        assert_eq!(error, NoRateAvailable);
    }

    #[test]
    fn whole_month_beats_daily_billing() {
        let quote = quote(30, FULL_CARD);
        assert_eq!(quote.allocation, Allocation { months: 1, weeks: 0, days: 0 });
        assert_eq!(quote.total_cost, Cost(20000.0));
        assert_eq!(quote.savings, Cost(10000.0));
    }

    #[test]
    fn week_plus_leftover_days() {
        let quote = quote(10, FULL_CARD);
        assert_eq!(quote.allocation, Allocation { months: 0, weeks: 1, days: 3 });
        assert_eq!(quote.total_cost, Cost(9000.0));
        assert_eq!(quote.savings, Cost(1000.0));
    }

    #[test]
    fn daily_wins_when_a_week_is_dearer() {
        let quote = quote(5, FULL_CARD);
        assert_eq!(quote.allocation, Allocation { months: 0, weeks: 0, days: 5 });
        assert_eq!(quote.total_cost, Cost(5000.0));
        assert_eq!(quote.savings, Cost::ZERO);
    }

    #[test]
    fn partial_week_rounds_up_when_cheaper() {
        let rate_card =
            RateCard { daily: Some(Cost(1300.0)), weekly: Some(Cost(6000.0)), monthly: None };
        let quote = quote(5, rate_card);
        assert_eq!(quote.allocation, Allocation { months: 0, weeks: 1, days: 0 });
        assert_eq!(quote.total_cost, Cost(6000.0));
        assert_eq!(quote.savings, Cost(500.0));
    }

    /// Days without a daily rate must still be billed, by rounding up to the
    /// smallest larger block that covers them.
    #[test]
    fn monthly_only_card_rounds_up() {
        let rate_card = RateCard { daily: None, weekly: None, monthly: Some(Cost(20000.0)) };
        let quote = quote(45, rate_card);
        assert_eq!(quote.allocation, Allocation { months: 2, weeks: 0, days: 0 });
        assert!(quote.allocation.covered_days() >= 45);
        assert_eq!(quote.total_cost, Cost(40000.0));
        assert_eq!(quote.savings, Cost::ZERO);
    }

    /// A monthly block that is worse value per day than weekly blocks must be
    /// skipped, which the greedy largest-unit-first order would get wrong.
    #[test]
    fn overpriced_month_is_skipped() {
        let rate_card = RateCard {
            daily: Some(Cost(1000.0)),
            weekly: Some(Cost(4000.0)),
            monthly: Some(Cost(20000.0)),
        };
        let quote = quote(30, rate_card);
        assert_eq!(quote.allocation, Allocation { months: 0, weeks: 4, days: 2 });
        assert_eq!(quote.total_cost, Cost(18000.0));
        assert_eq!(quote.savings, Cost(12000.0));
    }

    #[test]
    fn never_worse_than_daily_billing() {
        for total_days in 0..=120 {
            let quote = quote(total_days, FULL_CARD);
            assert!(quote.total_cost >= Cost::ZERO);
            assert!(quote.savings >= Cost::ZERO);
            assert!(quote.total_cost <= Cost(1000.0) * total_days);
            assert!(quote.allocation.covered_days() >= total_days);
        }
    }

    #[test]
    fn every_day_is_billed_without_a_daily_rate() {
        let rate_card =
            RateCard { daily: None, weekly: Some(Cost(6000.0)), monthly: Some(Cost(20000.0)) };
        for total_days in 1..=120 {
            let quote = quote(total_days, rate_card);
            assert!(quote.allocation.covered_days() >= total_days);
            assert!(quote.total_cost > Cost::ZERO);
        }
    }
}
