use derive_more::AddAssign;
use enumset::EnumSet;

use crate::{
    core::{
        quote::Quote,
        resource::{Resource, ResourceKind},
    },
    quantity::{cost::Cost, days::Days},
};

/// One surveyed resource: its summed usage and the quote, when priceable.
pub struct SurveyRow {
    pub resource: Resource,
    pub total_days: Days,

    /// `None` when the resource has no usable rates («cost unknown»).
    pub quote: Option<Quote>,
}

/// Additive roll-up of survey rows.
#[derive(Copy, Clone, AddAssign)]
pub struct CostTotals {
    pub n_resources: usize,

    /// Resources with no usable rates, excluded from the money totals.
    pub n_unpriced: usize,

    pub total_days: Days,
    pub billed: Cost,
    pub naive_daily: Cost,
    pub savings: Cost,
}

impl Default for CostTotals {
    fn default() -> Self {
        Self {
            n_resources: 0,
            n_unpriced: 0,
            total_days: Days::ZERO,
            billed: Cost::ZERO,
            naive_daily: Cost::ZERO,
            savings: Cost::ZERO,
        }
    }
}

impl CostTotals {
    fn from_row(row: &SurveyRow) -> Self {
        let mut totals =
            Self { n_resources: 1, total_days: row.total_days, ..Self::default() };
        match row.quote {
            Some(quote) => {
                totals.billed = quote.total_cost;
                totals.savings = quote.savings;
                // Without a daily rate there is no naive baseline; count the billed
                // amount so that naive − billed still equals the savings.
                totals.naive_daily = row
                    .resource
                    .rates
                    .daily
                    .map_or(quote.total_cost, |daily| daily * row.total_days);
            }
            None => totals.n_unpriced = 1,
        }
        totals
    }
}

/// Fold the rows into per-category totals, in declaration order.
pub fn totals_per_kind(rows: &[SurveyRow]) -> Vec<(ResourceKind, CostTotals)> {
    EnumSet::all()
        .iter()
        .map(|kind| {
            let mut totals = CostTotals::default();
            for row in rows.iter().filter(|row| row.resource.kind == kind) {
                totals += CostTotals::from_row(row);
            }
            (kind, totals)
        })
        .collect()
}

pub fn fleet_totals(rows: &[SurveyRow]) -> CostTotals {
    let mut totals = CostTotals::default();
    for row in rows {
        totals += CostTotals::from_row(row);
    }
    totals
}
