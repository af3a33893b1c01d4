use crate::{core::allocation::Allocation, quantity::cost::Cost};

/// The cheapest billing found for a usage duration.
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct Quote {
    pub allocation: Allocation,

    pub total_cost: Cost,

    /// Versus billing every day at the daily rate; zero when no daily rate is offered.
    pub savings: Cost,
}

impl Quote {
    /// Nothing to bill.
    pub const ZERO: Self =
        Self { allocation: Allocation::NONE, total_cost: Cost::ZERO, savings: Cost::ZERO };
}
