use clap::Parser;

use crate::{
    core::{optimizer::Optimizer, rate_card::RateCard},
    prelude::*,
    quantity::{cost::Cost, days::Days},
    tables::build_quote_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// Total number of chargeable days.
    #[clap(long)]
    pub days: Days,

    /// Daily rate. Zero or omitted means the tier is not offered.
    #[clap(long)]
    pub daily: Option<Cost>,

    /// Weekly rate. Zero or omitted means the tier is not offered.
    #[clap(long)]
    pub weekly: Option<Cost>,

    /// Monthly rate. Zero or omitted means the tier is not offered.
    #[clap(long)]
    pub monthly: Option<Cost>,
}

impl EstimateArgs {
    fn rate_card(&self) -> Result<RateCard> {
        RateCard { daily: self.daily, weekly: self.weekly, monthly: self.monthly }
            .validated()
            .context("bad rate card")
    }
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs) -> Result {
    let rates = args.rate_card()?;
    let quote = Optimizer::builder()
        .rate_card(rates)
        .total_days(args.days)
        .build()
        .run()
        .context("cannot quote: the rate card offers no billing tier")?;
    info!(billed = %quote.total_cost, savings = %quote.savings, "optimised");
    println!("{}", build_quote_table(args.days, rates, quote));
    Ok(())
}
