use std::path::PathBuf;

use clap::Parser;
use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    api::inventory::Inventory,
    cli::yard::YardArgs,
    core::{optimizer::Optimizer, resource::ResourceKind},
    depot::Depot,
    prelude::*,
    quantity::days::Days,
    statistics::SurveyRow,
    tables::{build_survey_table, build_totals_table},
};

#[derive(Parser)]
pub struct SurveyArgs {
    /// Read the fleet from a local depot file instead of the yard service.
    #[clap(long, env = "DEPOT_PATH")]
    pub depot: Option<PathBuf>,

    /// Resource categories to include.
    #[clap(
        long = "kinds",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "heavy-machinery,vehicle",
    )]
    pub kinds: Vec<ResourceKind>,

    #[clap(flatten)]
    pub yard: YardArgs,
}

impl SurveyArgs {
    #[must_use]
    pub fn kinds(&self) -> EnumSet<ResourceKind> {
        self.kinds.iter().copied().collect()
    }

    fn inventory(&self) -> Result<Box<dyn Inventory>> {
        Ok(match &self.depot {
            Some(path) => Box::new(Depot::read(path)?),
            None => Box::new(self.yard.connect()?),
        })
    }
}

#[instrument(skip_all)]
pub async fn survey(args: &SurveyArgs) -> Result {
    let inventory = args.inventory()?;
    let kinds = args.kinds();

    let resources = inventory.list_resources().await?;
    info!(n_resources = resources.len(), "fetched the fleet");
    let resources =
        resources.into_iter().filter(|resource| kinds.contains(resource.kind)).collect_vec();
    ensure!(!resources.is_empty(), "no resources match the requested categories");

    let mut rows = Vec::with_capacity(resources.len());
    for resource in resources {
        let periods = inventory.list_usage_periods(&resource.id).await?;
        let total_days = periods
            .iter()
            .map(|period| period.n_days())
            .sum::<Result<Days, _>>()
            .with_context(|| format!("bad usage period for resource `{}`", resource.id))?;
        let quote = match Optimizer::builder()
            .rate_card(resource.rates)
            .total_days(total_days)
            .build()
            .run()
        {
            Ok(quote) => Some(quote),
            Err(error) => {
                warn!(id = %resource.id, %error, "cost unknown");
                None
            }
        };
        rows.push(SurveyRow { resource, total_days, quote });
    }

    println!("{}", build_survey_table(&rows));
    println!("{}", build_totals_table(&rows));
    Ok(())
}
