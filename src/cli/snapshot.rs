use std::path::PathBuf;

use clap::Parser;

use crate::{
    api::inventory::Inventory,
    cli::yard::YardArgs,
    depot::{Depot, DepotResource},
    prelude::*,
};

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Where to write the depot file.
    #[clap(long, env = "DEPOT_PATH", default_value = "depot.toml")]
    pub output: PathBuf,

    #[clap(flatten)]
    pub yard: YardArgs,
}

#[instrument(skip_all)]
pub async fn snapshot(args: &SnapshotArgs) -> Result {
    let yard = args.yard.connect()?;
    let resources = yard.list_resources().await?;
    info!(n_resources = resources.len(), "fetched the fleet");

    let mut depot = Depot::default();
    for resource in resources {
        let usage_periods = yard.list_usage_periods(&resource.id).await?;
        depot.resources.push(DepotResource::new(resource, usage_periods));
    }
    depot.write(&args.output)?;
    info!(path = %args.output.display(), "saved");
    Ok(())
}
