//! Local TOML snapshot of the fleet, for offline surveys and test fixtures.

use std::{fs, path::Path};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    api::inventory::Inventory,
    core::{
        period::UsagePeriod,
        rate_card::RateCard,
        resource::{Resource, ResourceKind},
    },
    prelude::*,
};

#[derive(Default, Deserialize, Serialize)]
pub struct Depot {
    #[serde(default, rename = "resource")]
    pub resources: Vec<DepotResource>,
}

#[derive(Deserialize, Serialize)]
pub struct DepotResource {
    pub id: String,
    pub name: String,
    pub kind: ResourceKind,

    #[serde(default)]
    pub rates: RateCard,

    #[serde(default, rename = "usage_period")]
    pub usage_periods: Vec<UsagePeriod>,
}

impl DepotResource {
    pub fn new(resource: Resource, usage_periods: Vec<UsagePeriod>) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            kind: resource.kind,
            rates: resource.rates,
            usage_periods,
        }
    }

    fn resource(&self) -> Resource {
        Resource {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            rates: self.rates,
        }
    }
}

impl Depot {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        let mut depot: Self = toml::from_str(contents)?;
        for entry in &mut depot.resources {
            entry.rates = entry
                .rates
                .validated()
                .with_context(|| format!("bad rate card for resource `{}`", entry.id))?;
        }
        Ok(depot)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn write(&self, path: &Path) -> Result {
        let contents = toml::to_string_pretty(self).context("failed to serialize the depot")?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl Inventory for Depot {
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        Ok(self.resources.iter().map(DepotResource::resource).collect())
    }

    async fn list_usage_periods(&self, resource_id: &str) -> Result<Vec<UsagePeriod>> {
        Ok(self
            .resources
            .iter()
            .find(|entry| entry.id == resource_id)
            .map(|entry| entry.usage_periods.clone())
            .unwrap_or_default())
    }
}
