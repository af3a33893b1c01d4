use async_trait::async_trait;

use crate::{
    core::{period::UsagePeriod, resource::Resource},
    prelude::*,
};

/// Source of fleet records: the yard service or a local depot snapshot.
#[async_trait]
pub trait Inventory: Sync {
    async fn list_resources(&self) -> Result<Vec<Resource>>;

    /// Scheduled usage periods of one resource, in no particular order.
    async fn list_usage_periods(&self, resource_id: &str) -> Result<Vec<UsagePeriod>>;
}
