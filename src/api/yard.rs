//! Client for the yard service, the company's resource-management backend.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    api::inventory::Inventory,
    core::{
        period::UsagePeriod,
        rate_card::RateCard,
        resource::{Resource, ResourceKind},
    },
    prelude::*,
    quantity::cost::Cost,
};

pub struct Api {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl Api {
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: Url, api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url, api_key })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).with_context(|| format!("invalid path `{path}`"))?;
        self.client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .await
            .with_context(|| format!("failed to call `{url}`"))?
            .error_for_status()
            .context("request failed")?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))
    }
}

#[async_trait]
impl Inventory for Api {
    #[instrument(skip_all)]
    async fn list_resources(&self) -> Result<Vec<Resource>> {
        let records: Vec<ResourceRecord> = self.get("resources").await?;
        info!(n_records = records.len(), "fetched");
        records.into_iter().map(ResourceRecord::into_resource).collect()
    }

    #[instrument(skip_all, fields(resource_id = resource_id))]
    async fn list_usage_periods(&self, resource_id: &str) -> Result<Vec<UsagePeriod>> {
        let records: Vec<UsagePeriodRecord> =
            self.get(&format!("resources/{resource_id}/usage-periods")).await?;
        Ok(records.into_iter().map(UsagePeriodRecord::into_period).collect())
    }
}

/// Resource row as the backend returns it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceRecord {
    id: String,
    name: String,
    category: ResourceKind,

    #[serde(default)]
    daily_rate: Option<Cost>,

    #[serde(default)]
    weekly_rate: Option<Cost>,

    #[serde(default)]
    monthly_rate: Option<Cost>,
}

impl ResourceRecord {
    fn into_resource(self) -> Result<Resource> {
        let rates =
            RateCard { daily: self.daily_rate, weekly: self.weekly_rate, monthly: self.monthly_rate }
                .validated()
                .with_context(|| format!("bad rate card for resource `{}`", self.id))?;
        Ok(Resource { id: self.id, name: self.name, kind: self.category, rates })
    }
}

/// Usage period row as the backend returns it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsagePeriodRecord {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl UsagePeriodRecord {
    fn into_period(self) -> UsagePeriod {
        UsagePeriod::new(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::days::Days;

    #[test]
    fn resource_record_ok() -> Result {
        // language=json
        let body = r#"{
            "id": "hm-0012",
            "name": "20t excavator",
            "category": "heavy_machinery",
            "dailyRate": 54000,
            "weeklyRate": 302400,
            "monthlyRate": 0,
            "currentSiteId": "site-04",
            "createdAt": "2026-04-02T09:15:00Z"
        }"#;
        let resource = serde_json::from_str::<ResourceRecord>(body)?.into_resource()?;
        assert_eq!(resource.kind, ResourceKind::HeavyMachinery);
        assert_eq!(resource.rates.daily, Some(Cost(54000.0)));
        assert_eq!(resource.rates.weekly, Some(Cost(302400.0)));
        // Zero means the tier is not offered:
        assert_eq!(resource.rates.monthly, None);
        Ok(())
    }

    #[test]
    fn absent_rates_mean_not_offered() -> Result {
        // language=json
        let body = r#"{"id": "v-3", "name": "Dump truck", "category": "vehicle", "dailyRate": null}"#;
        let resource = serde_json::from_str::<ResourceRecord>(body)?.into_resource()?;
        assert_eq!(resource.kind, ResourceKind::Vehicle);
        assert!(resource.rates.is_empty());
        Ok(())
    }

    #[test]
    fn negative_rate_is_rejected() -> Result {
        // language=json
        let body = r#"{"id": "v-3", "name": "Dump truck", "category": "vehicle", "dailyRate": -100}"#;
        let record: ResourceRecord = serde_json::from_str(body)?;
        assert!(record.into_resource().is_err());
        Ok(())
    }

    #[test]
    fn usage_period_record_ok() -> Result {
        // language=json
        let body = r#"{"startDate": "2026-06-01", "endDate": "2026-06-10", "dealId": "deal-77"}"#;
        let period = serde_json::from_str::<UsagePeriodRecord>(body)?.into_period();
        assert_eq!(period.n_days()?, Days(10));
        Ok(())
    }
}
