use serde::{Deserialize, Serialize};

use crate::quantity::cost::Cost;

/// Billing options for one rentable resource.
///
/// `None` means the tier is not offered. The backend's legacy convention of
/// «zero means not offered» is normalized away by [`RateCard::validated`],
/// which every data boundary calls.
#[derive(Copy, Clone, Debug, Default, Deserialize, Serialize)]
pub struct RateCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Cost>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<Cost>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<Cost>,
}

impl RateCard {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.daily.is_none() && self.weekly.is_none() && self.monthly.is_none()
    }

    /// Normalize zero rates to «not offered» and reject invalid amounts.
    pub fn validated(self) -> Result<Self, RateError> {
        Ok(Self {
            daily: check(Tier::Daily, self.daily)?,
            weekly: check(Tier::Weekly, self.weekly)?,
            monthly: check(Tier::Monthly, self.monthly)?,
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Tier {
    #[display("monthly")]
    Monthly,

    #[display("weekly")]
    Weekly,

    #[display("daily")]
    Daily,
}

#[derive(Copy, Clone, Debug, PartialEq, derive_more::Display, derive_more::Error)]
pub enum RateError {
    #[display("{tier} rate is not a finite amount")]
    NonFinite { tier: Tier },

    #[display("{tier} rate is negative: {amount}")]
    Negative { tier: Tier, amount: f64 },
}

fn check(tier: Tier, rate: Option<Cost>) -> Result<Option<Cost>, RateError> {
    match rate {
        None => Ok(None),
        Some(amount) if !amount.0.is_finite() => Err(RateError::NonFinite { tier }),
        Some(amount) if amount.0 < 0.0 => Err(RateError::Negative { tier, amount: amount.0 }),
        Some(amount) if amount.0 == 0.0 => Ok(None), // legacy «not offered» marker
        Some(amount) => Ok(Some(amount)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_means_not_offered() {
        let rates = RateCard { daily: Some(Cost(0.0)), weekly: Some(Cost(6000.0)), monthly: None }
            .validated()
            .unwrap();
        assert_eq!(rates.daily, None);
        assert_eq!(rates.weekly, Some(Cost(6000.0)));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let error = RateCard { daily: None, weekly: Some(Cost(-1.0)), monthly: None }
            .validated()
            .unwrap_err();
        assert_eq!(error, RateError::Negative { tier: Tier::Weekly, amount: -1.0 });
    }

    #[test]
    fn non_finite_rate_is_rejected() {
        let error = RateCard { daily: Some(Cost(f64::NAN)), weekly: None, monthly: None }
            .validated()
            .unwrap_err();
        assert_eq!(error, RateError::NonFinite { tier: Tier::Daily });
    }

    #[test]
    fn missing_fields_deserialize_as_not_offered() {
        // language=toml
        let rates: RateCard = toml::from_str("daily = 54000.0").unwrap();
        assert_eq!(rates.daily, Some(Cost(54000.0)));
        assert!(rates.weekly.is_none());
        assert!(rates.monthly.is_none());
    }
}
