use std::fmt::{Display, Formatter};

use bon::Builder;
use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::core::rate_card::RateCard;

/// Rentable resource category.
#[derive(Debug, clap::ValueEnum, enumset::EnumSetType, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    /// Excavators, cranes, compactors and the like.
    #[serde(alias = "heavy_machinery")]
    HeavyMachinery,

    /// Trucks and site vehicles.
    Vehicle,
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeavyMachinery => write!(f, "Heavy machinery"),
            Self::Vehicle => write!(f, "Vehicle"),
        }
    }
}

impl ResourceKind {
    pub const fn color(self) -> Color {
        match self {
            Self::HeavyMachinery => Color::DarkYellow,
            Self::Vehicle => Color::Cyan,
        }
    }
}

/// One rentable machine or vehicle with its rate card.
#[derive(Builder, Clone, Debug, Deserialize, Serialize)]
pub struct Resource {
    pub id: String,

    pub name: String,

    pub kind: ResourceKind,

    #[serde(default)]
    pub rates: RateCard,
}
