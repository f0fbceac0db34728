use std::{
    fmt::{Debug, Display},
    fs,
    path::Path,
};

use bon::Builder;
use clap::ValueEnum;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Scenario input dimension with a closed set of options.
pub trait Dimension: EnumSetType + ValueEnum + Display {
    const TITLE: &'static str;

    /// Short explanation of the option, as shown next to the selector.
    fn description(self) -> &'static str;
}

#[derive(Debug, Default, Deserialize, Serialize, ValueEnum, derive_more::Display, EnumSetType)]
pub enum PriceProfile {
    /// Standard utility pricing.
    #[default]
    #[display("Base case")]
    #[serde(rename = "Base case", alias = "base-case")]
    BaseCase,

    /// Stress test of the peak demand costs.
    #[display("High peak prices")]
    #[serde(rename = "High peak prices", alias = "high-peak-prices")]
    HighPeakPrices,

    /// Favorable off-peak rates.
    #[display("Low off-peak prices")]
    #[serde(rename = "Low off-peak prices", alias = "low-off-peak-prices")]
    LowOffPeakPrices,
}

impl Dimension for PriceProfile {
    const TITLE: &'static str = "Price profile";

    fn description(self) -> &'static str {
        match self {
            Self::BaseCase => "Standard utility pricing",
            Self::HighPeakPrices => "Stress test peak demand costs",
            Self::LowOffPeakPrices => "Favorable off-peak rates",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ValueEnum, derive_more::Display, EnumSetType)]
pub enum LoadProfile {
    /// Typical data-center operations.
    #[default]
    #[display("Normal")]
    #[serde(rename = "Normal", alias = "normal")]
    Normal,

    /// Heavy GPU utilization.
    #[display("High AI training load")]
    #[serde(rename = "High AI training load", alias = "high-ai-training-load")]
    HighAiTrainingLoad,

    /// Reduced weekend activity.
    #[display("Weekend profile")]
    #[serde(rename = "Weekend profile", alias = "weekend-profile")]
    WeekendProfile,
}

impl Dimension for LoadProfile {
    const TITLE: &'static str = "Load profile";

    fn description(self) -> &'static str {
        match self {
            Self::Normal => "Typical datacenter operations",
            Self::HighAiTrainingLoad => "Heavy GPU utilization",
            Self::WeekendProfile => "Reduced weekend activity",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ValueEnum, derive_more::Display, EnumSetType)]
pub enum PvAvailability {
    /// Maximum solar generation.
    #[default]
    #[display("Sunny")]
    #[serde(rename = "Sunny", alias = "sunny")]
    Sunny,

    /// Partial solar output.
    #[display("Cloudy")]
    #[serde(rename = "Cloudy", alias = "cloudy")]
    Cloudy,

    /// Minimal solar contribution.
    #[display("Low insolation")]
    #[serde(rename = "Low insolation", alias = "low-insolation")]
    LowInsolation,
}

impl Dimension for PvAvailability {
    const TITLE: &'static str = "PV availability";

    fn description(self) -> &'static str {
        match self {
            Self::Sunny => "Maximum solar generation",
            Self::Cloudy => "Partial solar output",
            Self::LowInsolation => "Minimal solar contribution",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ValueEnum, derive_more::Display, EnumSetType)]
pub enum BatteryCycling {
    /// Conservative cycling.
    #[display("Low")]
    #[serde(rename = "Low", alias = "low")]
    Low,

    /// Balanced approach.
    #[default]
    #[display("Medium")]
    #[serde(rename = "Medium", alias = "medium")]
    Medium,

    /// Aggressive cycling for peak shaving.
    #[display("High")]
    #[serde(rename = "High", alias = "high")]
    High,
}

impl Dimension for BatteryCycling {
    const TITLE: &'static str = "Battery cycling";

    fn description(self) -> &'static str {
        match self {
            Self::Low => "Conservative cycling (600 kWh)",
            Self::Medium => "Balanced approach (1,200 kWh)",
            Self::High => "Aggressive cycling (2,400 kWh)",
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, ValueEnum, derive_more::Display, EnumSetType)]
pub enum CoolingFlexibility {
    /// Minimal flexibility.
    #[display("Conservative")]
    #[serde(rename = "Conservative", alias = "conservative")]
    Conservative,

    /// Moderate flexibility.
    #[default]
    #[display("Balanced")]
    #[serde(rename = "Balanced", alias = "balanced")]
    Balanced,

    /// Maximum flexibility.
    #[display("Aggressive")]
    #[serde(rename = "Aggressive", alias = "aggressive")]
    Aggressive,
}

impl Dimension for CoolingFlexibility {
    const TITLE: &'static str = "Cooling flexibility";

    fn description(self) -> &'static str {
        match self {
            Self::Conservative => "Minimal flexibility (50 kW curtailment max)",
            Self::Balanced => "Moderate flexibility (150 kW curtailment)",
            Self::Aggressive => "Max flexibility (250 kW curtailment)",
        }
    }
}

/// One fully specified what-if scenario.
#[derive(Clone, Debug, PartialEq, Eq, Builder, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioInputs {
    /// Human-readable label, does not affect the calculation.
    #[builder(into, default = ScenarioInputs::DEFAULT_NAME.to_owned())]
    pub name: String,

    #[builder(default)]
    pub price_profile: PriceProfile,

    #[builder(default)]
    pub load_profile: LoadProfile,

    #[builder(default)]
    pub pv_availability: PvAvailability,

    #[builder(default)]
    pub battery_cycling: BatteryCycling,

    #[builder(default)]
    pub cooling_flexibility: CoolingFlexibility,

    /// Allow shifting non-critical GPU loads to off-peak hours.
    #[builder(default)]
    pub allow_gpu_shifting: bool,

    /// Keep the average carbon intensity at or below the cap.
    #[builder(default)]
    pub limit_co2: bool,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScenarioInputs {
    pub const DEFAULT_NAME: &'static str = "Base Scenario";

    /// Read the scenario from a TOML file.
    #[instrument(name = "reading the scenario…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the scenario from `{}`", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse the scenario from `{}`", path.display()))
    }
}
