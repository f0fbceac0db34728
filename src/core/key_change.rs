use std::fmt::{Display, Formatter};

/// Calculator stage, in the order the adjustments are applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    PriceProfile,
    LoadProfile,
    PvAvailability,
    BatteryCycling,
    GpuShifting,
    CoolingFlexibility,
    Co2Limit,

    /// Nothing deviated from the baseline.
    Baseline,
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceProfile => write!(f, "Price"),
            Self::LoadProfile => write!(f, "Load"),
            Self::PvAvailability => write!(f, "PV"),
            Self::BatteryCycling => write!(f, "Battery"),
            Self::GpuShifting => write!(f, "GPU"),
            Self::CoolingFlexibility => write!(f, "Cooling"),
            Self::Co2Limit => write!(f, "CO₂"),
            Self::Baseline => write!(f, "Baseline"),
        }
    }
}

/// Human-readable annotation of a single scenario adjustment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum KeyChange {
    #[display("Increased cost due to high peak prices (+25%)")]
    HighPeakPrices,

    #[display("Reduced cost with favorable off-peak rates (-15%)")]
    LowOffPeakPrices,

    #[display("Higher energy consumption from AI training workloads")]
    HighAiTrainingLoad,

    #[display("Reduced load during weekend operations")]
    WeekendLoad,

    #[display("Maximized solar generation reducing grid dependence")]
    SunnyPv,

    #[display("Reduced solar output increasing grid imports")]
    CloudyPv,

    #[display("Minimal solar generation, heavy grid reliance")]
    LowInsolationPv,

    #[display("Aggressive battery cycling for peak shaving (2,400 kWh)")]
    HighBatteryCycling,

    #[display("Conservative battery usage (600 kWh)")]
    LowBatteryCycling,

    #[display("Moderate battery cycling for cost optimization")]
    MediumBatteryCycling,

    #[display("Shifted 20% of GPU load to off-peak hours")]
    GpuShifting,

    #[display("Cooling load aggressively flexed during peak hours to reduce cost")]
    AggressiveCooling,

    #[display("Minimal cooling flexibility used to ensure comfort")]
    ConservativeCooling,

    #[display("Balanced cooling flexibility providing moderate DR capacity")]
    BalancedCooling,

    #[display("Applied CO₂ constraint (max 320 gCO₂/kWh)")]
    Co2Limit,

    #[display("No changes from baseline scenario")]
    NoChanges,
}

impl KeyChange {
    pub const fn stage(self) -> Stage {
        match self {
            Self::HighPeakPrices | Self::LowOffPeakPrices => Stage::PriceProfile,
            Self::HighAiTrainingLoad | Self::WeekendLoad => Stage::LoadProfile,
            Self::SunnyPv | Self::CloudyPv | Self::LowInsolationPv => Stage::PvAvailability,
            Self::HighBatteryCycling | Self::LowBatteryCycling | Self::MediumBatteryCycling => {
                Stage::BatteryCycling
            }
            Self::GpuShifting => Stage::GpuShifting,
            Self::AggressiveCooling | Self::ConservativeCooling | Self::BalancedCooling => {
                Stage::CoolingFlexibility
            }
            Self::Co2Limit => Stage::Co2Limit,
            Self::NoChanges => Stage::Baseline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            KeyChange::LowOffPeakPrices.to_string(),
            "Reduced cost with favorable off-peak rates (-15%)",
        );
        assert_eq!(
            KeyChange::Co2Limit.to_string(),
            "Applied CO₂ constraint (max 320 gCO₂/kWh)",
        );
        assert_eq!(KeyChange::NoChanges.to_string(), "No changes from baseline scenario");
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::PriceProfile < Stage::LoadProfile);
        assert!(Stage::GpuShifting < Stage::CoolingFlexibility);
        assert!(Stage::CoolingFlexibility < Stage::Co2Limit);
    }
}
