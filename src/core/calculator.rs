use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{
        baseline::Baseline,
        key_change::KeyChange,
        scenario::{
            BatteryCycling,
            CoolingFlexibility,
            LoadProfile,
            PriceProfile,
            PvAvailability,
            ScenarioInputs,
        },
    },
    prelude::*,
    quantity::{
        carbon::CarbonIntensity,
        cost::Cost,
        energy::KilowattHours,
        percentage::Percentage,
    },
};

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct ScenarioResults {
    /// Projected daily cost, whole currency units.
    pub daily_cost: Cost,

    /// Final cost relative to the baseline, one decimal.
    pub cost_vs_baseline: Percentage,

    /// Average carbon intensity, whole grams per kilowatt-hour.
    pub avg_co2: CarbonIntensity,

    pub battery_throughput: KilowattHours,

    /// Annotations in the order the adjustments were applied.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub key_changes: Vec<KeyChange>,
}

/// Project the daily cost and carbon intensity of the scenario.
///
/// Starts from the [`Baseline`] and applies a fixed sequence of multiplicative adjustments:
/// price profile, load profile, PV availability, battery cycling, GPU shifting,
/// cooling flexibility, and finally the CO₂ limit.
#[instrument(level = "debug", skip_all, fields(scenario = %inputs.name))]
pub fn calculate(inputs: &ScenarioInputs) -> ScenarioResults {
    let mut cost = Baseline::DAILY_COST;
    let mut co2 = Baseline::CARBON_INTENSITY;
    let mut key_changes = Vec::new();

    match inputs.price_profile {
        PriceProfile::BaseCase => {}
        PriceProfile::HighPeakPrices => {
            cost *= 1.25;
            key_changes.push(KeyChange::HighPeakPrices);
        }
        PriceProfile::LowOffPeakPrices => {
            cost *= 0.85;
            key_changes.push(KeyChange::LowOffPeakPrices);
        }
    }

    match inputs.load_profile {
        LoadProfile::Normal => {}
        LoadProfile::HighAiTrainingLoad => {
            cost *= 1.15;
            co2 *= 1.12;
            key_changes.push(KeyChange::HighAiTrainingLoad);
        }
        LoadProfile::WeekendProfile => {
            cost *= 0.70;
            co2 *= 0.75;
            key_changes.push(KeyChange::WeekendLoad);
        }
    }

    match inputs.pv_availability {
        PvAvailability::Sunny => {
            cost *= 0.88;
            co2 *= 0.82;
            key_changes.push(KeyChange::SunnyPv);
        }
        PvAvailability::Cloudy => {
            cost *= 1.08;
            co2 *= 1.15;
            key_changes.push(KeyChange::CloudyPv);
        }
        PvAvailability::LowInsolation => {
            cost *= 1.18;
            co2 *= 1.25;
            key_changes.push(KeyChange::LowInsolationPv);
        }
    }

    let battery_throughput = match inputs.battery_cycling {
        BatteryCycling::High => {
            cost *= 0.92;
            key_changes.push(KeyChange::HighBatteryCycling);
            KilowattHours::new(2400.0)
        }
        BatteryCycling::Low => {
            cost *= 1.05;
            key_changes.push(KeyChange::LowBatteryCycling);
            KilowattHours::new(600.0)
        }
        BatteryCycling::Medium => {
            key_changes.push(KeyChange::MediumBatteryCycling);
            KilowattHours::new(1200.0)
        }
    };

    if inputs.allow_gpu_shifting {
        cost *= 0.87;
        co2 *= 0.91;
        key_changes.push(KeyChange::GpuShifting);
    }

    match inputs.cooling_flexibility {
        CoolingFlexibility::Aggressive => {
            cost *= 0.94;
            key_changes.push(KeyChange::AggressiveCooling);
        }
        CoolingFlexibility::Conservative => {
            cost *= 0.99;
            key_changes.push(KeyChange::ConservativeCooling);
        }
        CoolingFlexibility::Balanced => {
            key_changes.push(KeyChange::BalancedCooling);
        }
    }

    // The cap applies to the fully adjusted intensity.
    if inputs.limit_co2 {
        co2 = co2.min(Baseline::CARBON_INTENSITY_CAP);
        cost *= 1.08;
        key_changes.push(KeyChange::Co2Limit);
    }

    if key_changes.is_empty() {
        key_changes.push(KeyChange::NoChanges);
    }

    debug!(?cost, ?co2, n_key_changes = key_changes.len(), "calculated");
    ScenarioResults {
        daily_cost: cost.round(),
        cost_vs_baseline: Percentage::from_ratio(
            (cost - Baseline::DAILY_COST) / Baseline::DAILY_COST,
        )
        .round_to_tenths(),
        avg_co2: co2.round(),
        battery_throughput,
        key_changes,
    }
}
