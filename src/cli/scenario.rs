use std::path::PathBuf;

use clap::Parser;

use crate::{
    core::scenario::{
        BatteryCycling,
        CoolingFlexibility,
        LoadProfile,
        PriceProfile,
        PvAvailability,
        ScenarioInputs,
    },
    prelude::*,
};

/// Scenario inputs: an optional file with explicit flags on top of it.
#[derive(Parser)]
pub struct ScenarioArgs {
    /// TOML file to load the scenario from, the defaults are used otherwise.
    #[clap(long = "scenario", env = "SCENARIO_FILE")]
    pub file: Option<PathBuf>,

    #[clap(long, env = "SCENARIO_NAME")]
    pub name: Option<String>,

    #[clap(long, env = "PRICE_PROFILE")]
    pub price_profile: Option<PriceProfile>,

    #[clap(long, env = "LOAD_PROFILE")]
    pub load_profile: Option<LoadProfile>,

    #[clap(long, env = "PV_AVAILABILITY")]
    pub pv_availability: Option<PvAvailability>,

    #[clap(long, env = "BATTERY_CYCLING")]
    pub battery_cycling: Option<BatteryCycling>,

    #[clap(long, env = "COOLING_FLEXIBILITY")]
    pub cooling_flexibility: Option<CoolingFlexibility>,

    /// Allow shifting non-critical GPU loads.
    #[clap(
        long,
        env = "ALLOW_GPU_SHIFTING",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_gpu_shifting: Option<bool>,

    /// Limit CO₂ intensity below 320 gCO₂/kWh.
    #[clap(
        long,
        env = "LIMIT_CO2",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub limit_co2: Option<bool>,
}

impl ScenarioArgs {
    pub fn try_into_inputs(self) -> Result<ScenarioInputs> {
        let mut inputs = match &self.file {
            Some(path) => ScenarioInputs::read_from(path)?,
            None => ScenarioInputs::default(),
        };
        if let Some(name) = self.name {
            inputs.name = name;
        }
        if let Some(price_profile) = self.price_profile {
            inputs.price_profile = price_profile;
        }
        if let Some(load_profile) = self.load_profile {
            inputs.load_profile = load_profile;
        }
        if let Some(pv_availability) = self.pv_availability {
            inputs.pv_availability = pv_availability;
        }
        if let Some(battery_cycling) = self.battery_cycling {
            inputs.battery_cycling = battery_cycling;
        }
        if let Some(cooling_flexibility) = self.cooling_flexibility {
            inputs.cooling_flexibility = cooling_flexibility;
        }
        if let Some(allow_gpu_shifting) = self.allow_gpu_shifting {
            inputs.allow_gpu_shifting = allow_gpu_shifting;
        }
        if let Some(limit_co2) = self.limit_co2 {
            inputs.limit_co2 = limit_co2;
        }
        Ok(inputs)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::{CommandFactory, FromArgMatches};

    use super::*;

    /// Parse the flags alone, the environment variables are switched off.
    fn parse(args: &[&str]) -> Result<ScenarioArgs> {
        let matches = ScenarioArgs::command()
            .mut_args(|arg| arg.env(None::<&str>))
            .try_get_matches_from(std::iter::once("scenario-studio").chain(args.iter().copied()))?;
        Ok(ScenarioArgs::from_arg_matches(&matches)?)
    }

    #[test]
    fn test_environment_variables() {
        let command = ScenarioArgs::command();
        let env_names: Vec<_> = command
            .get_arguments()
            .filter_map(|arg| Some((arg.get_id().as_str(), arg.get_env()?.to_str()?)))
            .collect();
        assert_eq!(
            env_names,
            [
                ("file", "SCENARIO_FILE"),
                ("name", "SCENARIO_NAME"),
                ("price_profile", "PRICE_PROFILE"),
                ("load_profile", "LOAD_PROFILE"),
                ("pv_availability", "PV_AVAILABILITY"),
                ("battery_cycling", "BATTERY_CYCLING"),
                ("cooling_flexibility", "COOLING_FLEXIBILITY"),
                ("allow_gpu_shifting", "ALLOW_GPU_SHIFTING"),
                ("limit_co2", "LIMIT_CO2"),
            ],
        );
    }

    #[test]
    fn test_no_flags() -> Result {
        assert_eq!(parse(&[])?.try_into_inputs()?, ScenarioInputs::default());
        Ok(())
    }

    #[test]
    fn test_flags() -> Result {
        let inputs = parse(&[
            "--name",
            "Peak stress",
            "--price-profile",
            "high-peak-prices",
            "--load-profile",
            "high-ai-training-load",
            "--pv-availability",
            "low-insolation",
            "--battery-cycling",
            "high",
            "--cooling-flexibility",
            "aggressive",
            "--allow-gpu-shifting",
            "--limit-co2",
        ])?
        .try_into_inputs()?;
        let expected = ScenarioInputs::builder()
            .name("Peak stress")
            .price_profile(PriceProfile::HighPeakPrices)
            .load_profile(LoadProfile::HighAiTrainingLoad)
            .pv_availability(PvAvailability::LowInsolation)
            .battery_cycling(BatteryCycling::High)
            .cooling_flexibility(CoolingFlexibility::Aggressive)
            .allow_gpu_shifting(true)
            .limit_co2(true)
            .build();
        assert_eq!(inputs, expected);
        Ok(())
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(parse(&["--price-profile", "free-energy"]).is_err());
    }

    #[test]
    fn test_flags_override_file() -> Result {
        let path = std::env::temp_dir()
            .join(format!("scenario-studio-override-{}.toml", std::process::id()));
        fs::write(
            &path,
            "name = \"Heatwave\"\npv_availability = \"Cloudy\"\nlimit_co2 = true\n",
        )?;
        let inputs = parse(&[
            "--scenario",
            path.to_str().context("non-UTF-8 temporary path")?,
            "--pv-availability",
            "sunny",
            "--limit-co2=false",
        ])
        .and_then(ScenarioArgs::try_into_inputs);
        fs::remove_file(&path)?;
        let inputs = inputs?;
        assert_eq!(inputs.name, "Heatwave");
        assert_eq!(inputs.pv_availability, PvAvailability::Sunny);
        assert!(!inputs.limit_co2);
        Ok(())
    }
}
