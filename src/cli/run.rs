use clap::Parser;

use crate::{
    cli::{output::OutputArgs, scenario::ScenarioArgs},
    core::evaluation::Evaluation,
    prelude::*,
    tables::{build_key_changes_table, build_kpi_table},
};

#[derive(Parser)]
pub struct RunArgs {
    #[clap(flatten)]
    scenario: ScenarioArgs,

    #[clap(flatten)]
    output: OutputArgs,
}

impl RunArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let inputs = self.scenario.try_into_inputs()?;
        info!(
            name = %inputs.name,
            price_profile = %inputs.price_profile,
            load_profile = %inputs.load_profile,
            pv_availability = %inputs.pv_availability,
            battery_cycling = %inputs.battery_cycling,
            cooling_flexibility = %inputs.cooling_flexibility,
            inputs.allow_gpu_shifting,
            inputs.limit_co2,
            "running the scenario…"
        );
        let evaluation = Evaluation::from(inputs);
        info!(
            daily_cost = %evaluation.results.daily_cost,
            cost_vs_baseline = %evaluation.results.cost_vs_baseline,
            "calculated"
        );

        if self.output.json {
            println!("{}", serde_json::to_string_pretty(&evaluation)?);
        } else {
            println!("{}", build_kpi_table(&evaluation.results));
            println!("{}", build_key_changes_table(&evaluation.results.key_changes));
        }
        Ok(())
    }
}
