use clap::Parser;

use crate::{
    cli::output::OutputArgs,
    core::workload::{WorkloadOperation, WorkloadProfile},
    prelude::*,
    tables::build_workload_table,
};

#[derive(Parser)]
pub struct ShiftArgs {
    /// Operations to apply to the typical day's GPU load, in order.
    #[clap(value_enum, value_delimiter = ',', env = "WORKLOAD_OPERATIONS")]
    operations: Vec<WorkloadOperation>,

    #[clap(flatten)]
    output: OutputArgs,
}

impl ShiftArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let profile = self.apply();
        info!(total = profile.total(), peak = profile.peak(), "shifted");

        if self.output.json {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        } else {
            println!("{}", build_workload_table(&profile));
        }
        Ok(())
    }

    fn apply(&self) -> WorkloadProfile {
        self.operations.iter().fold(WorkloadProfile::default(), |profile, &operation| {
            debug!(%operation, "applying…");
            profile.apply(operation)
        })
    }
}
