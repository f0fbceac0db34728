use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::output::OutputArgs,
    core::{evaluation::Evaluation, scenario::ScenarioInputs},
    prelude::*,
    tables::build_comparison_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Scenario TOML files.
    #[clap(required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    #[clap(flatten)]
    output: OutputArgs,
}

impl CompareArgs {
    #[instrument(skip_all, fields(n_files = self.files.len()))]
    pub fn run(self) -> Result {
        let evaluations = self
            .files
            .iter()
            .map(ScenarioInputs::read_from)
            .map_ok(Evaluation::from)
            .collect::<Result<Vec<_>>>()?;
        info!(len = evaluations.len(), "evaluated the scenarios");

        if self.output.json {
            println!("{}", serde_json::to_string_pretty(&evaluations)?);
        } else {
            println!("{}", build_comparison_table(&evaluations));
        }
        Ok(())
    }
}
