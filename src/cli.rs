mod compare;
mod output;
mod run;
mod scenario;
mod shift;

use clap::{Parser, Subcommand};

pub use self::{compare::CompareArgs, run::RunArgs, shift::ShiftArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: run a what-if scenario and print its impact against the baseline.
    #[clap(name = "run")]
    Run(Box<RunArgs>),

    /// Run several scenario files side by side.
    #[clap(name = "compare")]
    Compare(CompareArgs),

    /// Reshape the typical day's GPU load: shift it in time, flatten the peaks, or move it to the night.
    #[clap(name = "shift")]
    Shift(ShiftArgs),

    /// List the available options of every scenario dimension.
    #[clap(name = "options")]
    Options,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_options() -> crate::prelude::Result {
        let args = Args::try_parse_from(["scenario-studio", "options"])?;
        assert!(matches!(args.command, Command::Options));
        Ok(())
    }

    #[test]
    fn test_parse_shift() -> crate::prelude::Result {
        let args = Args::try_parse_from(["scenario-studio", "shift", "night-mode"])?;
        assert!(matches!(args.command, Command::Shift(_)));
        Ok(())
    }

    #[test]
    fn test_compare_requires_files() {
        assert!(Args::try_parse_from(["scenario-studio", "compare"]).is_err());
    }
}
