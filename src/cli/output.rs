use clap::Parser;

#[derive(Copy, Clone, Parser)]
pub struct OutputArgs {
    /// Print the results as JSON instead of tables.
    #[clap(long, env = "JSON_OUTPUT")]
    pub json: bool,
}
