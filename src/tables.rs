use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use enumset::EnumSet;
use itertools::Itertools;

use crate::{
    core::{
        baseline::Baseline,
        calculator::ScenarioResults,
        evaluation::Evaluation,
        key_change::KeyChange,
        scenario::{
            BatteryCycling,
            CoolingFlexibility,
            Dimension,
            LoadProfile,
            PriceProfile,
            PvAvailability,
        },
        workload::WorkloadProfile,
    },
    quantity::percentage::Percentage,
};

/// How a KPI delta should be perceived.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Savings are good news, anything else is not.
    fn of_cost_delta(delta: Percentage) -> Self {
        if delta < Percentage::ZERO { Self::Positive } else { Self::Negative }
    }

    const fn color(self) -> Color {
        match self {
            Self::Positive => Color::Green,
            Self::Negative => Color::Red,
            Self::Neutral => Color::Reset,
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn delta_cell(text: impl ToString, tone: Tone) -> Cell {
    let cell = Cell::new(text).fg(tone.color());
    if tone == Tone::Neutral { cell.add_attribute(Attribute::Dim) } else { cell }
}

pub fn build_kpi_table(results: &ScenarioResults) -> Table {
    let cost_tone = Tone::of_cost_delta(results.cost_vs_baseline);

    let mut table = new_table();
    table.set_header(vec!["KPI", "Value", ""]);
    table.add_row(vec![
        Cell::new("Estimated Daily Cost"),
        Cell::new(results.daily_cost).set_alignment(CellAlignment::Right),
        delta_cell(format!("{} vs baseline", results.cost_vs_baseline), cost_tone),
    ]);
    table.add_row(vec![
        Cell::new("Avg. CO₂ Intensity"),
        Cell::new(results.avg_co2).set_alignment(CellAlignment::Right).fg(
            if results.avg_co2 > Baseline::CARBON_INTENSITY_CAP {
                Color::DarkYellow
            } else {
                Color::Reset
            },
        ),
        delta_cell(format!("baseline {}", Baseline::CARBON_INTENSITY), Tone::Neutral),
    ]);
    table.add_row(vec![
        Cell::new("Battery Throughput"),
        Cell::new(results.battery_throughput).set_alignment(CellAlignment::Right),
        delta_cell("cycled", Tone::Neutral),
    ]);
    table.add_row(vec![
        Cell::new("Cost vs Baseline"),
        Cell::new(results.cost_vs_baseline)
            .set_alignment(CellAlignment::Right)
            .fg(cost_tone.color()),
        delta_cell(if cost_tone == Tone::Positive { "Savings" } else { "Increase" }, cost_tone),
    ]);
    table
}

pub fn build_key_changes_table(key_changes: &[KeyChange]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Stage", "Key changes vs baseline"]);
    for key_change in key_changes {
        table.add_row(vec![
            Cell::new(key_change.stage()).add_attribute(Attribute::Dim),
            Cell::new(key_change),
        ]);
    }
    table
}

/// Index of the scenario with the lowest daily cost, the first one wins a tie.
fn cheapest(evaluations: &[Evaluation]) -> Option<usize> {
    evaluations.iter().position_min_by_key(|evaluation| evaluation.results.daily_cost)
}

pub fn build_comparison_table(evaluations: &[Evaluation]) -> Table {
    let cheapest = cheapest(evaluations);

    let mut table = new_table();
    table.set_header(vec![
        "Scenario",
        "Daily cost",
        "vs baseline",
        "Avg. CO₂",
        "Battery",
        "Changes",
    ]);
    for (i, evaluation) in evaluations.iter().enumerate() {
        let results = &evaluation.results;
        let name = Cell::new(&evaluation.inputs.name);
        table.add_row(vec![
            if cheapest == Some(i) { name.add_attribute(Attribute::Bold) } else { name },
            Cell::new(results.daily_cost).set_alignment(CellAlignment::Right),
            Cell::new(results.cost_vs_baseline)
                .set_alignment(CellAlignment::Right)
                .fg(Tone::of_cost_delta(results.cost_vs_baseline).color()),
            Cell::new(results.avg_co2).set_alignment(CellAlignment::Right),
            Cell::new(results.battery_throughput).set_alignment(CellAlignment::Right),
            Cell::new(results.key_changes.len()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_options_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Dimension", "Option", "Flag value", "Description"]);
    add_dimension_rows::<PriceProfile>(&mut table);
    add_dimension_rows::<LoadProfile>(&mut table);
    add_dimension_rows::<PvAvailability>(&mut table);
    add_dimension_rows::<BatteryCycling>(&mut table);
    add_dimension_rows::<CoolingFlexibility>(&mut table);
    table.add_row(vec![
        Cell::new("GPU shifting").add_attribute(Attribute::Bold),
        Cell::new("on / off"),
        Cell::new("--allow-gpu-shifting").add_attribute(Attribute::Dim),
        Cell::new("Allow shifting non-critical GPU loads"),
    ]);
    table.add_row(vec![
        Cell::new("CO₂ limit").add_attribute(Attribute::Bold),
        Cell::new("on / off"),
        Cell::new("--limit-co2").add_attribute(Attribute::Dim),
        Cell::new(format!("Limit CO₂ intensity below {}", Baseline::CARBON_INTENSITY_CAP)),
    ]);
    table
}

pub fn build_workload_table(profile: &WorkloadProfile) -> Table {
    const BAR_WIDTH: f64 = 30.0;

    let scale = profile.scale();
    let mut table = new_table();
    table.set_header(vec!["Hour", "Load", ""]);
    for (hour, load) in profile.iter() {
        let color = if WorkloadProfile::is_peak(load) {
            Color::Red
        } else if WorkloadProfile::is_night(hour) {
            Color::Green
        } else {
            Color::Blue
        };
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_length = (load / scale * BAR_WIDTH).round().max(0.0) as usize;
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")).add_attribute(Attribute::Dim),
            Cell::new(format!("{load:.2}")).set_alignment(CellAlignment::Right),
            Cell::new("█".repeat(bar_length)).fg(color),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", profile.total()))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

fn add_dimension_rows<D: Dimension>(table: &mut Table) {
    for (i, option) in EnumSet::<D>::all().iter().enumerate() {
        let flag_value = option
            .to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(if i == 0 { D::TITLE } else { "" }).add_attribute(Attribute::Bold),
            Cell::new(option),
            Cell::new(flag_value).add_attribute(Attribute::Dim),
            Cell::new(option.description()),
        ]);
    }
}
