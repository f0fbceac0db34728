use crate::quantity::{carbon::CarbonIntensity, cost::Cost};

/// Reference day against which every scenario is measured.
pub struct Baseline;

impl Baseline {
    pub const DAILY_COST: Cost = Cost::new(8500.0);

    pub const CARBON_INTENSITY: CarbonIntensity = CarbonIntensity::new(380.0);

    /// Upper bound on the average carbon intensity when the CO₂ limit is enabled.
    pub const CARBON_INTENSITY_CAP: CarbonIntensity = CarbonIntensity::new(320.0);
}
