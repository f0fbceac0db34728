use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::ThousandsSeparated, quantity::Quantity};

/// Grid carbon intensity, grams of CO₂ per kilowatt-hour.
pub type CarbonIntensity = Quantity<-1, 0, 1>;

impl Display for CarbonIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gCO₂/kWh", ThousandsSeparated(self.to_whole_units()))
    }
}

impl Debug for CarbonIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}g/kWh", self.0.0)
    }
}
