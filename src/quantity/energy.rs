use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::ThousandsSeparated, quantity::Quantity};

pub type KilowattHours = Quantity<1, 0, 0>;

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kWh", ThousandsSeparated(self.to_whole_units()))
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}kWh", self.0.0)
    }
}
