use std::fmt::{Debug, Display, Formatter};

use crate::{fmt::ThousandsSeparated, quantity::Quantity};

/// Daily energy cost in whole currency units.
pub type Cost = Quantity<0, 1, 0>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.0 < 0.0 {
            write!(f, "-${}", ThousandsSeparated(-self.to_whole_units()))
        } else {
            write!(f, "${}", ThousandsSeparated(self.to_whole_units()))
        }
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:?}", self.0.0)
    }
}
