use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Percentage = Quantity<0, 0, 0>;

impl Percentage {
    /// Convert `0.0..=1.0` into the percentage.
    pub fn from_ratio(ratio: f64) -> Self {
        Self::new(ratio * 100.0)
    }
}

/// Signed, with one decimal: `+5.3%`, `-12.0%`, `0.0%`.
impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.0 > 0.0 {
            write!(f, "+{:.1}%", self.0.0)
        } else {
            write!(f, "{:.1}%", self.0.0)
        }
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}%", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_ratio() {
        assert_abs_diff_eq!(Percentage::from_ratio(-0.12).0.0, -12.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percentage::from(65.7).to_string(), "+65.7%");
        assert_eq!(Percentage::from(-12.0).to_string(), "-12.0%");
        assert_eq!(Percentage::ZERO.to_string(), "0.0%");
    }
}
