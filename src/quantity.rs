pub mod carbon;
pub mod cost;
pub mod energy;
pub mod percentage;

use std::ops::{Div, Mul, MulAssign};

use ordered_float::OrderedFloat;
use serde::Serialize;

/// Scalar tagged with its dimensions: energy, currency, and emitted carbon mass.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Serialize, derive_more::Sub)]
#[must_use]
pub struct Quantity<const ENERGY: isize, const COST: isize, const CARBON: isize>(
    pub OrderedFloat<f64>,
);

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> Quantity<ENERGY, COST, CARBON> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    /// Round to the nearest whole unit, ties away from zero.
    pub fn round(self) -> Self {
        Self(OrderedFloat(self.0.0.round()))
    }

    /// Round to one decimal place, ties away from zero.
    pub fn round_to_tenths(self) -> Self {
        // Adding zero turns a negative zero into a positive one.
        Self(OrderedFloat((self.0.0 * 10.0).round() / 10.0 + 0.0))
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_whole_units(self) -> i64 {
        self.0.0.round() as i64
    }
}

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> From<f64>
    for Quantity<ENERGY, COST, CARBON>
{
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> Mul<f64>
    for Quantity<ENERGY, COST, CARBON>
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> MulAssign<f64>
    for Quantity<ENERGY, COST, CARBON>
{
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> Div<f64>
    for Quantity<ENERGY, COST, CARBON>
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const ENERGY: isize, const COST: isize, const CARBON: isize> Div<Self>
    for Quantity<ENERGY, COST, CARBON>
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0.0 / rhs.0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::{cost::Cost, percentage::Percentage};

    #[test]
    fn test_min() {
        assert_eq!(Cost::from(1.0).min(Cost::from(2.0)), Cost::from(1.0));
        assert_eq!(Cost::from(2.0).min(Cost::from(1.0)), Cost::from(1.0));
    }

    #[test]
    fn test_sub() {
        assert_eq!(Cost::from(7480.0) - Cost::from(8500.0), Cost::from(-1020.0));
    }

    #[test]
    fn test_mul_assign() {
        let mut cost = Cost::from(8500.0);
        cost *= 1.25;
        assert_abs_diff_eq!(cost.0.0, 10625.0);
    }

    #[test]
    fn test_div_self() {
        assert_abs_diff_eq!(Cost::from(7480.0) / Cost::from(8500.0), 0.88);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(Cost::from(8078.5).round(), Cost::from(8079.0));
        assert_eq!(Cost::from(-0.5).round(), Cost::from(-1.0));
        assert_eq!(Cost::from(311.6).to_whole_units(), 312);
    }

    #[test]
    fn test_round_to_tenths() {
        assert_abs_diff_eq!(Percentage::from(65.675_146).round_to_tenths().0.0, 65.7);
        assert_abs_diff_eq!(Percentage::from(-54.719_072).round_to_tenths().0.0, -54.7);
    }

    #[test]
    fn test_round_to_tenths_drops_negative_zero() {
        let rounded = Percentage::from(-0.04).round_to_tenths();
        assert!(rounded.0.0.is_sign_positive());
    }
}
