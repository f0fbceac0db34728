use std::ops::Index;

use clap::ValueEnum;
use serde::Serialize;

/// Relative GPU load of every hour of the day.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct WorkloadProfile([f64; Self::N_HOURS]);

impl Default for WorkloadProfile {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl WorkloadProfile {
    pub const N_HOURS: usize = 24;

    /// Typical day: quiet nights and a midday peak.
    pub const INITIAL: Self = Self([
        0.3, 0.2, 0.2, 0.1, 0.1, 0.2, // 00–05
        0.4, 0.6, 0.8, 0.9, 1.0, 1.1, // 06–11
        1.2, 1.1, 1.0, 0.9, 0.8, 0.7, // 12–17
        0.6, 0.5, 0.4, 0.4, 0.3, 0.3, // 18–23
    ]);

    /// Hours the load is moved to by [`WorkloadOperation::NightMode`].
    pub const NIGHT_HOURS: [usize; 10] = [20, 21, 22, 23, 0, 1, 2, 3, 4, 5];

    /// Load that every hour keeps in the night mode.
    pub const MIN_LOAD: f64 = 0.1;

    /// Loads above this are peaks.
    pub const PEAK_THRESHOLD: f64 = 0.9;

    /// Smallest maximum of the bar scale, so that a flat profile does not fill the bars.
    pub const MIN_SCALE: f64 = 1.2;

    /// Share of the gap to the average that [`WorkloadOperation::FlattenPeaks`] closes.
    const FLATTEN_FACTOR: f64 = 0.3;

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn average(&self) -> f64 {
        #[expect(clippy::cast_precision_loss)]
        let n_hours = Self::N_HOURS as f64;
        self.total() / n_hours
    }

    #[must_use]
    pub fn peak(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Maximum of the bar scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.peak().max(Self::MIN_SCALE)
    }

    pub const fn is_night(hour: usize) -> bool {
        hour >= 20 || hour < 6
    }

    pub const fn is_peak(load: f64) -> bool {
        load > Self::PEAK_THRESHOLD
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    pub fn apply(self, operation: WorkloadOperation) -> Self {
        match operation {
            WorkloadOperation::ShiftLeft => self.shift_left(),
            WorkloadOperation::ShiftRight => self.shift_right(),
            WorkloadOperation::FlattenPeaks => self.flatten_peaks(),
            WorkloadOperation::NightMode => self.night_mode(),
            WorkloadOperation::Reset => Self::INITIAL,
        }
    }

    /// Move every hour's load one hour earlier, the first hour wraps around to the end.
    pub fn shift_left(mut self) -> Self {
        self.0.rotate_left(1);
        self
    }

    /// Move every hour's load one hour later, the last hour wraps around to the start.
    pub fn shift_right(mut self) -> Self {
        self.0.rotate_right(1);
        self
    }

    /// Pull every hour part of the way towards the daily average.
    pub fn flatten_peaks(self) -> Self {
        let average = self.average();
        Self(self.0.map(|load| load + (average - load) * Self::FLATTEN_FACTOR))
    }

    /// Keep the minimal load everywhere and spread the rest evenly over the night hours.
    pub fn night_mode(self) -> Self {
        #[expect(clippy::cast_precision_loss)]
        let per_night_hour = Self::MIN_LOAD.mul_add(-(Self::N_HOURS as f64), self.total())
            / Self::NIGHT_HOURS.len() as f64;
        let mut loads = [Self::MIN_LOAD; Self::N_HOURS];
        for hour in Self::NIGHT_HOURS {
            loads[hour] += per_night_hour;
        }
        Self(loads)
    }
}

impl Index<usize> for WorkloadProfile {
    type Output = f64;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, derive_more::Display)]
pub enum WorkloadOperation {
    /// Run everything one hour earlier.
    #[display("shift left")]
    ShiftLeft,

    /// Run everything one hour later.
    #[display("shift right")]
    ShiftRight,

    /// Move 30% of every hour's deviation from the average back towards it.
    #[display("flatten peaks")]
    FlattenPeaks,

    /// Move all flexible load into 20:00–06:00.
    #[display("night mode")]
    NightMode,

    /// Go back to the typical day.
    #[display("reset")]
    Reset,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_initial_total() {
        assert_abs_diff_eq!(WorkloadProfile::INITIAL.total(), 14.1, epsilon = 1e-9);
        assert_abs_diff_eq!(WorkloadProfile::INITIAL.peak(), 1.2);
    }

    #[test]
    fn test_shifts_preserve_total() {
        let profile = WorkloadProfile::INITIAL;
        assert_abs_diff_eq!(profile.shift_left().total(), profile.total(), epsilon = 1e-9);
        assert_abs_diff_eq!(profile.shift_right().total(), profile.total(), epsilon = 1e-9);
    }

    #[test]
    fn test_shift_left() {
        let shifted = WorkloadProfile::INITIAL.shift_left();
        assert_abs_diff_eq!(shifted[0], 0.2);
        assert_abs_diff_eq!(shifted[11], 1.2);
        assert_abs_diff_eq!(shifted[23], 0.3);
    }

    #[test]
    fn test_shift_right() {
        let shifted = WorkloadProfile::INITIAL.shift_right();
        assert_abs_diff_eq!(shifted[0], 0.3);
        assert_abs_diff_eq!(shifted[13], 1.2);
    }

    #[test]
    fn test_shift_left_then_right_restores_profile() {
        let profile = WorkloadProfile::INITIAL;
        assert_eq!(profile.shift_left().shift_right(), profile);
        assert_eq!(profile.shift_right().shift_left(), profile);
    }

    #[test]
    fn test_full_rotation_restores_profile() {
        let rotated = (0..WorkloadProfile::N_HOURS)
            .fold(WorkloadProfile::INITIAL, |profile, _| profile.shift_left());
        assert_eq!(rotated, WorkloadProfile::INITIAL);
    }

    #[test]
    fn test_flatten_peaks() {
        let profile = WorkloadProfile::INITIAL;
        let flattened = profile.flatten_peaks();
        assert_abs_diff_eq!(flattened.total(), profile.total(), epsilon = 1e-9);
        assert_abs_diff_eq!(flattened[12], 1.016_25, epsilon = 1e-9);
        assert_abs_diff_eq!(flattened[3], 0.246_25, epsilon = 1e-9);
        assert!(flattened.peak() < profile.peak());
    }

    #[test]
    fn test_night_mode() {
        let profile = WorkloadProfile::INITIAL.night_mode();
        assert_abs_diff_eq!(profile.total(), 14.1, epsilon = 1e-9);
        for (hour, load) in profile.iter() {
            if WorkloadProfile::is_night(hour) {
                // (14.1 - 24 × 0.1) / 10
                assert_abs_diff_eq!(load, 1.27, epsilon = 1e-9);
            } else {
                assert_abs_diff_eq!(load, 0.1, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_night_hours_match_night_check() {
        for hour in 0..WorkloadProfile::N_HOURS {
            assert_eq!(
                WorkloadProfile::NIGHT_HOURS.contains(&hour),
                WorkloadProfile::is_night(hour),
                "{hour}",
            );
        }
    }

    #[test]
    fn test_reset() {
        let profile = WorkloadProfile::INITIAL
            .apply(WorkloadOperation::NightMode)
            .apply(WorkloadOperation::ShiftLeft)
            .apply(WorkloadOperation::Reset);
        assert_eq!(profile, WorkloadProfile::default());
    }

    #[test]
    fn test_is_peak() {
        assert!(!WorkloadProfile::is_peak(0.9));
        assert!(WorkloadProfile::is_peak(1.0));
    }

    #[test]
    fn test_scale() {
        assert_abs_diff_eq!(WorkloadProfile::INITIAL.flatten_peaks().scale(), 1.2);
        assert_abs_diff_eq!(WorkloadProfile::INITIAL.night_mode().scale(), 1.27, epsilon = 1e-9);
    }
}
