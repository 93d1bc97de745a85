use crate::{Axis, ElevationProfile, Result, WaterCounts, WaterError};
use tracing::{debug, trace};

/// Tallest profile the row scan accepts; it produces one count per level.
pub const MAX_LEVELS: u32 = 1 << 24;

/// Validates `elevation_map` and counts the water it traps along `axis`.
///
/// Nothing is counted unless every height is a non-negative integer.
///
/// # Errors
///
/// Returns the profile validation error for the first bad height, or
/// [`WaterError::TooManyLevels`] from [`WaterCounter::count`].
pub fn count_trapped_water(elevation_map: &[i64], axis: Axis) -> Result<WaterCounts> {
    let profile = ElevationProfile::new(elevation_map.to_vec())?;
    WaterCounter::new(&profile).count(axis)
}

pub struct WaterCounter<'a> {
    profile: &'a ElevationProfile,
}

impl<'a> WaterCounter<'a> {
    pub fn new(profile: &'a ElevationProfile) -> Self {
        WaterCounter { profile }
    }

    /// Runs the strategy selected by `axis`.
    ///
    /// # Errors
    ///
    /// [`WaterError::TooManyLevels`] when the secondary axis is asked to scan a
    /// profile taller than [`MAX_LEVELS`]. The primary axis never fails.
    pub fn count(&self, axis: Axis) -> Result<WaterCounts> {
        let units = match axis {
            Axis::Primary => self.count_by_position(),
            Axis::Secondary => self.count_by_level()?,
        };
        let counts = WaterCounts::new(axis, units);
        debug!(
            columns = self.profile.len(),
            %axis,
            total = counts.total(),
            "counted trapped water"
        );
        Ok(counts)
    }

    /// Left-to-right scan behind a running leader height.
    ///
    /// Boundary positions always hold 0. When nothing to the right is as tall
    /// as the current column, the leader drops to that right-hand maximum.
    fn count_by_position(&self) -> Vec<u64> {
        let heights = self.profile.heights();
        let n = heights.len();
        if n < 2 {
            return vec![0; n];
        }

        let right_maxima = self.profile.right_maxima();
        let mut leader = heights[0];
        let mut units = Vec::with_capacity(n);
        units.push(0);

        for index in 1..n - 1 {
            let height = heights[index];
            let max_height_remainder = right_maxima[index];

            if max_height_remainder < height {
                leader = max_height_remainder;
                units.push(0);
            } else if height > leader {
                leader = height;
                units.push(0);
            } else {
                units.push(u64::from(leader - height));
            }
        }

        units.push(0);
        units
    }

    /// One entry per height level: empty cells between filled columns on that row.
    fn count_by_level(&self) -> Result<Vec<u64>> {
        let max_height = self.profile.max_height();
        if max_height > MAX_LEVELS {
            return Err(WaterError::TooManyLevels { max_height, limit: MAX_LEVELS });
        }

        Ok((0..max_height)
            .map(|level| {
                let trapped = self.count_row(level);
                trace!(level, trapped, "scanned row");
                trapped
            })
            .collect())
    }

    fn count_row(&self, level: u32) -> u64 {
        let mut filled = self.profile.filled_columns(level);
        let Some(mut previous) = filled.next() else {
            return 0;
        };

        let mut trapped = 0;
        for index in filled {
            trapped += (index - previous - 1) as u64;
            previous = index;
        }
        trapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case(&[1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6)]
    #[test_case(&[1, 0, 2, 1, 0, 1, 3, 2, 1, 3, 0], 8)]
    #[test_case(&[0, 1, 2, 3, 4], 0)]
    #[test_case(&[4, 3, 2, 1, 0], 0)]
    #[test_case(&[4, 3, 0, 2, 1], 2)]
    #[test_case(&[4, 3, 0, 2, 1, 4, 1, 1, 0], 10)]
    #[test_case(&[1, 1, 1], 0)]
    #[test_case(&[0, 0], 0)]
    #[test_case(&[1, 0, 4, 0, 0, 4, 0, 1], 10)]
    fn test_count_trapped_water(elevation_map: &[i64], expected: u64) {
        for axis in [Axis::Secondary, Axis::Primary] {
            let counts = count_trapped_water(elevation_map, axis).unwrap();
            assert_eq!(counts.total(), expected, "axis {axis} on {elevation_map:?}");
        }
    }

    #[test]
    fn test_primary_per_position() {
        let counts = count_trapped_water(&[4, 3, 0, 2, 1, 4, 1, 1, 0], Axis::Primary).unwrap();
        assert_eq!(counts.units(), &[0, 1, 4, 2, 3, 0, 0, 0, 0]);

        let counts = count_trapped_water(&[1, 0, 4, 0, 0, 4, 0, 1], Axis::Primary).unwrap();
        assert_eq!(counts.units(), &[0, 1, 0, 4, 4, 0, 1, 0]);
    }

    #[test]
    fn test_secondary_per_level() {
        let counts = count_trapped_water(&[1, 0, 4, 0, 0, 4, 0, 1], Axis::Secondary).unwrap();
        assert_eq!(counts.units(), &[4, 2, 2, 2]);

        let counts = count_trapped_water(&[4, 3, 0, 2, 1], Axis::Secondary).unwrap();
        assert_eq!(counts.units(), &[1, 1, 0, 0]);
    }

    #[test]
    fn test_primary_leader_drops_to_right_maximum() {
        // Nothing right of the 5 is taller than 1, so the leader falls to 1.
        let counts = count_trapped_water(&[0, 5, 0, 1, 0], Axis::Primary).unwrap();
        assert_eq!(counts.units(), &[0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_primary_descending_plateau_keeps_leader() {
        let counts = count_trapped_water(&[8, 6, 6, 3], Axis::Primary).unwrap();
        assert_eq!(counts.units(), &[0, 2, 0, 0]);
        let counts = count_trapped_water(&[8, 6, 6, 3], Axis::Secondary).unwrap();
        assert_eq!(counts.total(), 0);
    }

    #[test_case(&[] ; "empty")]
    #[test_case(&[3] ; "single column")]
    fn test_degenerate_profiles(elevation_map: &[i64]) {
        let primary = count_trapped_water(elevation_map, Axis::Primary).unwrap();
        assert_eq!(primary.units(), vec![0; elevation_map.len()].as_slice());

        let secondary = count_trapped_water(elevation_map, Axis::Secondary).unwrap();
        assert_eq!(secondary.total(), 0);
    }

    #[test]
    fn test_secondary_empty_when_all_zero() {
        let counts = count_trapped_water(&[0, 0, 0, 0], Axis::Secondary).unwrap();
        assert!(counts.is_empty());
    }

    #[test_case(&[-1] ; "lone negative")]
    #[test_case(&[1, 0, 2, -1, 0] ; "negative inside")]
    fn test_negative_height_fails(elevation_map: &[i64]) {
        for axis in [Axis::Primary, Axis::Secondary] {
            let err = count_trapped_water(elevation_map, axis).unwrap_err();
            assert!(matches!(err, WaterError::NegativeHeight { value: -1, .. }));
        }
    }

    #[test]
    fn test_secondary_rejects_profile_taller_than_level_limit() {
        let too_tall = i64::from(MAX_LEVELS) + 1;
        let err = count_trapped_water(&[too_tall, 0, too_tall], Axis::Secondary).unwrap_err();
        assert_eq!(err, WaterError::TooManyLevels { max_height: MAX_LEVELS + 1, limit: MAX_LEVELS });

        let counts = count_trapped_water(&[too_tall, 0, too_tall], Axis::Primary).unwrap();
        assert_eq!(counts.units(), &[0, too_tall as u64, 0]);
    }

    fn count_total(heights: &[u32], axis: Axis) -> u64 {
        let profile = ElevationProfile::from(heights.to_vec());
        WaterCounter::new(&profile).count(axis).unwrap().total()
    }

    proptest! {
        #[test]
        fn prop_primary_aligned_with_profile(heights in prop::collection::vec(0u32..50, 0..40)) {
            let profile = ElevationProfile::from(heights.clone());
            let counts = WaterCounter::new(&profile).count(Axis::Primary).unwrap();
            prop_assert_eq!(counts.len(), heights.len());
            if let (Some(first), Some(last)) = (counts.units().first(), counts.units().last()) {
                prop_assert_eq!(*first, 0);
                prop_assert_eq!(*last, 0);
            }
        }

        #[test]
        fn prop_secondary_one_entry_per_level(heights in prop::collection::vec(0u32..50, 0..40)) {
            let profile = ElevationProfile::from(heights);
            let counts = WaterCounter::new(&profile).count(Axis::Secondary).unwrap();
            prop_assert_eq!(counts.len(), profile.max_height() as usize);
        }

        #[test]
        fn prop_monotonic_profiles_trap_nothing(mut heights in prop::collection::vec(0u32..50, 0..40)) {
            heights.sort_unstable();
            prop_assert_eq!(count_total(&heights, Axis::Primary), 0);
            prop_assert_eq!(count_total(&heights, Axis::Secondary), 0);

            // A descending plateau still leaves the leader above it, so only
            // strictly falling profiles are guaranteed dry.
            heights.dedup();
            heights.reverse();
            prop_assert_eq!(count_total(&heights, Axis::Primary), 0);
            prop_assert_eq!(count_total(&heights, Axis::Secondary), 0);
        }

        #[test]
        fn prop_flat_profiles_trap_nothing(height in 0u32..50, len in 0usize..40) {
            let heights = vec![height; len];
            prop_assert_eq!(count_total(&heights, Axis::Primary), 0);
            prop_assert_eq!(count_total(&heights, Axis::Secondary), 0);
        }
    }
}
