//! Season Classification from Outdoor Temperature
//!
//! ## Overview
//!
//! Seasonal context decides which humidity strategy applies: cold outdoor
//! air holds little moisture (heated indoor air goes dry), hot air holds a
//! lot (cooled indoor air goes clammy). Rather than consult a calendar,
//! the classifier derives the season directly from the current outdoor
//! temperature, which also handles unseasonal weather correctly.
//!
//! ## Partition
//!
//! The temperature axis splits into three bands with strict cutoffs:
//!
//! ```text
//!         winter          mild           summer
//!  ---------------|----------------|---------------->  °C
//!              10.0             30.0
//! ```
//!
//! Both cutoffs belong to the mild band, so a reading exactly at a cutoff
//! never selects the more aggressive seasonal behavior. The classification
//! is monotonic: raising the temperature can only move the result toward
//! summer, never back toward winter.
//!
//! ## Totality
//!
//! Every `f32` input maps to a season. Non-finite inputs fail both strict
//! comparisons and land in the mild band; rejecting garbage readings is the
//! producer's job, not the classifier's.

use crate::constants::climate::{SEASON_SUMMER_ABOVE_C, SEASON_WINTER_BELOW_C};

/// Coarse season derived from outdoor temperature - never stored
///
/// Ordering follows temperature: `Winter < Mild < Summer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Season {
    /// Below the winter cutoff
    Winter = 0,
    /// Between the cutoffs (either cutoff included)
    Mild = 1,
    /// Above the summer cutoff
    Summer = 2,
}

impl Season {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Mild => "mild",
            Season::Summer => "summer",
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Season classifier holding its two temperature cutoffs
#[derive(Debug, Clone)]
pub struct SeasonClassifier {
    /// Temperatures strictly below this are winter (°C)
    winter_below_c: f32,

    /// Temperatures strictly above this are summer (°C)
    summer_above_c: f32,
}

impl Default for SeasonClassifier {
    fn default() -> Self {
        Self {
            winter_below_c: SEASON_WINTER_BELOW_C,
            summer_above_c: SEASON_SUMMER_ABOVE_C,
        }
    }
}

impl SeasonClassifier {
    /// Create classifier with custom cutoffs
    ///
    /// Intended for deployments in climates where the defaults fit poorly.
    pub fn new_with_bands(winter_below_c: f32, summer_above_c: f32) -> Self {
        // Sanity check: can't have the winter cutoff above the summer one
        let (winter_below_c, summer_above_c) = if winter_below_c > summer_above_c {
            (summer_above_c, winter_below_c)
        } else {
            (winter_below_c, summer_above_c)
        };

        Self { winter_below_c, summer_above_c }
    }

    /// Classify an outdoor temperature into a season
    ///
    /// Total over all inputs; strict comparisons place both cutoffs in
    /// [`Season::Mild`].
    pub fn classify(&self, temp_c: f32) -> Season {
        if temp_c < self.winter_below_c {
            Season::Winter
        } else if temp_c > self.summer_above_c {
            Season::Summer
        } else {
            Season::Mild
        }
    }

    /// Winter cutoff in effect (°C)
    pub fn winter_below_c(&self) -> f32 {
        self.winter_below_c
    }

    /// Summer cutoff in effect (°C)
    pub fn summer_above_c(&self) -> f32 {
        self.summer_above_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_way_partition() {
        let classifier = SeasonClassifier::default();

        assert_eq!(classifier.classify(-5.0), Season::Winter);
        assert_eq!(classifier.classify(20.0), Season::Mild);
        assert_eq!(classifier.classify(35.0), Season::Summer);
    }

    #[test]
    fn cutoffs_belong_to_mild() {
        let classifier = SeasonClassifier::default();

        // Exactly at a cutoff - strict comparisons keep both in the mild band
        assert_eq!(classifier.classify(10.0), Season::Mild);
        assert_eq!(classifier.classify(30.0), Season::Mild);

        // Just past the cutoffs
        assert_eq!(classifier.classify(9.9), Season::Winter);
        assert_eq!(classifier.classify(30.1), Season::Summer);
    }

    #[test]
    fn ordering_follows_temperature() {
        assert!(Season::Winter < Season::Mild);
        assert!(Season::Mild < Season::Summer);
    }

    #[test]
    fn inverted_bands_are_reordered() {
        let classifier = SeasonClassifier::new_with_bands(25.0, 5.0);

        assert_eq!(classifier.winter_below_c(), 5.0);
        assert_eq!(classifier.summer_above_c(), 25.0);
        assert_eq!(classifier.classify(0.0), Season::Winter);
        assert_eq!(classifier.classify(30.0), Season::Summer);
    }

    #[test]
    fn non_finite_input_is_mild() {
        let classifier = SeasonClassifier::default();

        assert_eq!(classifier.classify(f32::NAN), Season::Mild);
    }
}
