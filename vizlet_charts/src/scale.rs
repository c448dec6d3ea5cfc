// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Two scales cover the categorical-barchart family: a discrete band scale keyed by category
//! strings, and a continuous linear scale. Both are constructed with their output range
//! already known (layout runs before scales here), so there is no separate spec/instantiate
//! step.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A continuous linear scale mapping `domain` to `range`.
///
/// The range may be inverted (start greater than end); vertical value axes use
/// `(plot_bottom, plot_top)` so larger values map to smaller y.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    /// Data domain `(min, max)`.
    pub domain: (f64, f64),
    /// Output range `(start, end)`.
    pub range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-span domain maps everything to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns "nice-ish" tick values for the domain.
    ///
    /// Ticks snap to 1/2/5 multiples of a power of ten and may extend slightly past the
    /// domain; axis generation filters them back to the plot.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale keyed by category strings.
///
/// The domain keeps the supplied category order, deduplicated by first occurrence. Each
/// category owns one band slot; [`ScaleBand::position`] looks slots up by category so bar
/// geometry never depends on array positions.
#[derive(Clone, Debug)]
pub struct ScaleBand {
    range: (f64, f64),
    domain: Vec<String>,
    index: HashMap<String, usize>,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale over `range` with one band per distinct category.
    ///
    /// Duplicate categories collapse onto the first occurrence's slot.
    pub fn new<I, S>(range: (f64, f64), categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for category in categories {
            let category = category.into();
            if !index.contains_key(&category) {
                index.insert(category.clone(), domain.len());
                domain.push(category);
            }
        }
        Self {
            range,
            domain,
            index,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the domain categories in slot order.
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Returns the number of bands.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Returns `true` when the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the start position of the band slot at `index`.
    pub fn slot(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the start position of the band owned by `category`, if it is in the domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        self.index.get(category).map(|i| self.slot(*i))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn linear_maps_domain_onto_inverted_range() {
        let scale = ScaleLinear::new((0.0, 102.0), (160.0, 0.0));
        assert!((scale.map(0.0) - 160.0).abs() < 1e-9, "domain min maps to range start");
        assert!((scale.map(102.0) - 0.0).abs() < 1e-9, "domain max maps to range end");
        assert!((scale.map(51.0) - 80.0).abs() < 1e-9, "midpoint maps to range midpoint");
    }

    #[test]
    fn linear_zero_span_domain_maps_to_range_start() {
        let scale = ScaleLinear::new((5.0, 5.0), (100.0, 0.0));
        assert!((scale.map(5.0) - 100.0).abs() < 1e-9);
        assert!((scale.map(42.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn nice_ticks_snap_to_round_steps() {
        let scale = ScaleLinear::new((0.0, 102.0), (1.0, 0.0));
        let ticks = scale.ticks(10);
        assert!(!ticks.is_empty(), "expected ticks for a nonempty domain");
        assert!((ticks[0] - 0.0).abs() < 1e-9, "ticks start at a floor of the domain");
        let step = ticks[1] - ticks[0];
        assert!((step - 10.0).abs() < 1e-9, "span 102 over 10 ticks snaps to step 10");
        assert!(
            ticks.last().copied().unwrap_or(0.0) >= 102.0,
            "last tick covers the domain max"
        );
    }

    #[test]
    fn nice_ticks_handle_fractional_steps() {
        let scale = ScaleLinear::new((0.0, 1.0), (1.0, 0.0));
        let ticks = scale.ticks(10);
        let step = ticks[1] - ticks[0];
        assert!((step - 0.1).abs() < 1e-9, "unit domain over 10 ticks steps by 0.1");
    }

    #[test]
    fn band_slots_partition_the_range() {
        let scale =
            ScaleBand::new((0.0, 230.0), ["a", "b", "c"]).with_padding(0.1, 0.1);
        let bw = scale.band_width();
        // n + inner*(n-1) + 2*outer = 3 + 0.2 + 0.2 = 3.4 band widths across the span.
        assert!((bw - 230.0 / 3.4).abs() < 1e-9);
        let step = bw * 1.1;
        for i in 0..3 {
            let expected = bw * 0.1 + step * i as f64;
            assert!((scale.slot(i) - expected).abs() < 1e-9, "slot {i} misplaced");
        }
        let last_end = scale.slot(2) + bw;
        assert!(
            last_end <= 230.0 + 1e-9,
            "last band must end inside the range, got {last_end}"
        );
        assert!(
            (230.0 - last_end - bw * 0.1).abs() < 1e-9,
            "outer padding remains after the last band"
        );
    }

    #[test]
    fn band_position_is_keyed_by_category() {
        let scale = ScaleBand::new((0.0, 100.0), ["Coffee", "Tea", "Juice"]);
        assert_eq!(scale.position("Coffee"), Some(scale.slot(0)));
        assert_eq!(scale.position("Juice"), Some(scale.slot(2)));
        assert_eq!(scale.position("Soda"), None, "unknown categories have no slot");
    }

    #[test]
    fn band_duplicates_collapse_onto_first_slot() {
        let scale = ScaleBand::new((0.0, 100.0), ["a", "b", "a"]);
        assert_eq!(scale.len(), 2);
        assert_eq!(scale.domain(), ["a".to_string(), "b".to_string()]);
        assert_eq!(scale.position("a"), Some(scale.slot(0)));
    }

    #[test]
    fn band_empty_domain_has_zero_width() {
        let scale = ScaleBand::new((0.0, 100.0), core::iter::empty::<String>());
        assert!(scale.is_empty());
        assert_eq!(scale.band_width(), 0.0);
    }

    #[test]
    fn band_inverted_range_anchors_at_range_min() {
        let scale = ScaleBand::new((100.0, 0.0), ["a", "b"]);
        let bw = scale.band_width();
        assert!((scale.slot(0) - bw * 0.1).abs() < 1e-9, "slots start from the low end");
    }
}
