// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical bar mark generation over a band scale and a linear value scale.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use peniko::color::palette::css;
use vizlet_scene::{Mark, MarkId, RectPayload};

use crate::scale::{ScaleBand, ScaleLinear};
use crate::z_order;

/// A specification for one series of vertical bars.
///
/// Bar ids are keyed by category string under `id_namespace`, so a category keeps its
/// mark identity when the data is reordered or other categories come and go.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Namespace mixed into each bar's keyed mark id.
    pub id_namespace: u64,
    /// Horizontal placement of the bars.
    pub band: ScaleBand,
    /// Vertical value scale. Its range must already be in plot coordinates.
    pub y_scale: ScaleLinear,
    /// Data-space value the bars grow from.
    pub baseline: f64,
    /// Bar fill paint.
    pub fill: Brush,
    /// Z index for the generated rects.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar spec growing up from a zero baseline.
    pub fn new(id_namespace: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            id_namespace,
            band,
            y_scale,
            baseline: 0.0,
            fill: css::TEAL.into(),
            z_index: z_order::SERIES_FILL,
        }
    }

    /// Sets the bar fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the data-space baseline the bars grow from.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the z index for the generated rects.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one rect mark per `(category, value)` pair.
    ///
    /// Categories missing from the band domain are skipped. Values that fall on the far
    /// side of the baseline produce zero-height bars rather than bars growing downward.
    pub fn marks<'a>(&self, points: impl IntoIterator<Item = (&'a str, f64)>) -> Vec<Mark> {
        let width = self.band.band_width();
        let base_px = self.y_scale.map(self.baseline);
        points
            .into_iter()
            .filter_map(|(category, value)| {
                let x = self.band.position(category)?;
                let value_px = self.y_scale.map(value);
                let y = value_px.min(base_px);
                let height = (base_px - value_px).max(0.0);
                Some(Mark::new(
                    MarkId::keyed(self.id_namespace, category),
                    self.z_index,
                    RectPayload::new(Rect::new(x, y, x + width, y + height))
                        .with_fill(self.fill.clone()),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use vizlet_scene::MarkPayload;

    use super::*;

    fn spec() -> BarMarkSpec {
        let band = ScaleBand::new((50.0, 280.0), ["Coffee", "Tea", "Juice"])
            .with_padding(0.1, 0.1);
        let y = ScaleLinear::new((0.0, 102.0), (180.0, 20.0));
        BarMarkSpec::new(42, band, y)
    }

    fn rect_of(mark: &Mark) -> Rect {
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected a rect payload");
        };
        r.rect
    }

    #[test]
    fn bars_span_band_slots_and_rise_from_the_baseline() {
        let spec = spec();
        let marks = spec.marks(vec![("Coffee", 102.0), ("Tea", 51.0)]);
        assert_eq!(marks.len(), 2);

        let width = spec.band.band_width();
        let coffee = rect_of(&marks[0]);
        assert!((coffee.x0 - spec.band.position("Coffee").unwrap()).abs() < 1e-9);
        assert!((coffee.width() - width).abs() < 1e-9);
        assert!((coffee.y0 - 20.0).abs() < 1e-9, "max value reaches the plot top");
        assert!((coffee.y1 - 180.0).abs() < 1e-9, "bar bottom sits on the baseline");

        let tea = rect_of(&marks[1]);
        assert!((tea.y0 - 100.0).abs() < 1e-9, "half the max reaches halfway up");
        assert!((tea.height() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn values_below_the_baseline_collapse_to_zero_height() {
        let marks = spec().marks(vec![("Coffee", -5.0)]);
        let rect = rect_of(&marks[0]);
        assert!((rect.height() - 0.0).abs() < 1e-9);
        assert!((rect.y0 - 180.0).abs() < 1e-9, "degenerate bar pins to the baseline");
    }

    #[test]
    fn ids_are_keyed_by_category_not_position() {
        let spec = spec();
        let forward = spec.marks(vec![("Coffee", 1.0), ("Tea", 2.0)]);
        let reversed = spec.marks(vec![("Tea", 2.0), ("Coffee", 1.0)]);
        assert_eq!(forward[0].id, reversed[1].id);
        assert_eq!(forward[1].id, reversed[0].id);
        assert_ne!(forward[0].id, forward[1].id);
    }

    #[test]
    fn unknown_categories_are_skipped() {
        let marks = spec().marks(vec![("Coffee", 1.0), ("Cocoa", 2.0)]);
        let ids: Vec<_> = marks.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0], MarkId::keyed(42, "Coffee"));
    }
}
