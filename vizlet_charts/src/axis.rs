// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a spec over an already-ranged scale: a band axis puts one tick and one
//! category label at the center of every band slot, a linear axis ticks at nice values
//! inside its domain. Marks carry deterministic ids derived from `id_base` so regenerating
//! an axis after a data or viewport change diffs in place instead of exiting and
//! re-entering.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use vizlet_scene::{Mark, MarkId, PathPayload, TextAnchor, TextBaseline, TextPayload};

use crate::format::{ValueFormatter, format_tick_with_step};
use crate::scale::{ScaleBand, ScaleLinear};
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, tick marks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// The scale an axis draws ticks for.
#[derive(Clone, Debug)]
pub enum AxisScale {
    /// Discrete bands labeled with their category strings.
    Band(ScaleBand),
    /// A continuous linear scale labeled with formatted values.
    Linear(ScaleLinear),
}

impl From<ScaleBand> for AxisScale {
    fn from(value: ScaleBand) -> Self {
        Self::Band(value)
    }
}

impl From<ScaleLinear> for AxisScale {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Base for stable mark ids; generated marks use deterministic offsets from it.
    pub id_base: u64,
    /// The scale to draw ticks for. Its range must already be in plot coordinates.
    pub scale: AxisScale,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks on linear scales. Band scales tick every slot.
    pub tick_count: usize,
    /// Tick line length, pointing away from the plot.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter for linear scales.
    ///
    /// If absent, labels use step-derived decimal formatting.
    pub formatter: Option<Arc<dyn ValueFormatter>>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// Defaults match the DOM renderer the sample visuals started from: `tick_count = 10`,
    /// `tick_size = 6`, `tick_padding = 3`.
    pub fn new(id_base: u64, scale: impl Into<AxisScale>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<AxisScale>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Sets the approximate tick count for linear scales.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Sets the tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the tick label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.style.label_font_size = font_size;
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Generates the axis marks for the given plot rectangle.
    ///
    /// The scale's range and `plot` must agree: a bottom axis expects a scale ranged over
    /// `(plot.x0, plot.x1)`, a left axis over `(plot.y1, plot.y0)` or `(plot.y0, plot.y1)`.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot),
            AxisOrient::Left => self.marks_left(plot),
        }
    }

    /// Tick positions along the axis, paired with their label text.
    fn tick_entries(&self) -> Vec<(f64, String)> {
        match &self.scale {
            AxisScale::Band(band) => {
                let half = 0.5 * band.band_width();
                band.domain()
                    .iter()
                    .enumerate()
                    .map(|(i, category)| (band.slot(i) + half, category.clone()))
                    .collect()
            }
            AxisScale::Linear(linear) => {
                let ticks = linear.ticks(self.tick_count);
                let step = tick_step(&ticks);
                ticks
                    .into_iter()
                    .map(|v| (linear.map(v), self.format_tick(v, step)))
                    .collect()
            }
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.formatter {
            Some(f) => f.format(v),
            None => format_tick_with_step(v, step),
        }
    }

    fn marks_bottom(&self, plot: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let label_gap = tick_size + self.tick_padding.max(0.0);
        let mut out = Vec::new();

        // Domain line.
        out.push(stroked_line(
            MarkId::from_raw(self.id_base),
            (plot.x0, y),
            (plot.x1, y),
            &self.style.rule,
        ));

        for (i, (x, label)) in self.tick_entries().into_iter().enumerate() {
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }
            out.push(stroked_line(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                (x, y),
                (x, y + tick_size),
                &self.style.rule,
            ));
            out.push(Mark::new(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextPayload::new(Point::new(x, y + label_gap), label, self.style.label_font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging)
                    .with_fill(self.style.label_fill.clone()),
            ));
        }

        out
    }

    fn marks_left(&self, plot: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let label_gap = tick_size + self.tick_padding.max(0.0);
        let mut out = Vec::new();

        // Domain line.
        out.push(stroked_line(
            MarkId::from_raw(self.id_base),
            (x, plot.y0),
            (x, plot.y1),
            &self.style.rule,
        ));

        for (i, (y, label)) in self.tick_entries().into_iter().enumerate() {
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }
            out.push(stroked_line(
                MarkId::from_raw(self.id_base + 1 + i as u64),
                (x, y),
                (x - tick_size, y),
                &self.style.rule,
            ));
            out.push(Mark::new(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextPayload::new(Point::new(x - label_gap, y), label, self.style.label_font_size)
                    .with_anchor(TextAnchor::End)
                    .with_baseline(TextBaseline::Middle)
                    .with_fill(self.style.label_fill.clone()),
            ));
        }

        out
    }
}

fn stroked_line(id: MarkId, from: (f64, f64), to: (f64, f64), style: &StrokeStyle) -> Mark {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    Mark::new(
        id,
        z_order::AXIS_RULES,
        PathPayload::new(path)
            .with_stroke(style.brush.clone())
            .with_stroke_width(style.stroke_width),
    )
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::PathEl;
    use vizlet_scene::MarkPayload;

    use super::*;

    fn plot() -> Rect {
        Rect::new(50.0, 20.0, 280.0, 180.0)
    }

    fn texts(marks: &[Mark]) -> Vec<&TextPayload> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    fn line_endpoints(mark: &Mark) -> (Point, Point) {
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected a path payload");
        };
        match p.path.elements() {
            [PathEl::MoveTo(a), PathEl::LineTo(b)] => (*a, *b),
            other => panic!("expected a two-point line, got {other:?}"),
        }
    }

    #[test]
    fn band_axis_labels_every_category() {
        let band = ScaleBand::new((50.0, 280.0), ["Coffee", "Tea", "Juice"]);
        let axis = AxisSpec::bottom(100, band.clone()).with_font_size(12.0);
        let marks = axis.marks(plot());
        let labels = texts(&marks);
        assert_eq!(labels.len(), 3, "one label per category");
        let texts: Vec<_> = labels.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Coffee", "Tea", "Juice"]);
        for (i, t) in labels.iter().enumerate() {
            let center = band.slot(i) + 0.5 * band.band_width();
            assert!((t.pos.x - center).abs() < 1e-9, "label {i} centered on its band");
            assert!((t.pos.y - (180.0 + 9.0)).abs() < 1e-9, "label below tick and padding");
            assert_eq!(t.anchor, TextAnchor::Middle);
            assert_eq!(t.baseline, TextBaseline::Hanging);
            assert!((t.font_size - 12.0).abs() < 1e-9);
        }
    }

    #[test]
    fn bottom_axis_ticks_point_down_from_plot_edge() {
        let band = ScaleBand::new((50.0, 280.0), ["a", "b"]);
        let marks = AxisSpec::bottom(100, band).marks(plot());
        // marks[0] is the domain line, marks[1] the first tick.
        let (from, to) = line_endpoints(&marks[1]);
        assert!((from.y - 180.0).abs() < 1e-9);
        assert!((to.y - 186.0).abs() < 1e-9, "tick extends outward by tick_size");
        assert!((from.x - to.x).abs() < 1e-9, "tick is vertical");
    }

    #[test]
    fn domain_line_spans_the_plot_edge() {
        let band = ScaleBand::new((50.0, 280.0), ["a"]);
        let marks = AxisSpec::bottom(7, band).marks(plot());
        assert_eq!(marks[0].id, MarkId::from_raw(7));
        let (from, to) = line_endpoints(&marks[0]);
        assert_eq!((from.x, from.y), (50.0, 180.0));
        assert_eq!((to.x, to.y), (280.0, 180.0));
    }

    #[test]
    fn left_axis_filters_ticks_outside_the_plot() {
        // Ticks for (0, 102) run 0, 10, .., 110; 110 maps above the plot and must drop.
        let linear = ScaleLinear::new((0.0, 102.0), (180.0, 20.0));
        let marks = AxisSpec::left(500, linear).marks(plot());
        let labels = texts(&marks);
        assert_eq!(labels.len(), 11, "0 through 100 survive, 110 is clipped");
        assert_eq!(labels[0].text, "0");
        assert_eq!(labels[10].text, "100");
        assert_eq!(labels[0].anchor, TextAnchor::End);
        assert_eq!(labels[0].baseline, TextBaseline::Middle);
        assert!((labels[0].pos.x - (50.0 - 9.0)).abs() < 1e-9);
        assert!((labels[0].pos.y - 180.0).abs() < 1e-9, "zero sits at the plot bottom");
    }

    #[test]
    fn left_axis_uses_the_supplied_formatter() {
        #[derive(Debug)]
        struct Fixed;
        impl ValueFormatter for Fixed {
            fn format(&self, value: f64) -> String {
                let mut s = value.to_string();
                s.push('!');
                s
            }
        }
        let linear = ScaleLinear::new((0.0, 102.0), (180.0, 20.0));
        let marks = AxisSpec::left(500, linear).with_formatter(Fixed).marks(plot());
        let labels = texts(&marks);
        assert!(labels.iter().all(|t| t.text.ends_with('!')), "formatter applies to all");
    }

    #[test]
    fn axis_ids_are_stable_across_regeneration() {
        let band = ScaleBand::new((50.0, 280.0), ["a", "b", "c"]);
        let axis = AxisSpec::bottom(900, band);
        let first: Vec<_> = axis.marks(plot()).iter().map(|m| m.id).collect();
        let second: Vec<_> = axis.marks(plot()).iter().map(|m| m.id).collect();
        assert_eq!(first, second, "same spec must produce the same ids");
    }
}
