// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisted settings, parsed fail-closed.
//!
//! Hosts persist settings as an untyped JSON object and hand it back verbatim on every
//! update. The blob is re-parsed each time, one field at a time: a missing or malformed
//! field falls back to its default without disturbing the fields around it, so a host
//! that persists garbage for one property cannot blank the whole chart.

use serde_json::Value;

/// Object name the host persists barchart settings under.
pub const PROPERTIES_CARD: &str = "barchartProperties";

/// Smallest accepted axis label font size.
pub const MIN_AXIS_FONT_SIZE: f64 = 7.0;
/// Largest accepted axis label font size.
pub const MAX_AXIS_FONT_SIZE: f64 = 24.0;

pub(crate) const SORT_BY_SIZE: &str = "sortBySize";
pub(crate) const X_AXIS_FONT_SIZE: &str = "xAxisFontSize";
pub(crate) const Y_AXIS_FONT_SIZE: &str = "yAxisFontSize";
pub(crate) const BAR_COLOR: &str = "barColor";

const DEFAULT_FONT_SIZE: f64 = 10.0;
const DEFAULT_BAR_COLOR: &str = "teal";

/// Parsed barchart settings for one update.
#[derive(Clone, Debug, PartialEq)]
pub struct BarchartSettings {
    /// Sort bars by descending value instead of host row order.
    pub sort_by_size: bool,
    /// Category axis label font size, clamped to `[7, 24]`.
    pub x_axis_font_size: f64,
    /// Value axis label font size, clamped to `[7, 24]`.
    pub y_axis_font_size: f64,
    /// Bar fill color.
    pub bar_color: BarColor,
}

impl Default for BarchartSettings {
    fn default() -> Self {
        Self {
            sort_by_size: false,
            x_axis_font_size: DEFAULT_FONT_SIZE,
            y_axis_font_size: DEFAULT_FONT_SIZE,
            bar_color: BarColor::Raw(String::from(DEFAULT_BAR_COLOR)),
        }
    }
}

impl BarchartSettings {
    /// Parses settings from a persisted objects blob.
    ///
    /// The blob is expected to hold a [`PROPERTIES_CARD`] object; anything missing or of
    /// the wrong shape, down to individual fields, reads as the default.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Some(props) = value.get(PROPERTIES_CARD) else {
            return defaults;
        };
        Self {
            sort_by_size: props
                .get(SORT_BY_SIZE)
                .and_then(Value::as_bool)
                .unwrap_or(defaults.sort_by_size),
            x_axis_font_size: font_size(props.get(X_AXIS_FONT_SIZE), defaults.x_axis_font_size),
            y_axis_font_size: font_size(props.get(Y_AXIS_FONT_SIZE), defaults.y_axis_font_size),
            bar_color: props
                .get(BAR_COLOR)
                .and_then(BarColor::from_value)
                .unwrap_or(defaults.bar_color),
        }
    }
}

fn font_size(value: Option<&Value>, default: f64) -> f64 {
    value
        .and_then(Value::as_f64)
        .map_or(default, |size| size.clamp(MIN_AXIS_FONT_SIZE, MAX_AXIS_FONT_SIZE))
}

/// Bar fill setting, in either shape hosts persist.
#[derive(Clone, Debug, PartialEq)]
pub enum BarColor {
    /// Structured fill, persisted as `{ "solid": { "color": … } }` by property panes.
    Solid {
        /// The nested solid color string.
        color: String,
    },
    /// A plain CSS color string.
    Raw(String),
}

impl BarColor {
    /// Extracts a color from either accepted JSON shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(color) => Some(Self::Raw(color.clone())),
            _ => {
                let color = value.get("solid")?.get("color")?.as_str()?;
                Some(Self::Solid {
                    color: color.to_owned(),
                })
            }
        }
    }

    /// The CSS color string both shapes normalize to.
    pub fn css(&self) -> &str {
        match self {
            Self::Solid { color } | Self::Raw(color) => color,
        }
    }
}
