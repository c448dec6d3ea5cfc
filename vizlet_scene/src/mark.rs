// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: stable identity plus a drawable payload.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// Stable identity for a mark.
///
/// Ids survive across updates: a datum that is re-rendered under the same id mutates its
/// existing mark instead of exiting and re-entering. Guide marks (axis ticks, labels) derive
/// ids from a caller-chosen base plus slot offsets; data-bound marks hash their key with
/// [`MarkId::keyed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an id by hashing a string key into a caller-chosen namespace.
    ///
    /// The hash is FNV-1a over the namespace bytes followed by the key bytes, so the same
    /// `(namespace, key)` pair always yields the same id, in any process, on any platform.
    pub fn keyed(namespace: u64, key: &str) -> Self {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0100_0000_01b3;
        let mut hash = OFFSET;
        for byte in namespace.to_le_bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
        for byte in key.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(PRIME);
        }
        Self(hash)
    }
}

/// Horizontal anchoring of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}

/// Vertical baseline of a text mark relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the vertical midline.
    Middle,
    /// The position is the hanging baseline (top-ish).
    Hanging,
    /// The position is the ideographic baseline (bottom-ish).
    Ideographic,
}

/// An axis-aligned filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

impl RectPayload {
    /// Creates a rect payload with a default (black) fill.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            fill: Brush::default(),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// A run of unshaped text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation around `pos`, in degrees clockwise.
    pub angle: f64,
    /// Horizontal anchoring relative to `pos`.
    pub anchor: TextAnchor,
    /// Vertical baseline relative to `pos`.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextPayload {
    /// Creates a text payload anchored start/alphabetic with a default (black) fill.
    pub fn new(pos: Point, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::default(),
        }
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation in degrees clockwise around the anchor position.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// A Bézier path, optionally filled and/or stroked.
#[derive(Clone, Debug)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint. Defaults to transparent (stroke-only paths).
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0.0` disables the stroke.
    pub stroke_width: f64,
}

impl PathPayload {
    /// Creates a stroke-only path payload with a 1px default (black) stroke.
    pub fn new(path: BezPath) -> Self {
        Self {
            path,
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke: Brush::default(),
            stroke_width: 1.0,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

impl PartialEq for PathPayload {
    fn eq(&self, other: &Self) -> bool {
        self.fill == other.fill
            && self.stroke == other.stroke
            && self.stroke_width == other.stroke_width
            && self.path.elements() == other.path.elements()
    }
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// A run of unshaped text.
    Text(TextPayload),
    /// A Bézier path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the geometric bounds of the payload, if they are known without shaping.
    ///
    /// Text payloads return `None`: their extent depends on fonts this crate knows nothing
    /// about. Backends that need text bounds must estimate or measure them.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

impl From<RectPayload> for MarkPayload {
    fn from(value: RectPayload) -> Self {
        Self::Rect(value)
    }
}

impl From<TextPayload> for MarkPayload {
    fn from(value: TextPayload) -> Self {
        Self::Text(value)
    }
}

impl From<PathPayload> for MarkPayload {
    fn from(value: PathPayload) -> Self {
        Self::Path(value)
    }
}

/// A mark: stable id, render order, payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity across updates.
    pub id: MarkId,
    /// Rendering order: higher values draw on top. Ties break by id.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark.
    pub fn new(id: MarkId, z_index: i32, payload: impl Into<MarkPayload>) -> Self {
        Self {
            id,
            z_index,
            payload: payload.into(),
        }
    }
}
