// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hello visual.

use kurbo::Point;
use vizlet_host::{HostServices, UpdateOptions, Visual};
use vizlet_scene::{Mark, MarkDiff, MarkId, Scene, TextAnchor, TextBaseline, TextPayload};

const WIDTH_TEXT: MarkId = MarkId::from_raw(1);
const HEIGHT_TEXT: MarkId = MarkId::from_raw(2);

/// Renders the viewport dimensions as two centered lines of text.
#[derive(Debug)]
pub struct Hello {
    update_count: u64,
    scene: Scene,
}

impl Hello {
    /// Creates the visual with an empty scene.
    pub fn new(services: HostServices) -> Self {
        log::debug!("hello constructed, host locale {:?}", services.locale);
        Self {
            update_count: 0,
            scene: Scene::new(),
        }
    }

    /// How many updates this instance has handled.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Visual for Hello {
    fn update(&mut self, options: &UpdateOptions) -> Vec<MarkDiff> {
        self.update_count += 1;
        log::debug!("hello update {}", self.update_count);

        let width = options.viewport.width;
        let height = options.viewport.height;
        // Text fills the viewport at either constraint, whichever binds first.
        let font_size = (width / 8.0).round().min((height / 5.0).round()).max(1.0);
        let center = Point::new(width / 2.0, height / 2.0);
        let line_gap = 0.75 * font_size;

        let line = |id, y, text: String| {
            Mark::new(
                id,
                0,
                TextPayload::new(Point::new(center.x, y), text, font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle),
            )
        };
        let marks = vec![
            line(WIDTH_TEXT, center.y - line_gap, format!("Width: {width:.2}")),
            line(HEIGHT_TEXT, center.y + line_gap, format!("Height: {height:.2}")),
        ];
        self.scene.reconcile(marks)
    }
}

#[cfg(test)]
mod tests {
    use vizlet_host::Viewport;
    use vizlet_scene::MarkPayload;

    use super::*;

    fn texts(diffs: &[MarkDiff]) -> Vec<(MarkId, String, f64, Point)> {
        diffs
            .iter()
            .filter_map(|diff| match diff {
                MarkDiff::Enter {
                    id,
                    new: MarkPayload::Text(t),
                    ..
                }
                | MarkDiff::Update {
                    id,
                    new: MarkPayload::Text(t),
                    ..
                } => Some((*id, t.text.clone(), t.font_size, t.pos)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn renders_both_dimensions_centered() {
        let mut hello = Hello::new(HostServices::new());
        let diffs = hello.update(&UpdateOptions::new(Viewport::new(400.0, 200.0)));
        let texts = texts(&diffs);
        assert_eq!(texts.len(), 2);

        // min(round(400 / 8), round(200 / 5)) = min(50, 40).
        let (id, text, font_size, pos) = &texts[0];
        assert_eq!(*id, WIDTH_TEXT);
        assert_eq!(text, "Width: 400.00");
        assert_eq!(*font_size, 40.0);
        assert_eq!((pos.x, pos.y), (200.0, 100.0 - 30.0));

        let (_, text, _, pos) = &texts[1];
        assert_eq!(text, "Height: 200.00");
        assert_eq!((pos.x, pos.y), (200.0, 100.0 + 30.0));
    }

    #[test]
    fn resizes_update_the_same_marks() {
        let mut hello = Hello::new(HostServices::new());
        hello.update(&UpdateOptions::new(Viewport::new(400.0, 200.0)));
        let diffs = hello.update(&UpdateOptions::new(Viewport::new(300.0, 200.0)));
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs.iter().all(|d| matches!(d, MarkDiff::Update { .. })),
            "resize rewrites both lines in place"
        );
        assert_eq!(hello.update_count(), 2);
    }

    #[test]
    fn font_size_never_collapses_below_one() {
        let mut hello = Hello::new(HostServices::new());
        let diffs = hello.update(&UpdateOptions::new(Viewport::new(0.0, 0.0)));
        let texts = texts(&diffs);
        assert!(texts.iter().all(|(_, _, font_size, _)| *font_size == 1.0));
    }

    #[test]
    fn has_no_settings_to_enumerate() {
        let hello = Hello::new(HostServices::new());
        assert!(hello.enumerate_settings().is_empty());
    }
}
