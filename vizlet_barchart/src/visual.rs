// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The barchart visual.

use peniko::Brush;
use peniko::color::Srgb;
use peniko::color::palette::css;
use vizlet_charts::{
    AxisSpec, BarMarkSpec, DisplayUnitFormatter, FormatOptions, Margins, PLOT_BACKGROUND,
    PlotLayoutSpec, ScaleBand, ScaleLinear, Size,
};
use vizlet_host::{
    HostServices, SettingsCard, SettingsProperty, UpdateOptions, Viewport, Visual,
};
use vizlet_scene::{Mark, MarkDiff, MarkId, RectPayload, Scene};

use crate::settings::{
    BAR_COLOR, BarchartSettings, MAX_AXIS_FONT_SIZE, MIN_AXIS_FONT_SIZE, PROPERTIES_CARD,
    SORT_BY_SIZE, X_AXIS_FONT_SIZE, Y_AXIS_FONT_SIZE,
};
use crate::view_model::ViewModel;

const BASE_MARGINS: Margins = Margins::new(20.0, 20.0, 20.0, 50.0);
const BAND_PADDING: f64 = 0.1;
const DOMAIN_HEADROOM: f64 = 1.02;

/// A categorical barchart over one category column and one measure column.
///
/// Owns the retained scene its updates diff against. The `&mut self` receiver on
/// [`Visual::update`] is what serializes updates; there is no internal locking.
#[derive(Debug)]
pub struct Barchart {
    services: HostServices,
    settings: BarchartSettings,
    scene: Scene,
}

impl Barchart {
    /// Mark id of the plot background rect.
    pub const BACKGROUND_ID: MarkId = MarkId::from_raw(1);
    /// Keyed-id namespace for bar marks; each bar's id is
    /// `MarkId::keyed(Self::BAR_MARKS, category)`.
    pub const BAR_MARKS: u64 = 2;
    /// Id base for category (bottom) axis marks.
    pub const X_AXIS_IDS: u64 = 1_000;
    /// Id base for value (left) axis marks.
    pub const Y_AXIS_IDS: u64 = 1_000_000;

    /// Creates a barchart with an empty scene and default settings.
    pub fn new(services: HostServices) -> Self {
        log::debug!("barchart constructed, host locale {:?}", services.locale);
        Self {
            services,
            settings: BarchartSettings::default(),
            scene: Scene::new(),
        }
    }

    /// The most recently parsed settings.
    pub fn settings(&self) -> &BarchartSettings {
        &self.settings
    }

    /// The retained scene the next update will diff against.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Builds the full desired mark set for one update.
    fn desired_marks(&self, view_model: &ViewModel, viewport: Viewport) -> Vec<Mark> {
        let layout = PlotLayoutSpec::new(BASE_MARGINS)
            .with_axis_font_sizes(self.settings.x_axis_font_size, self.settings.y_axis_font_size)
            .arrange(Size::new(viewport.width, viewport.height));
        let plot = layout.plot;

        let mut marks = vec![Mark::new(
            Self::BACKGROUND_ID,
            PLOT_BACKGROUND,
            RectPayload::new(plot).with_fill(css::WHITE),
        )];

        let Some(max_value) = view_model
            .max_value()
            .filter(|max| max.is_finite() && *max > 0.0)
        else {
            log::debug!("degenerate value domain, rendering plot background only");
            return marks;
        };

        let band = ScaleBand::new(
            (plot.x0, plot.x1),
            view_model.data_points.iter().map(|p| p.category.as_str()),
        )
        .with_padding(BAND_PADDING, BAND_PADDING);
        let linear = ScaleLinear::new((0.0, max_value * DOMAIN_HEADROOM), (plot.y1, plot.y0));

        let x_axis = AxisSpec::bottom(Self::X_AXIS_IDS, band.clone())
            .with_font_size(self.settings.x_axis_font_size);
        marks.extend(x_axis.marks(plot));

        let formatter = DisplayUnitFormatter::new(&FormatOptions {
            format: view_model.number_format.clone(),
            reference: max_value / 100.0,
            locale: self.services.locale.clone(),
        });
        let y_axis = AxisSpec::left(Self::Y_AXIS_IDS, linear)
            .with_font_size(self.settings.y_axis_font_size)
            .with_formatter(formatter);
        marks.extend(y_axis.marks(plot));

        let bars = BarMarkSpec::new(Self::BAR_MARKS, band, linear).with_fill(self.bar_fill());
        marks.extend(bars.marks(
            view_model
                .data_points
                .iter()
                .map(|p| (p.category.as_str(), p.value)),
        ));

        marks
    }

    /// Resolves the configured bar color, falling back to the default when unparsable.
    fn bar_fill(&self) -> Brush {
        let color = self.settings.bar_color.css();
        match peniko::color::parse_color(color) {
            Ok(parsed) => Brush::Solid(parsed.to_alpha_color::<Srgb>()),
            Err(err) => {
                log::warn!("unparsable bar color {color:?} ({err}), using the default");
                css::TEAL.into()
            }
        }
    }
}

impl Visual for Barchart {
    fn update(&mut self, options: &UpdateOptions) -> Vec<MarkDiff> {
        log::debug!(
            "barchart update, viewport {}x{}",
            options.viewport.width,
            options.viewport.height
        );
        self.settings = persisted_settings(options)
            .map(BarchartSettings::from_value)
            .unwrap_or_default();

        let view_model = match ViewModel::build(options.data_view.as_ref(), &self.settings) {
            Ok(model) => model,
            Err(err) => {
                log::warn!("barchart update skipped: {err}");
                return Vec::new();
            }
        };

        let marks = self.desired_marks(&view_model, options.viewport);
        self.scene.reconcile(marks)
    }

    fn enumerate_settings(&self) -> Vec<SettingsCard> {
        vec![
            SettingsCard::new(PROPERTIES_CARD)
                .with_property(SettingsProperty::bool(SORT_BY_SIZE, self.settings.sort_by_size))
                .with_property(
                    SettingsProperty::number(X_AXIS_FONT_SIZE, self.settings.x_axis_font_size)
                        .with_range(MIN_AXIS_FONT_SIZE, MAX_AXIS_FONT_SIZE),
                )
                .with_property(
                    SettingsProperty::number(Y_AXIS_FONT_SIZE, self.settings.y_axis_font_size)
                        .with_range(MIN_AXIS_FONT_SIZE, MAX_AXIS_FONT_SIZE),
                )
                .with_property(SettingsProperty::color(BAR_COLOR, self.settings.bar_color.css())),
        ]
    }
}

/// The settings blob for this update: explicitly threaded options win, then the blob
/// persisted inline on the data view's metadata.
fn persisted_settings(options: &UpdateOptions) -> Option<&serde_json::Value> {
    if !options.settings.is_null() {
        return Some(&options.settings);
    }
    options.data_view.as_ref()?.metadata.objects.as_ref()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vizlet_host::{DataView, Metadata};

    use super::*;

    #[test]
    fn threaded_settings_take_precedence_over_inline_objects() {
        let inline = json!({ "barchartProperties": { "sortBySize": false } });
        let threaded = json!({ "barchartProperties": { "sortBySize": true } });
        let options = UpdateOptions::new(Viewport::new(100.0, 100.0))
            .with_data_view(DataView {
                categorical: None,
                metadata: Metadata {
                    columns: vec![],
                    objects: Some(inline),
                },
            })
            .with_settings(threaded);
        let parsed = BarchartSettings::from_value(persisted_settings(&options).unwrap());
        assert!(parsed.sort_by_size);
    }

    #[test]
    fn inline_objects_apply_when_no_settings_are_threaded() {
        let inline = json!({ "barchartProperties": { "sortBySize": true } });
        let options = UpdateOptions::new(Viewport::new(100.0, 100.0)).with_data_view(DataView {
            categorical: None,
            metadata: Metadata {
                columns: vec![],
                objects: Some(inline),
            },
        });
        let parsed = BarchartSettings::from_value(persisted_settings(&options).unwrap());
        assert!(parsed.sort_by_size);

        let bare = UpdateOptions::new(Viewport::new(100.0, 100.0));
        assert!(persisted_settings(&bare).is_none());
    }

    #[test]
    fn bar_fill_parses_css_and_falls_back_on_junk() {
        let mut chart = Barchart::new(HostServices::new());
        chart.settings.bar_color = crate::settings::BarColor::Raw("#FF0000".into());
        assert_eq!(chart.bar_fill(), Brush::Solid(css::RED));

        chart.settings.bar_color = crate::settings::BarColor::Raw("not-a-color".into());
        assert_eq!(chart.bar_fill(), Brush::Solid(css::TEAL));
    }
}
