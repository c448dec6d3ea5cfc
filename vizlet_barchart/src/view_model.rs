// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barchart view-model construction.

use vizlet_host::DataView;

use crate::data::{TabularInput, ViewModelError};
use crate::settings::BarchartSettings;

/// One category/value pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Category label.
    pub category: String,
    /// Measure value.
    pub value: f64,
}

/// Everything one render pass needs from the data side.
///
/// Built fresh on every update, never mutated afterwards. Equal inputs build equal view
/// models, which is what makes the pipeline testable end to end.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    /// Data points, sorted by descending value when `sort_by_size` is set, otherwise in
    /// host row order.
    pub data_points: Vec<DataPoint>,
    /// Display format string of the measure column.
    pub number_format: Option<String>,
    /// Display name of the category column.
    pub column_name: String,
    /// Display name of the measure column.
    pub measure_name: String,
}

impl ViewModel {
    /// Builds the view model for one update.
    pub fn build(
        data_view: Option<&DataView>,
        settings: &BarchartSettings,
    ) -> Result<Self, ViewModelError> {
        let input = TabularInput::from_data_view(data_view)?;
        let mut data_points = input.data_points;
        if settings.sort_by_size {
            // Stable, so ties keep host row order.
            data_points.sort_by(|a, b| b.value.total_cmp(&a.value));
        }
        Ok(Self {
            data_points,
            number_format: input.number_format,
            column_name: input.column_name,
            measure_name: input.measure_name,
        })
    }

    /// Largest measure value, or `None` when there are no data points.
    pub fn max_value(&self) -> Option<f64> {
        self.data_points.iter().map(|p| p.value).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use vizlet_host::{Categorical, CategoryColumn, ColumnMetadata, Metadata, ValueColumn};

    use super::*;

    fn view(rows: &[(&str, f64)]) -> DataView {
        DataView {
            categorical: Some(Categorical {
                categories: vec![CategoryColumn {
                    source: ColumnMetadata::named("Drink"),
                    values: rows.iter().map(|(label, _)| json!(label)).collect(),
                }],
                values: vec![ValueColumn {
                    source: ColumnMetadata::named("Sales"),
                    values: rows.iter().map(|(_, value)| Some(*value)).collect(),
                }],
            }),
            metadata: Metadata::default(),
        }
    }

    fn categories(model: &ViewModel) -> Vec<&str> {
        model
            .data_points
            .iter()
            .map(|p| p.category.as_str())
            .collect()
    }

    #[test]
    fn unsorted_models_keep_host_row_order() {
        let view = view(&[("Tea", 2.0), ("Coffee", 9.0), ("Juice", 4.0)]);
        let model = ViewModel::build(Some(&view), &BarchartSettings::default()).unwrap();
        assert_eq!(categories(&model), vec!["Tea", "Coffee", "Juice"]);
    }

    #[test]
    fn sort_by_size_orders_descending_with_stable_ties() {
        let view = view(&[("Tea", 2.0), ("Coffee", 9.0), ("Soda", 2.0), ("Juice", 4.0)]);
        let settings = BarchartSettings {
            sort_by_size: true,
            ..BarchartSettings::default()
        };
        let model = ViewModel::build(Some(&view), &settings).unwrap();
        assert_eq!(categories(&model), vec!["Coffee", "Juice", "Tea", "Soda"]);
        let values: Vec<_> = model.data_points.iter().map(|p| p.value).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "values are non-increasing");
    }

    #[test]
    fn equal_inputs_build_equal_models() {
        let view = view(&[("Tea", 2.0), ("Coffee", 9.0)]);
        let settings = BarchartSettings {
            sort_by_size: true,
            ..BarchartSettings::default()
        };
        let first = ViewModel::build(Some(&view), &settings).unwrap();
        let second = ViewModel::build(Some(&view), &settings).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn max_value_is_absent_for_empty_data() {
        let model = ViewModel::build(Some(&view(&[])), &BarchartSettings::default()).unwrap();
        assert_eq!(model.max_value(), None);
        let model = ViewModel::build(Some(&view(&[("Tea", 2.0), ("Coffee", 9.0)])), &BarchartSettings::default())
            .unwrap();
        assert_eq!(model.max_value(), Some(9.0));
    }
}
