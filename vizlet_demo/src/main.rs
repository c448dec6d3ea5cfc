// Copyright 2025 the Vizlet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo pages for the Vizlet sample visuals.
mod html;
mod svg;

use kurbo::Rect;
use serde_json::json;
use vizlet_barchart::Barchart;
use vizlet_hello::Hello;
use vizlet_host::{
    Categorical, CategoryColumn, ColumnMetadata, DataView, HostServices, Metadata, UpdateOptions,
    ValueColumn, Viewport, Visual,
};

fn main() {
    env_logger::init();

    let sections = vec![
        bar_demo(),
        keyed_update_demo(),
        sorted_demo(),
        styled_demo(),
        display_units_demo(),
        invalid_input_demo(),
        degenerate_demo(),
        hello_demo(),
    ];

    let report = html::render_report("Vizlet sample visuals demo", &sections);
    std::fs::write("vizlet_demo.html", report).expect("write vizlet_demo.html");
    println!("wrote vizlet_demo.html");
}

/// Runs one host update, applies the diffs to the SVG backend and snapshots it.
fn run_update(
    visual: &mut dyn Visual,
    backend: &mut svg::SvgScene,
    options: &UpdateOptions,
    label: &str,
) -> String {
    let diffs = visual.update(options);
    log::info!("{label}: {} mark diffs", diffs.len());
    backend.apply_diffs(&diffs);
    backend.to_svg_string()
}

/// Builds a single-category, single-measure data view the way a host would.
fn sales_view(category: &str, measure: &str, format: &str, rows: &[(&str, f64)]) -> DataView {
    let category_meta = ColumnMetadata::named(category);
    let measure_meta = ColumnMetadata::named(measure).with_format(format);
    DataView {
        categorical: Some(Categorical {
            categories: vec![CategoryColumn {
                source: category_meta.clone(),
                values: rows
                    .iter()
                    .map(|(label, _)| serde_json::Value::from(*label))
                    .collect(),
            }],
            values: vec![ValueColumn {
                source: measure_meta.clone(),
                values: rows.iter().map(|(_, value)| Some(*value)).collect(),
            }],
        }),
        metadata: Metadata {
            // Hosts list the measure column first.
            columns: vec![measure_meta, category_meta],
            objects: None,
        },
    }
}

fn drinks_view(rows: &[(&str, f64)]) -> DataView {
    sales_view("Drink", "Sales", "0.00", rows)
}

fn bar_backend(viewport: Viewport) -> svg::SvgScene {
    let mut backend = svg::SvgScene::default();
    backend.set_view_box(Rect::new(0.0, 0.0, viewport.width, viewport.height));
    backend
}

fn bar_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let options = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 9.18),
        ("Tea", 4.25),
        ("Soda", 7.5),
        ("Juice", 2.25),
        ("Water", 5.75),
    ]));
    let svg = run_update(&mut chart, &mut backend, &options, "bar first render");

    html::HtmlSection {
        title: "Barchart",
        description: "One categorical data view rendered as bars over a band x-axis and a \
            linear y-axis. The value domain tops out 2% above the largest value so the \
            tallest bar clears the plot edge.",
        svg,
    }
}

fn keyed_update_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let first = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 9.18),
        ("Tea", 4.25),
        ("Soda", 7.5),
        ("Juice", 2.25),
    ]));
    let before = run_update(&mut chart, &mut backend, &first, "keyed update, first render");

    let second = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 6.0),
        ("Tea", 8.5),
        ("Juice", 2.25),
        ("Cocoa", 4.0),
    ]));
    let after = run_update(&mut chart, &mut backend, &second, "keyed update, second render");

    html::HtmlSection {
        title: "Keyed updates",
        description: "Bar ids are hashed from the category, so re-sending changed data \
            mutates surviving bars in place: Soda exits, Cocoa enters, and Coffee and Tea \
            resize without being recreated. Left: first render. Right: after the change.",
        svg: side_by_side(&before, &after),
    }
}

fn sorted_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let rows = [
        ("Coffee", 9.18),
        ("Tea", 4.25),
        ("Soda", 7.5),
        ("Juice", 2.25),
        ("Water", 5.75),
    ];
    let unsorted = UpdateOptions::new(viewport).with_data_view(drinks_view(&rows));
    let before = run_update(&mut chart, &mut backend, &unsorted, "sort off");

    let sorted = UpdateOptions::new(viewport)
        .with_data_view(drinks_view(&rows))
        .with_settings(json!({ "barchartProperties": { "sortBySize": true } }));
    let after = run_update(&mut chart, &mut backend, &sorted, "sort on");

    html::HtmlSection {
        title: "Sort by size",
        description: "Toggling sortBySize re-orders the band domain by descending value. \
            The bars keep their ids and move to new slots, as do the category labels under \
            them. Left: host row order. Right: sorted.",
        svg: side_by_side(&before, &after),
    }
}

fn styled_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let options = UpdateOptions::new(viewport)
        .with_data_view(drinks_view(&[
            ("Coffee", 9.18),
            ("Tea", 4.25),
            ("Soda", 7.5),
            ("Juice", 2.25),
        ]))
        .with_settings(json!({
            "barchartProperties": {
                "barColor": { "solid": { "color": "#107C10" } },
                "xAxisFontSize": 16.0,
                "yAxisFontSize": 14.0,
            }
        }));
    let svg = run_update(&mut chart, &mut backend, &options, "styled render");

    html::HtmlSection {
        title: "Settings: fill and fonts",
        description: "A persisted-settings blob restyles the visual: the structured color \
            payload becomes the bar fill, and the axis font sizes scale both the labels and \
            the margins reserved for them, shrinking the plot.",
        svg,
    }
}

fn display_units_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let options = UpdateOptions::new(viewport).with_data_view(sales_view(
        "Region",
        "Revenue",
        "0.00",
        &[
            ("North", 1_250_000.0),
            ("South", 860_000.0),
            ("East", 940_000.0),
            ("West", 410_000.0),
        ],
    ));
    let svg = run_update(&mut chart, &mut backend, &options, "display units render");

    html::HtmlSection {
        title: "Display units",
        description: "The value-axis formatter picks a display unit from one hundredth of the \
            domain maximum, so revenue in the millions labels in thousands (K) instead of raw \
            seven-digit numbers.",
        svg,
    }
}

fn invalid_input_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let valid = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 9.18),
        ("Tea", 4.25),
        ("Soda", 7.5),
    ]));
    run_update(&mut chart, &mut backend, &valid, "resilience, valid render");

    // No data view bound at all. The update logs a warning and returns no diffs.
    let missing = UpdateOptions::new(viewport);
    let svg = run_update(&mut chart, &mut backend, &missing, "resilience, missing data");

    html::HtmlSection {
        title: "Invalid input",
        description: "An update without a usable data view is a no-op: no diffs come back \
            and the prior render stays on screen (shown). The next valid update diffs \
            against it as if nothing happened.",
        svg,
    }
}

fn degenerate_demo() -> html::HtmlSection {
    let mut chart = Barchart::new(HostServices::new());
    let viewport = Viewport::new(360.0, 240.0);
    let mut backend = bar_backend(viewport);

    let flat = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 0.0),
        ("Tea", 0.0),
        ("Soda", 0.0),
    ]));
    let before = run_update(&mut chart, &mut backend, &flat, "degenerate domain");

    let recovered = UpdateOptions::new(viewport).with_data_view(drinks_view(&[
        ("Coffee", 9.18),
        ("Tea", 4.25),
        ("Soda", 7.5),
    ]));
    let after = run_update(&mut chart, &mut backend, &recovered, "degenerate recovery");

    html::HtmlSection {
        title: "Degenerate domain",
        description: "With no positive finite value the domain collapses, so the visual \
            retains only the plot background rather than inventing an axis. Valid data on \
            the next update enters the full chart. Left: all-zero data. Right: recovered.",
        svg: side_by_side(&before, &after),
    }
}

fn hello_demo() -> html::HtmlSection {
    let mut hello = Hello::new(HostServices::new());
    let viewport = Viewport::new(320.0, 180.0);
    let mut backend = svg::SvgScene::default();
    backend.set_view_box(Rect::new(0.0, 0.0, viewport.width, viewport.height));

    let options = UpdateOptions::new(viewport);
    let svg = run_update(&mut hello, &mut backend, &options, "hello render");

    html::HtmlSection {
        title: "Hello",
        description: "The minimal visual: two centered text marks reporting the viewport \
            size, with the font scaled from the viewport. Resizes update the same two marks \
            in place.",
        svg,
    }
}

fn side_by_side(left: &str, right: &str) -> String {
    format!(
        "<div style=\"display:flex; flex-wrap:wrap; gap:16px; align-items:flex-start;\">{left}{right}</div>"
    )
}
