use boxchart_rs::api::{ChartSpecBuilder, ColumnMapping, ColumnTable, Orientation, ScreenAxis};
use boxchart_rs::core::{ContainerMetrics, MeasureRangeTuning};
use boxchart_rs::render::{NullDelegate, RenderDelegate};
use serde_json::{Map, Value, json};

fn mapping() -> ColumnMapping {
    ColumnMapping {
        category: "region".to_owned(),
        whisker_low: "low".to_owned(),
        box_low: "q1".to_owned(),
        median: "median".to_owned(),
        box_high: "q3".to_owned(),
        whisker_high: "high".to_owned(),
    }
}

fn seeded_table() -> ColumnTable {
    let mut table = ColumnTable::new();
    table.insert(
        "region",
        vec![json!("a rather long region label"), json!("south")],
    );
    table.insert("low", vec![json!(0.0), json!(5.0)]);
    table.insert("q1", vec![json!(10.0), json!(15.0)]);
    table.insert("median", vec![json!(20.0), json!(25.0)]);
    table.insert("q3", vec![json!(30.0), json!(35.0)]);
    table.insert("high", vec![json!(40.0), json!(100.0)]);
    table
}

fn options(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect()
}

#[test]
fn builder_assembles_the_full_spec() {
    let mut builder = ChartSpecBuilder::new();
    let spec = builder
        .build(
            &seeded_table(),
            &mapping(),
            &options(&[("orientation", json!("horizontal"))]),
            Some("#,##0.00"),
            ContainerMetrics::new(1000.0, 600.0),
            MeasureRangeTuning::default(),
        )
        .expect("spec assembly");

    assert_eq!(spec.series.len(), 2);
    assert_eq!(spec.style.orientation, Orientation::Horizontal);
    assert_eq!(spec.axis_assignment.category_axis, ScreenAxis::Y);

    let min = spec.measure_bounds.min.expect("explicit min");
    let max = spec.measure_bounds.max.expect("explicit max");
    assert!((min - 0.0).abs() <= 1e-9);
    assert!((max - 108.0).abs() <= 1e-9);

    let mut delegate = NullDelegate::default();
    delegate.present(&spec).expect("present spec");
    assert_eq!(delegate.last_category_count, 2);
}

#[test]
fn truncated_axis_label_keeps_original_retrievable_by_index() {
    let mut builder = ChartSpecBuilder::new();
    let spec = builder
        .build(
            &seeded_table(),
            &mapping(),
            &options(&[("label_rotation", json!(90))]),
            None,
            ContainerMetrics::new(1000.0, 100.0),
            MeasureRangeTuning::default(),
        )
        .expect("spec assembly");

    let original = spec.series.label_at(0).expect("original label");
    let displayed = spec.label_budget.clip(original);
    assert!(displayed.chars().count() < original.chars().count());
    assert_eq!(original, "a rather long region label");
}

#[test]
fn repeated_builds_with_identical_inputs_are_idempotent() {
    let mut builder = ChartSpecBuilder::new();
    let table = seeded_table();
    let style_options = options(&[]);
    let container = ContainerMetrics::new(800.0, 600.0);

    let first = builder
        .build(
            &table,
            &mapping(),
            &style_options,
            None,
            container,
            MeasureRangeTuning::default(),
        )
        .expect("first build");
    let second = builder
        .build(
            &table,
            &mapping(),
            &style_options,
            None,
            container,
            MeasureRangeTuning::default(),
        )
        .expect("second build");

    assert_eq!(first, second);
}

#[test]
fn unmapped_columns_degrade_to_an_empty_chart() {
    let mut builder = ChartSpecBuilder::new();
    let spec = builder
        .build(
            &ColumnTable::new(),
            &mapping(),
            &Map::new(),
            None,
            ContainerMetrics::new(800.0, 600.0),
            MeasureRangeTuning::default(),
        )
        .expect("spec assembly");

    assert!(spec.series.is_empty());
    assert!(!spec.measure_bounds.is_set());
    assert_eq!(spec.label_budget.max_chars(), None);

    let mut delegate = NullDelegate::default();
    delegate.present(&spec).expect("empty chart still presents");
    assert_eq!(delegate.last_category_count, 0);
}
