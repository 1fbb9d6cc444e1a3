use touchchart::ChartEngine;
use touchchart::api::ChartEngineConfig;
use touchchart::core::{AxisKind, AxisRange, AxisSide, ChartData, Entry, Series};

#[test]
fn flat_data_always_yields_range_of_exactly_two() {
    for value in [-1_000.0, 0.0, 0.5, 42.0, 1e9] {
        let mut axis = AxisRange::new(AxisKind::Value);
        axis.calculate(value, value);

        assert_eq!(axis.range(), 2.0, "value {value}");
        assert!(axis.is_degenerate());
        assert_eq!(axis.min(), value - 1.0);
        assert_eq!(axis.max(), value + 1.0);
    }
}

#[test]
fn range_is_never_zero() {
    let mut axis = AxisRange::with_space(AxisKind::Value, 0.0, 0.0);
    axis.calculate(7.0, 7.0);
    assert!(axis.range() > 0.0);

    axis.calculate(0.0, 10.0);
    assert_eq!(axis.range(), 10.0);
    assert!(!axis.is_degenerate());
}

#[test]
fn value_axis_spacing_is_a_fraction_of_the_data_range() {
    let mut axis = AxisRange::with_space(AxisKind::Value, 0.10, 0.20);
    axis.calculate(0.0, 100.0);

    assert!((axis.min() - (-10.0)).abs() <= 1e-9);
    assert!((axis.max() - 120.0).abs() <= 1e-9);
    assert!((axis.range() - 130.0).abs() <= 1e-9);
}

#[test]
fn pinned_min_wins_over_padded_data_bound() {
    let mut axis = AxisRange::with_space(AxisKind::Value, 0.10, 0.10);
    axis.set_custom_min(Some(0.0));
    axis.calculate(5.0, 100.0);

    assert_eq!(axis.min(), 0.0);
    assert!(axis.has_custom_min());
    // Max still padded from data; range recomputed from effective bounds.
    assert!((axis.max() - 109.5).abs() <= 1e-9);
    assert!((axis.range() - 109.5).abs() <= 1e-9);
}

#[test]
fn clearing_a_pinned_bound_restores_data_driven_bounds() {
    let mut axis = AxisRange::with_space(AxisKind::Value, 0.0, 0.0);
    axis.set_custom_max(Some(50.0));
    axis.calculate(0.0, 100.0);
    assert_eq!(axis.max(), 50.0);

    axis.set_custom_max(None);
    axis.calculate(0.0, 100.0);
    assert_eq!(axis.max(), 100.0);
}

#[test]
fn pinned_bounds_can_still_produce_a_degenerate_interval() {
    let mut axis = AxisRange::with_space(AxisKind::Value, 0.0, 0.0);
    axis.set_custom_min(Some(10.0));
    axis.set_custom_max(Some(10.0));
    axis.calculate(0.0, 100.0);

    assert!(axis.is_degenerate());
    assert_eq!(axis.range(), 2.0);
}

#[test]
fn engine_recalculates_axes_when_data_changes() {
    let mut engine =
        ChartEngine::new(ChartEngineConfig::new(1000.0, 500.0)).expect("engine init");

    let series = Series::new(vec![Entry::new(0.0, 0.0), Entry::new(10.0, 100.0)]);
    engine.set_data(ChartData::new(vec![series]));

    let left = engine.y_axis(AxisSide::Left);
    assert!((left.min() - (-10.0)).abs() <= 1e-9);
    assert!((left.max() - 110.0).abs() <= 1e-9);

    engine
        .data_mut()
        .series_at_mut(0)
        .expect("series exists")
        .add_entry(Entry::new(11.0, 200.0));
    engine.notify_data_changed();

    let left = engine.y_axis(AxisSide::Left);
    assert!((left.max() - 220.0).abs() <= 1e-9);
}

#[test]
fn engine_with_no_data_still_has_sane_axes() {
    let engine = ChartEngine::new(ChartEngineConfig::new(800.0, 400.0)).expect("engine init");

    // Zeroed data ranges expand to a drawable ±1 axis.
    assert_eq!(engine.y_axis(AxisSide::Left).range(), 2.0);
    assert!(engine.y_axis(AxisSide::Left).is_degenerate());
    assert_eq!(engine.x_axis().range(), 2.0);
}
