use touchchart::core::{AxisSide, ChartData, Entry, Rounding, Series};

fn series_from(values: &[(f64, f64)]) -> Series {
    Series::new(values.iter().map(|&(x, y)| Entry::new(x, y)).collect())
}

#[test]
fn extrema_match_entries_after_construction() {
    let series = series_from(&[(0.0, 3.0), (1.0, -2.0), (2.0, 7.0)]);

    assert_eq!(series.x_min(), 0.0);
    assert_eq!(series.x_max(), 2.0);
    assert_eq!(series.y_min(), -2.0);
    assert_eq!(series.y_max(), 7.0);
}

#[test]
fn empty_series_has_zeroed_extrema() {
    let series = Series::default();

    assert_eq!(series.x_min(), 0.0);
    assert_eq!(series.x_max(), 0.0);
    assert_eq!(series.y_min(), 0.0);
    assert_eq!(series.y_max(), 0.0);
}

#[test]
fn incremental_add_updates_extrema() {
    let mut series = series_from(&[(0.0, 1.0)]);
    series.add_entry(Entry::new(5.0, -4.0));

    assert_eq!(series.x_max(), 5.0);
    assert_eq!(series.y_min(), -4.0);
}

#[test]
fn add_to_empty_series_seeds_extrema() {
    let mut series = Series::default();
    series.add_entry(Entry::new(3.0, 9.0));

    assert_eq!(series.x_min(), 3.0);
    assert_eq!(series.x_max(), 3.0);
    assert_eq!(series.y_min(), 9.0);
    assert_eq!(series.y_max(), 9.0);
}

#[test]
fn entry_mutation_is_lazy_until_recompute() {
    let mut series = series_from(&[(0.0, 1.0), (1.0, 2.0)]);
    series
        .entry_mut(1)
        .expect("entry exists")
        .set_y(50.0);

    // Stale until the explicit recompute.
    assert_eq!(series.y_max(), 2.0);

    series.calc_min_max();
    assert_eq!(series.y_max(), 50.0);
}

#[test]
fn removal_forces_full_rescan() {
    let mut series = series_from(&[(0.0, 1.0), (1.0, 100.0), (2.0, 3.0)]);
    let removed = series.remove_entry(1).expect("entry removed");

    assert_eq!(removed.y(), 100.0);
    assert_eq!(series.y_max(), 3.0);
}

#[test]
fn ordered_insert_keeps_ascending_x() {
    let mut series = series_from(&[(0.0, 1.0), (2.0, 1.0), (4.0, 1.0)]);
    series.add_entry_ordered(Entry::new(3.0, 2.0));

    let xs: Vec<f64> = series.entries().iter().map(|e| e.x()).collect();
    assert_eq!(xs, vec![0.0, 2.0, 3.0, 4.0]);
}

#[test]
fn index_lookup_respects_rounding() {
    let series = series_from(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0)]);

    assert_eq!(series.entry_index_for_x(2.5, Rounding::Down), Some(1));
    assert_eq!(series.entry_index_for_x(2.5, Rounding::Up), Some(2));
    assert_eq!(series.entry_index_for_x(2.5, Rounding::Closest), Some(1));
    assert_eq!(series.entry_index_for_x(3.5, Rounding::Closest), Some(2));
    assert_eq!(series.entry_index_for_x(5.0, Rounding::Up), None);
    assert_eq!(series.entry_index_for_x(-1.0, Rounding::Down), None);
}

#[test]
fn aggregate_tracks_per_side_ranges() {
    let mut left = series_from(&[(0.0, 10.0), (1.0, 20.0)]);
    left.set_axis_side(AxisSide::Left);
    let mut right = series_from(&[(0.0, -5.0), (1.0, 5.0)]);
    right.set_axis_side(AxisSide::Right);

    let data = ChartData::new(vec![left, right]);

    assert_eq!(data.y_min(AxisSide::Left), 10.0);
    assert_eq!(data.y_max(AxisSide::Left), 20.0);
    assert_eq!(data.y_min(AxisSide::Right), -5.0);
    assert_eq!(data.y_max(AxisSide::Right), 5.0);
    assert_eq!(data.x_min(), 0.0);
    assert_eq!(data.x_max(), 1.0);
}

#[test]
fn empty_axis_side_mirrors_the_other() {
    let mut left = series_from(&[(0.0, 10.0), (1.0, 20.0)]);
    left.set_axis_side(AxisSide::Left);

    let data = ChartData::new(vec![left]);

    assert_eq!(data.y_min(AxisSide::Right), 10.0);
    assert_eq!(data.y_max(AxisSide::Right), 20.0);
}

#[test]
fn empty_aggregate_yields_zeroed_ranges() {
    let data = ChartData::default();

    assert_eq!(data.x_min(), 0.0);
    assert_eq!(data.x_max(), 0.0);
    assert_eq!(data.y_min(AxisSide::Left), 0.0);
    assert_eq!(data.y_max(AxisSide::Right), 0.0);
}

#[test]
fn empty_series_do_not_drag_aggregate_toward_origin() {
    let mut populated = series_from(&[(5.0, 50.0), (6.0, 60.0)]);
    populated.set_axis_side(AxisSide::Left);

    let data = ChartData::new(vec![populated, Series::default()]);

    assert_eq!(data.x_min(), 5.0);
    assert_eq!(data.y_min(AxisSide::Left), 50.0);
}

#[test]
fn aggregate_recompute_is_lazy_until_notify() {
    let mut left = series_from(&[(0.0, 1.0)]);
    left.set_axis_side(AxisSide::Left);
    let mut data = ChartData::new(vec![left]);

    data.series_at_mut(0)
        .expect("series exists")
        .add_entry(Entry::new(1.0, 99.0));

    // Series-level extrema updated incrementally, aggregate still stale.
    assert_eq!(data.y_max(AxisSide::Left), 1.0);

    data.notify_data_changed();
    assert_eq!(data.y_max(AxisSide::Left), 99.0);
}

#[test]
#[should_panic(expected = "grouped layout requires at least two series")]
fn grouping_a_single_series_fails_loudly() {
    let data = ChartData::new(vec![series_from(&[(0.0, 1.0)])]);
    let _ = data.grouped();
}
