use approx::assert_abs_diff_eq;
use chart_highlight::api::{Chart, ChartConfig};
use chart_highlight::core::{AxisDependency, AxisRange, ChartData, DataSet, Entry, PlotRect};
use chart_highlight::interaction::{CandidatePolicy, CartesianHighlighter, Highlighter};

// 100x100 plot: x in [0, 10] -> 10 px per unit, primary y in [0, 100] -> 1 px
// per unit (inverted), secondary y in [0, 10] -> 10 px per unit (inverted).
fn chart_with(data_sets: Vec<DataSet>) -> Chart {
    let config = ChartConfig::new(
        PlotRect::sized(100.0, 100.0),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    )
    .with_secondary_range(AxisRange::new(0.0, 10.0));
    let mut chart = Chart::new(config).expect("chart init");
    chart.set_data(ChartData::new(data_sets));
    chart
}

#[test]
fn nearest_entry_wins_between_rounding_neighbours() {
    let chart = chart_with(vec![DataSet::new(vec![
        Entry::new(0.0, 1.0),
        Entry::new(1.0, 5.0),
        Entry::new(2.0, 2.0),
    ])]);

    // x = 9 px maps to data x = 0.9; neighbours are x = 0 and x = 1.
    let highlight = chart.highlight_by_touch_point(9.0, 95.0).expect("highlight");
    assert_abs_diff_eq!(highlight.x, 1.0);
    assert_abs_diff_eq!(highlight.y, 5.0);
    assert_abs_diff_eq!(highlight.x_px, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(highlight.y_px, 95.0, epsilon = 1e-9);
    assert_eq!(highlight.data_set_index, 0);
    assert_eq!(highlight.axis, AxisDependency::Primary);
    assert_eq!(highlight.stack_index, None);
}

#[test]
fn vertically_closer_axis_is_preferred() {
    let chart = chart_with(vec![
        DataSet::new(vec![Entry::new(1.0, 50.0)]),
        DataSet::new(vec![Entry::new(1.0, 8.0)]).with_axis(AxisDependency::Secondary),
    ]);

    // Primary point sits at y = 50 px, secondary at y = 20 px.
    let highlight = chart.highlight_by_touch_point(10.0, 25.0).expect("highlight");
    assert_eq!(highlight.axis, AxisDependency::Secondary);
    assert_eq!(highlight.data_set_index, 1);
    assert_abs_diff_eq!(highlight.y, 8.0);
}

#[test]
fn axis_tie_prefers_primary() {
    let chart = chart_with(vec![
        DataSet::new(vec![Entry::new(1.0, 60.0)]),
        DataSet::new(vec![Entry::new(1.0, 4.0)]).with_axis(AxisDependency::Secondary),
    ]);

    // Primary at y = 40 px, secondary at y = 60 px; pointer halfway between.
    let highlight = chart.highlight_by_touch_point(10.0, 50.0).expect("highlight");
    assert_eq!(highlight.axis, AxisDependency::Primary);
    assert_eq!(highlight.data_set_index, 0);
}

#[test]
fn axis_preselection_excludes_a_closer_point_on_the_other_axis() {
    // Secondary point is vertically closest, but a primary point next to the
    // pointer horizontally would win on plain 2-D distance.
    let chart = chart_with(vec![
        DataSet::new(vec![Entry::new(1.0, 56.0), Entry::new(2.0, 56.0)]),
        DataSet::new(vec![Entry::new(4.0, 5.0)]).with_axis(AxisDependency::Secondary),
    ]);

    // Pointer at data x = 2.5: both primary roundings clamp to (20, 44);
    // secondary candidate at (40, 50).
    let highlight = chart.highlight_by_touch_point(25.0, 50.0).expect("highlight");
    assert_eq!(highlight.axis, AxisDependency::Secondary);
    assert_abs_diff_eq!(highlight.x, 4.0);
}

#[test]
fn max_distance_threshold_is_strict() {
    let config = ChartConfig::new(
        PlotRect::sized(100.0, 100.0),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    )
    .with_max_highlight_distance(20.0);
    let mut chart = Chart::new(config).expect("chart init");
    chart.set_data(ChartData::new(vec![DataSet::new(vec![Entry::new(5.0, 50.0)])]));

    // Entry is drawn at (50, 50).
    assert!(chart.highlight_by_touch_point(50.0, 70.01).is_none());
    assert!(chart.highlight_by_touch_point(50.0, 70.0).is_none());
    assert!(chart.highlight_by_touch_point(50.0, 69.99).is_some());
}

#[test]
fn disabled_series_is_never_selected() {
    let chart = chart_with(vec![
        DataSet::new(vec![Entry::new(1.0, 50.0)]).with_highlight_enabled(false),
        DataSet::new(vec![Entry::new(3.0, 10.0)]),
    ]);

    let highlight = chart.highlight_by_touch_point(10.0, 50.0).expect("highlight");
    assert_eq!(highlight.data_set_index, 1);

    let only_disabled = chart_with(vec![
        DataSet::new(vec![Entry::new(1.0, 50.0)]).with_highlight_enabled(false),
    ]);
    assert!(only_disabled.highlight_by_touch_point(10.0, 50.0).is_none());
}

#[test]
fn repeated_resolution_is_identical() {
    let chart = chart_with(vec![DataSet::new(vec![
        Entry::new(0.5, 12.0),
        Entry::new(3.5, 70.0),
        Entry::new(7.0, 33.0),
    ])]);
    let highlighter = chart.highlighter();
    let first = highlighter.highlight(41.0, 30.0);
    let second = highlighter.highlight(41.0, 30.0);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn stacked_segment_selection_reports_stack_index() {
    let config = ChartConfig::new(
        PlotRect::sized(100.0, 100.0),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    )
    .with_candidate_policy(CandidatePolicy::BarStack);
    let mut chart = Chart::new(config).expect("chart init");
    chart.set_data(ChartData::new(vec![
        DataSet::new(vec![
            Entry::stacked(2.0, vec![20.0, 30.0, 40.0]),
            Entry::stacked(6.0, vec![10.0, 10.0]),
        ]),
        DataSet::new(vec![Entry::new(8.0, 50.0)]),
    ]));

    // Segments of x = 2 span y [0, 20], [20, 50], [50, 90] -> pixels [100, 80], [80, 50], [50, 10].
    for (pointer_y, expected) in [(90.0, 0), (60.0, 1), (20.0, 2)] {
        let highlight = chart
            .highlight_by_touch_point(20.0, pointer_y)
            .expect("stacked highlight");
        assert_eq!(highlight.stack_index, Some(expected));
        assert!(highlight.is_stacked());
        assert_abs_diff_eq!(highlight.y, 90.0);
    }

    let plain = chart
        .highlight_by_touch_point(80.0, 50.0)
        .expect("plain highlight");
    assert_eq!(plain.data_set_index, 1);
    assert_eq!(plain.stack_index, None);
}

#[test]
fn stacked_threshold_is_measured_to_the_reported_pixel() {
    let config = ChartConfig::new(
        PlotRect::sized(100.0, 100.0),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    )
    .with_candidate_policy(CandidatePolicy::BarStack)
    .with_max_highlight_distance(20.0);
    let mut chart = Chart::new(config).expect("chart init");
    chart.set_data(ChartData::new(vec![DataSet::new(vec![Entry::stacked(
        5.0,
        vec![100.0],
    )])]));

    // The single segment covers the plot but reports its top edge at (50, 0).
    assert!(chart.highlight_by_touch_point(50.0, 50.0).is_none());
    assert!(chart.highlight_by_touch_point(50.0, 20.0).is_none());

    let highlight = chart
        .highlight_by_touch_point(50.0, 19.99)
        .expect("inside threshold");
    assert_eq!(highlight.stack_index, Some(0));
    assert_abs_diff_eq!(highlight.y_px, 0.0);
}

#[test]
fn bar_stack_highlighter_matches_entry_highlighter_on_plain_data() {
    let chart = chart_with(vec![DataSet::new(vec![
        Entry::new(1.0, 10.0),
        Entry::new(2.0, 80.0),
    ])]);
    let entry = CartesianHighlighter::new(&chart);
    let stacked = CartesianHighlighter::bar_stack(&chart);
    for (x, y) in [(12.0, 85.0), (18.0, 25.0), (15.0, 50.0)] {
        assert_eq!(entry.resolve(x, y), stacked.resolve(x, y));
    }
}

#[test]
fn chart_without_data_or_with_taps_disabled_selects_nothing() {
    let config = ChartConfig::new(
        PlotRect::sized(100.0, 100.0),
        AxisRange::new(0.0, 10.0),
        AxisRange::new(0.0, 100.0),
    );
    let chart = Chart::new(config).expect("chart init");
    assert!(chart.highlight_by_touch_point(10.0, 10.0).is_none());

    let mut chart = chart_with(vec![DataSet::new(vec![Entry::new(1.0, 90.0)])]);
    assert!(chart.highlight_by_touch_point(10.0, 10.0).is_some());
    chart.set_highlight_per_tap_enabled(false);
    assert!(chart.highlight_by_touch_point(10.0, 10.0).is_none());
    chart.set_highlight_per_tap_enabled(true);
    chart.clear_data();
    assert!(chart.highlight_by_touch_point(10.0, 10.0).is_none());
}

#[test]
fn empty_data_sets_select_nothing() {
    let chart = chart_with(vec![DataSet::new(vec![]), DataSet::new(vec![])]);
    assert!(chart.highlight_by_touch_point(50.0, 50.0).is_none());
}

#[test]
fn pointer_past_the_last_entry_selects_it_within_range() {
    let chart = chart_with(vec![DataSet::new(vec![
        Entry::new(1.0, 50.0),
        Entry::new(2.0, 50.0),
    ])]);
    let highlight = chart.highlight_by_touch_point(60.0, 50.0).expect("highlight");
    assert_abs_diff_eq!(highlight.x, 2.0);
}

#[test]
fn fitting_axes_moves_pixels_with_the_data() {
    let mut chart = chart_with(vec![
        DataSet::new(vec![Entry::new(0.0, 0.0), Entry::new(4.0, 200.0)]),
        DataSet::new(vec![Entry::new(2.0, 1.0), Entry::new(3.0, 3.0)])
            .with_axis(AxisDependency::Secondary),
    ]);
    chart.fit_axes_to_data().expect("fit");

    let config = chart.config();
    assert_eq!((config.x_range.min, config.x_range.max), (0.0, 4.0));
    assert_eq!((config.primary_range.min, config.primary_range.max), (0.0, 200.0));
    let secondary = config.secondary_range.expect("secondary range");
    assert_eq!((secondary.min, secondary.max), (1.0, 3.0));

    // x = 4 is now the right edge and y = 200 the top edge.
    let highlight = chart.highlight_by_touch_point(100.0, 0.0).expect("highlight");
    assert_abs_diff_eq!(highlight.x, 4.0);
    assert_abs_diff_eq!(highlight.x_px, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(highlight.y_px, 0.0, epsilon = 1e-9);
}
