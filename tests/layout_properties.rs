use tempo_charts::viz::BarChartLayout;
use tempo_charts::{ChartConfig, ChartError, TimeBucket};

fn buckets(pairs: &[(&str, u64)]) -> Vec<TimeBucket> {
    pairs.iter().map(|(l, s)| TimeBucket::new(*l, *s)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn one_bar_per_bucket_in_input_order() {
    let data = buckets(&[("Wed", 120), ("Mon", 3600), ("Tue", 7200), ("Fri", 60)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();

    assert_eq!(layout.bars.len(), data.len());
    let labels: Vec<&str> = layout.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Wed", "Mon", "Tue", "Fri"]);
    let ticks: Vec<&str> = layout.x_ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(ticks, labels);

    // left to right
    for pair in layout.bars.windows(2) {
        assert!(pair[0].x < pair[1].x);
    }
}

#[test]
fn zero_duration_has_zero_height() {
    let data = buckets(&[("Mon", 3661), ("Tue", 0)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    let tue = &layout.bars[1];
    assert!(close(tue.height, 0.0));
    assert!(close(tue.y, layout.inner_height));
}

#[test]
fn longest_bar_touches_top() {
    let data = buckets(&[("A", 100), ("B", 5400), ("C", 2700)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    let b = &layout.bars[1];
    assert!(close(b.y, 0.0));
    assert!(close(b.height, layout.inner_height));
    assert!(close(layout.bars[2].height, layout.inner_height / 2.0));
}

#[test]
fn bars_sit_on_the_baseline() {
    let data = buckets(&[("A", 1), ("B", 17), ("C", 99_999)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    for bar in &layout.bars {
        assert!(close(bar.y + bar.height, layout.inner_height));
        assert!(bar.height >= 0.0);
    }
}

#[test]
fn mon_tue_example() {
    let data = buckets(&[("Mon", 3661), ("Tue", 0)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();

    assert_eq!(layout.bars.len(), 2);
    assert_eq!(layout.bars[0].duration_label, "01:01");
    assert_eq!(layout.bars[1].duration_label, "00:00");
    assert!(close(layout.bars[1].height, 0.0));

    // default surface: 1200x300 minus margins 20/10/20/40
    assert!(close(layout.inner_width, 1150.0));
    assert!(close(layout.inner_height, 260.0));

    // the duration axis spans exactly the data
    assert_eq!(layout.y_domain, (0.0, 3661.0));
}

#[test]
fn ticks_centre_on_bands() {
    let data = buckets(&[("a", 1), ("b", 2), ("c", 3)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    for (bar, tick) in layout.bars.iter().zip(&layout.x_ticks) {
        assert!(close(tick.offset, bar.x + bar.width / 2.0));
    }
}

#[test]
fn all_zero_input_renders_flat_chart() {
    let data = buckets(&[("Mon", 0), ("Tue", 0)]);
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    assert!(layout.bars.iter().all(|b| close(b.height, 0.0)));
    assert_eq!(layout.y_domain, (0.0, 3600.0));
}

#[test]
fn empty_or_duplicate_input_is_rejected() {
    let cfg = ChartConfig::default();
    assert!(matches!(
        BarChartLayout::compute(&[], &cfg),
        Err(ChartError::InvalidInput(_))
    ));
    let dup = buckets(&[("Mon", 1), ("Mon", 2)]);
    assert!(matches!(
        BarChartLayout::compute(&dup, &cfg),
        Err(ChartError::InvalidInput(_))
    ));
}

#[test]
fn long_labels_are_shortened_to_the_band() {
    let long = "TEMPO-4242 migrate the reporting pipeline to the new scheduler";
    let mut data = buckets(&[("short", 10)]);
    for i in 0..30 {
        data.push(TimeBucket::new(format!("{long} #{i}"), 10 + i));
    }
    let layout = BarChartLayout::compute(&data, &ChartConfig::default()).unwrap();
    assert_eq!(layout.x_ticks[0].text, "short");
    assert!(layout.x_ticks[1].text.ends_with('…'));
    // the bar keeps the full label
    assert!(layout.bars[1].label.starts_with(long));
}
