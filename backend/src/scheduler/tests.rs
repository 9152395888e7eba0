use super::*;
use crate::models::{HistogramSample, RawHistogramRow, TimeOfDay};

fn sample(h: u32, m: u32, s: u32, cdf: f64) -> HistogramSample {
    HistogramSample::new(TimeOfDay::from_hms(h, m, s).unwrap(), 0.0, cdf)
}

fn hms(h: u32, m: u32, s: u32) -> TimeOfDay {
    TimeOfDay::from_hms(h, m, s).unwrap()
}

fn morning_rows() -> Vec<RawHistogramRow> {
    vec![
        RawHistogramRow::new("05:30:00", 0.0, "0.0"),
        RawHistogramRow::new("06:00:00", 4.0, "0.5"),
        RawHistogramRow::new("06:30:00", 4.0, "1.0"),
    ]
}

#[test]
fn test_target_quantiles_start_at_zero() {
    assert_eq!(target_quantiles(4), vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(target_quantiles(1), vec![0.0]);
    assert!(target_quantiles(0).is_empty());
}

#[test]
fn test_round_cdf() {
    assert_eq!(round_cdf(1.0 / 3.0), 0.3333);
    assert_eq!(round_cdf(2.0 / 3.0), 0.6667);
    assert_eq!(round_cdf(0.5), 0.5);
}

#[test]
fn test_boundary_two_trains() {
    let result = compute_departures(&morning_rows(), 2).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].departure_time, hms(5, 30, 0));
    assert_eq!(result[0].cdf_value, 0.0);
    assert_eq!(result[1].departure_time, hms(6, 0, 0));
    assert_eq!(result[1].cdf_value, 0.5);
}

#[test]
fn test_linear_interpolation_inside_bracket() {
    let samples = [sample(6, 0, 0, 0.0), sample(7, 0, 0, 1.0)];
    let result = interpolate_departures(&samples, 4).unwrap();
    let times: Vec<TimeOfDay> = result.iter().map(|d| d.departure_time).collect();
    assert_eq!(times, vec![hms(6, 0, 0), hms(6, 15, 0), hms(6, 30, 0), hms(6, 45, 0)]);
}

#[test]
fn test_midnight_wraparound() {
    let lower = sample(23, 50, 0, 0.90);
    let upper = HistogramSample::from_raw(&RawHistogramRow::new("24:10:00", 0.0, "1.00")).unwrap();
    assert_eq!(interpolate_time(&lower, &upper, 0.95), hms(0, 0, 0));
}

#[test]
fn test_midnight_wraparound_through_full_scan() {
    let rows = vec![
        RawHistogramRow::new("05:00:00", 0.0, "0.0"),
        RawHistogramRow::new("23:50:00", 0.0, "0.9"),
        RawHistogramRow::new("24:10:00", 0.0, "1.0"),
    ];
    let result = compute_departures(&rows, 20).unwrap();
    assert_eq!(result.len(), 20);
    assert_eq!(result[19].cdf_value, 0.95);
    assert_eq!(result[19].departure_time, hms(0, 0, 0));
}

#[test]
fn test_degenerate_bracket_returns_lower_time() {
    let lower = sample(6, 0, 0, 0.5);
    let upper = sample(6, 30, 0, 0.5 + 1e-11);
    assert_eq!(interpolate_time(&lower, &upper, 0.5), hms(6, 0, 0));
    assert_eq!(interpolate_time(&lower, &upper, 0.9), hms(6, 0, 0));

    let flat = [sample(6, 0, 0, 0.5), sample(6, 30, 0, 0.5), sample(7, 0, 0, 1.0)];
    let result = interpolate_departures(&flat, 2).unwrap();
    assert_eq!(result[0].departure_time, hms(6, 0, 0));
    assert_eq!(result[1].departure_time, hms(6, 0, 0));
}

#[test]
fn test_targets_outside_histogram_extrapolate() {
    // below the first sample
    let samples = [sample(6, 0, 0, 0.25), sample(7, 0, 0, 0.75)];
    assert_eq!(interpolate_time(&samples[0], &samples[1], 0.0), hms(5, 30, 0));

    // above the last sample
    let samples = [sample(6, 0, 0, 0.0), sample(7, 0, 0, 0.5)];
    let result = interpolate_departures(&samples, 4).unwrap();
    assert_eq!(result[3].departure_time, hms(7, 30, 0));
}

#[test]
fn test_fractional_seconds_truncate() {
    let samples = [sample(6, 0, 0, 0.0), sample(6, 0, 10, 1.0)];
    let result = interpolate_departures(&samples, 3).unwrap();
    // 10s * 1/3 = 3.33s, 10s * 2/3 = 6.67s
    assert_eq!(result[1].departure_time, hms(6, 0, 3));
    assert_eq!(result[2].departure_time, hms(6, 0, 6));
}

#[test]
fn test_cursor_advances_monotonically() {
    let samples = [
        sample(5, 0, 0, 0.0),
        sample(6, 0, 0, 0.1),
        sample(8, 0, 0, 0.4),
        sample(12, 0, 0, 0.6),
        sample(18, 0, 0, 0.9),
        sample(23, 0, 0, 1.0),
    ];
    let mut cursor = BracketCursor::new(&samples).unwrap();
    assert_eq!(cursor.position(), 1);

    let mut previous = cursor.position();
    for target in target_quantiles(13) {
        let (lower, upper) = cursor.advance_to(target);
        assert!(cursor.position() >= previous);
        assert!(cursor.position() < samples.len());
        assert!(lower.cumulative_probability <= upper.cumulative_probability);
        previous = cursor.position();
    }
    assert_eq!(previous, 5);
}

#[test]
fn test_cursor_never_moves_back() {
    let samples = [sample(5, 0, 0, 0.0), sample(6, 0, 0, 0.5), sample(7, 0, 0, 1.0)];
    let mut cursor = BracketCursor::new(&samples).unwrap();
    cursor.advance_to(0.9);
    assert_eq!(cursor.position(), 2);
    let (lower, _) = cursor.advance_to(0.1);
    assert_eq!(cursor.position(), 2);
    assert_eq!(lower.time, hms(6, 0, 0));
}

#[test]
fn test_zero_trains() {
    assert_eq!(compute_departures(&morning_rows(), 0), Err(SchedulerError::NoTrains));
    let samples = [sample(6, 0, 0, 0.0), sample(7, 0, 0, 1.0)];
    assert_eq!(interpolate_departures(&samples, 0), Err(SchedulerError::NoTrains));
}

#[test]
fn test_zero_trains_reported_before_missing_data() {
    assert_eq!(compute_departures(&[], 0), Err(SchedulerError::NoTrains));
}

#[test]
fn test_insufficient_samples() {
    let rows = vec![RawHistogramRow::new("06:00:00", 0.0, "1.0")];
    assert_eq!(
        compute_departures(&rows, 3),
        Err(SchedulerError::InsufficientData { samples: 1 })
    );
    assert_eq!(
        interpolate_departures(&[], 3),
        Err(SchedulerError::InsufficientData { samples: 0 })
    );
}

#[test]
fn test_malformed_time_names_raw_value() {
    let mut rows = morning_rows();
    rows[2].time = "abc".to_string();
    let err = compute_departures(&rows, 2).unwrap_err();
    assert_eq!(err, SchedulerError::MalformedTime { raw: "abc".to_string() });
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_deterministic() {
    let rows = morning_rows();
    let first = compute_departures(&rows, 9).unwrap();
    let second = compute_departures(&rows, 9).unwrap();
    assert_eq!(first, second);
}
