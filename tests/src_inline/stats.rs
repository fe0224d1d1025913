use super::*;

#[test]
fn test_quantile_interpolates_between_ranks() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
    assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    assert!((quantile_sorted(&sorted, 0.25) - 1.75).abs() < 1e-12);
    assert!((quantile_sorted(&sorted, 0.5) - 2.5).abs() < 1e-12);
    assert!((quantile_sorted(&sorted, 0.75) - 3.25).abs() < 1e-12);
}

#[test]
fn test_quantile_single_value() {
    assert_eq!(quantile_sorted(&[0.7], 0.25), 0.7);
    assert_eq!(quantile_sorted(&[0.7], 0.75), 0.7);
    assert!(quantile_sorted(&[], 0.5).is_nan());
}

#[test]
fn test_round3_half_up() {
    assert_eq!(round3(0.1234), 0.123);
    assert_eq!(round3(0.1236), 0.124);
    assert_eq!(round3(2.0), 2.0);
    assert_eq!(round3(-0.0004), 0.0);
}

#[test]
fn test_box_stats_basic() {
    let stats = box_stats(&[0.5, 0.2, 0.8]).unwrap();
    assert_eq!(stats.min, 0.2);
    assert_eq!(stats.max, 0.8);
    assert_eq!(stats.median, 0.5);
    assert_eq!(stats.mean, 0.5);
    assert!((stats.q1 - 0.35).abs() < 1e-12);
    assert!((stats.q3 - 0.65).abs() < 1e-12);
    assert_eq!(stats.lowerfence, 0.2);
    assert_eq!(stats.upperfence, 0.8);
    assert!(stats.outliers.is_empty());
}

#[test]
fn test_box_stats_flags_outliers_beyond_fences() {
    let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 40.0];
    let stats = box_stats(&values).unwrap();
    assert!(stats.upperfence < stats.max);
    assert_eq!(stats.outliers, vec![40.0]);
    for v in values {
        let flagged = stats.outliers.contains(&v);
        let outside = v > stats.upperfence || v < stats.lowerfence;
        assert_eq!(flagged, outside);
    }
}

#[test]
fn test_box_stats_fences_clipped_to_range() {
    let samples: [&[f64]; 4] = [
        &[0.1],
        &[0.0, 1.0],
        &[0.3, 0.3, 0.3, 0.9],
        &[0.05, 0.4, 0.41, 0.42, 0.43, 0.9, 1.3],
    ];
    for values in samples {
        let stats = box_stats(values).unwrap();
        assert!(stats.lowerfence >= stats.min);
        assert!(stats.upperfence <= stats.max);
        assert!(stats.q1 <= stats.q3);
    }
}

#[test]
fn test_box_stats_empty() {
    assert!(box_stats(&[]).is_none());
}
