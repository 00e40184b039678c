use crclean::stats;

#[test]
fn test_median_odd_and_even() {
    assert_eq!(stats::median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(stats::median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    assert_eq!(stats::median(&[]), None);
}

#[test]
fn test_median_skips_non_finite() {
    assert_eq!(
        stats::median(&[f32::NAN, 5.0, f32::INFINITY, 1.0, 3.0]),
        Some(3.0)
    );
    assert_eq!(stats::median(&[f32::NAN]), None);
}

#[test]
fn test_mad_resists_single_outlier() {
    let data = [0.2, 0.2, 0.21, 0.19, 0.2, 0.95];
    let (m, mad) = stats::median_and_mad(&data).unwrap();
    assert!((m - 0.2).abs() < 1e-6);
    assert!(mad < 0.011);
}

#[test]
fn test_median_and_mad_in_scratch_buffer() {
    let mut scratch = vec![5.0, f32::NAN, 1.0, 3.0, 4.0, 2.0];
    assert_eq!(stats::median_and_mad_mut(&mut scratch), Some((3.0, 1.0)));
    // Left holding the sorted absolute deviations, NaN dropped
    assert_eq!(scratch, vec![0.0, 1.0, 1.0, 2.0, 2.0]);

    scratch.clear();
    assert_eq!(stats::median_and_mad_mut(&mut scratch), None);
}

#[test]
fn test_robust_sigma_scaling() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let (_, mad) = stats::median_and_mad(&data).unwrap();
    assert_eq!(mad, 1.0);
    assert_eq!(stats::robust_sigma(mad), stats::MAD_TO_SIGMA);
    assert_eq!(stats::robust_sigma(0.0), 0.0);
}
