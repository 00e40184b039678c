mod common;

use common::*;
use crclean::error::CleanError;
use crclean::imagebuffer::{ImageBuffer, MinMax};
use crclean::mask::Mask;

#[test]
fn test_from_vec_length_checked() {
    assert!(ImageBuffer::from_vec(vec![0.0; 6], 3, 2).is_ok());
    assert_eq!(
        ImageBuffer::from_vec(vec![0.0; 5], 3, 2),
        Err(CleanError::LengthMismatch {
            expected: 6,
            actual: 5
        })
    );
}

#[test]
fn test_get_put_row_major() {
    let mut buffer = ImageBuffer::from_vec((0..6).map(|v| v as f32).collect(), 3, 2).unwrap();
    assert_eq!(buffer.get(2, 0), 2.0);
    assert_eq!(buffer.get(0, 1), 3.0);
    assert_eq!(buffer.index_of(1, 1), 4);

    buffer.put(1, 1, 9.5);
    assert_eq!(buffer.buffer[4], 9.5);
}

#[test]
#[should_panic]
fn test_get_out_of_bounds() {
    let buffer = flat(3, 3, 0.0);
    buffer.get(0, 3);
}

#[test]
fn test_min_max() {
    let buffer = with_spike(4, 4, 1, 2, 0.9);
    assert_eq!(
        buffer.get_min_max(),
        Some(MinMax {
            min: BACKGROUND,
            max: 0.9
        })
    );
    assert_eq!(ImageBuffer::new_empty().get_min_max(), None);
}

#[test]
fn test_empty_buffers() {
    assert!(ImageBuffer::new_empty().is_empty());
    assert!(ImageBuffer::new(0, 10).is_empty());
    assert_eq!(ImageBuffer::new(4, 3).len(), 12);
}

#[test]
fn test_mask_counts() {
    let mut mask = Mask::new(4, 2);
    assert!(mask.is_clear());
    assert_eq!(mask.flagged_ratio(), 0.0);

    mask.set(1, 0, true);
    mask.set(3, 1, true);
    assert_eq!(mask.count_flagged(), 2);
    assert_eq!(mask.flagged_ratio(), 0.25);
    assert_eq!(mask.flagged_points(), vec![(1, 0), (3, 1)]);
    assert!(mask.get(3, 1));
    assert!(!mask.get(0, 0));
}

#[test]
fn test_mask_from_vec() {
    let mask = Mask::from_vec(vec![false, true, false, false], 2, 2).unwrap();
    assert_eq!(mask.flagged_points(), vec![(1, 0)]);
    assert!(mask.same_dimensions_as(&flat(2, 2, 0.0)));
    assert!(!mask.same_dimensions_as(&flat(4, 1, 0.0)));

    assert!(matches!(
        Mask::from_vec(vec![true; 3], 2, 2),
        Err(CleanError::LengthMismatch { .. })
    ));
}

#[test]
fn test_empty_mask_ratio() {
    assert_eq!(Mask::new(0, 0).flagged_ratio(), 0.0);
}
