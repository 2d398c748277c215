//! Tests for vector arithmetic, statistics and sorting.
//!
//! Fixed data checks the documented values; random data checks the sort
//! permutation and normalization properties.

use approx::assert_abs_diff_eq;
use cofactor::{LinalgError, SortOrder, Vector};
use rand::Rng;

fn sample() -> Vector {
    Vector::new(vec![-1.0, 0.0, 1.0, 2.0, 4.0])
}

/// Mean, extremes and sum of a small fixed sample.
#[test]
fn summary_statistics() {
    let v = sample();
    assert_abs_diff_eq!(v.mean().unwrap(), 1.2, epsilon = 1e-12);
    assert_eq!(v.max().unwrap(), 4.0);
    assert_eq!(v.min().unwrap(), -1.0);
    assert_eq!(v.sum(), 6.0);
    assert_eq!(v.median().unwrap(), 1.0);
    assert_eq!(v.range().unwrap(), 5.0);
    assert_eq!(v.mid_range().unwrap(), 1.5);
    assert_abs_diff_eq!(v.variance().unwrap(), 2.96, epsilon = 1e-12);
    assert_abs_diff_eq!(v.unbiased_variance().unwrap(), 3.7, epsilon = 1e-12);
}

/// Reductions over an empty vector report `EmptyVector`.
#[test]
fn empty_reductions() {
    let v = Vector::zeros(0);
    assert_eq!(v.sum(), 0.0);
    assert!(matches!(v.mean(), Err(LinalgError::EmptyVector)));
    assert!(matches!(v.max(), Err(LinalgError::EmptyVector)));
    assert!(matches!(v.median(), Err(LinalgError::EmptyVector)));
}

/// Element-wise operations need equal lengths.
#[test]
fn arithmetic_length_checks() {
    let a = Vector::new(vec![1.0, 2.0, 3.0]);
    let b = Vector::new(vec![4.0, -5.0, 6.0]);
    assert_abs_diff_eq!(a.inner_product(&b).unwrap(), 12.0, epsilon = 1e-12);
    assert_eq!(a.plus(&b).unwrap().minus(&b).unwrap(), a);
    assert!(matches!(
        a.plus(&Vector::zeros(2)),
        Err(LinalgError::LengthMismatch { expected: 3, found: 2 })
    ));
    assert_abs_diff_eq!(a.norm(), 14f64.sqrt(), epsilon = 1e-12);
}

/// Sorting random data yields a monotone vector and a permutation that maps back.
#[test]
fn sort_permutation_random() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(1..64);
        let original: Vec<f64> = (0..n).map(|_| rng.r#gen::<f64>() * 100.0 - 50.0).collect();
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut v = Vector::new(original.clone());
            let perm = v.sort_by_order(order);
            let mut seen = vec![false; n];
            for (k, &p) in perm.iter().enumerate() {
                assert!(!seen[p]);
                seen[p] = true;
                assert_eq!(v[k], original[p]);
            }
            for k in 1..n {
                match order {
                    SortOrder::Ascending => assert!(v[k - 1] <= v[k]),
                    SortOrder::Descending => assert!(v[k - 1] >= v[k]),
                }
            }
        }
    }
}

/// `sorted` leaves the receiver untouched.
#[test]
fn sorted_is_a_copy() {
    let v = sample().reversed();
    let (s, perm) = v.sorted(SortOrder::Ascending);
    assert_eq!(s.to_vec(), vec![-1.0, 0.0, 1.0, 2.0, 4.0]);
    assert_eq!(perm, vec![4, 3, 2, 1, 0]);
    assert_eq!(v.to_vec(), vec![4.0, 2.0, 1.0, 0.0, -1.0]);
}

/// Normalization sends the maximum to 1 and the minimum to 0.
#[test]
fn normalize_random() {
    let mut rng = rand::thread_rng();
    let v = Vector::random(50, &mut rng).multiply_scalar(10.0).minus_scalar(3.0);
    let (imax, _) = v.argmax().unwrap();
    let (imin, _) = v.argmin().unwrap();
    let n = v.normalize().unwrap();
    assert_abs_diff_eq!(n[imax], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(n[imin], 0.0, epsilon = 1e-12);
    assert!(n.iter().all(|&x| (-1e-12..=1.0 + 1e-12).contains(&x)));
}

/// Standardized data has zero mean and unit sample variance.
#[test]
fn standardize_random() {
    let mut rng = rand::thread_rng();
    let v = Vector::random_normal(200, &mut rng);
    let z = v.standardize().unwrap();
    assert_abs_diff_eq!(z.mean().unwrap(), 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(z.unbiased_variance().unwrap(), 1.0, epsilon = 1e-10);
}
