//! Tests for the seedable generators and the sampling helpers built on them.

use cofactor::random::{Lcg48, Mt19937, Xorshift128};
use cofactor::{Generator, GeneratorKind, Matrix, RandomExt, Vector};
use rand::{Rng, RngCore, SeedableRng};

const KINDS: [GeneratorKind; 3] = [
    GeneratorKind::MersenneTwister,
    GeneratorKind::Xorshift,
    GeneratorKind::Lcg,
];

/// The dispatching generator reproduces the concrete generators.
#[test]
fn generator_matches_concrete_types() {
    let mut g = Generator::new(GeneratorKind::MersenneTwister, 5489);
    let mut mt = Mt19937::seed_from_u64(5489);
    assert_eq!(g.next_u32(), 3_499_211_612);
    assert_eq!(mt.next_u32(), 3_499_211_612);

    let mut g = Generator::new(GeneratorKind::Xorshift, 11);
    let mut xs = Xorshift128::new(11);
    let mut g2 = Generator::new(GeneratorKind::Lcg, 11);
    let mut lcg = Lcg48::new(11);
    for _ in 0..32 {
        assert_eq!(g.next_u64(), xs.next_u64());
        assert_eq!(g2.next_u64(), lcg.next_u64());
    }
}

/// Uniform draws stay in `[0, 1)` and have roughly the right mean.
#[test]
fn uniform_draws() {
    for kind in KINDS {
        let mut g = Generator::new(kind, 2024);
        let v = Vector::random(10_000, &mut g);
        assert!(v.iter().all(|&u| (0.0..1.0).contains(&u)));
        assert!((v.mean().unwrap() - 0.5).abs() < 0.02, "{kind}");
    }
}

/// Twelve-uniform normals are bounded by ±6 and roughly standard.
#[test]
fn normal_draws() {
    let mut g = Generator::new(GeneratorKind::Xorshift, 3);
    let v = Vector::random_normal(20_000, &mut g);
    assert!(v.iter().all(|x| x.abs() <= 6.0));
    assert!(v.mean().unwrap().abs() < 0.05);
    assert!((v.variance().unwrap() - 1.0).abs() < 0.05);
}

/// Same seed, same matrix; the matrix is filled column by column.
#[test]
fn seeded_matrices_repeat() {
    let a = Matrix::random(3, 4, &mut Generator::new(GeneratorKind::Lcg, 8)).unwrap();
    let b = Matrix::random(3, 4, &mut Generator::new(GeneratorKind::Lcg, 8)).unwrap();
    assert_eq!(a, b);

    let mut g = Generator::new(GeneratorKind::Lcg, 8);
    let first_column: Vec<f64> = (0..3).map(|_| g.r#gen::<f64>()).collect();
    assert_eq!(a.column(0).unwrap().to_vec(), first_column);
}

/// Shuffling permutes without losing or duplicating elements.
#[test]
fn shuffle_is_a_permutation() {
    let mut g = Generator::from_entropy(GeneratorKind::MersenneTwister);
    let v = Vector::arange(0.0, 1.0, 99.0).unwrap();
    let shuffled = v.shuffled(&mut g);
    assert_ne!(shuffled, v);
    let (sorted, _) = shuffled.sorted(Default::default());
    assert_eq!(sorted, v);

    let mut letters = ['a', 'b', 'c', 'd'];
    g.shuffle_slice(&mut letters);
    letters.sort();
    assert_eq!(letters, ['a', 'b', 'c', 'd']);
}

#[test]
fn random_strings() {
    let mut rng = rand::thread_rng();
    assert_eq!(rng.alphanumeric(0), "");
    let s = rng.alphanumeric(200);
    assert!(s.bytes().all(|b| b.is_ascii_alphanumeric()));
    let s = rng.symbol_string(200);
    assert_eq!(s.len(), 200);
    assert!(s.bytes().all(|b| b.is_ascii_graphic() && !b"\"&*.;<=>?\\|".contains(&b)));
}
