use criterion::{black_box, Criterion, criterion_group, criterion_main};
use cofactor::Matrix;
use faer::Mat;
use faer::linalg::solvers::SolveCore;

fn bench_inverse_vs_faer(c: &mut Criterion) {
    let n = 7;
    let data: Vec<f64> = (0..n * n).map(|i| (i as f64).sin() + if i % (n + 1) == 0 { n as f64 } else { 0.0 }).collect();
    let a = Matrix::from_shape_vec((n, n), data.clone()).unwrap();
    let fa = Mat::from_fn(n, n, |i, j| data[i * n + j]);

    c.bench_function("cofactor determinant 7x7", |ben| {
        ben.iter(|| black_box(&a).determinant())
    });

    c.bench_function("cofactor inverse 7x7", |ben| {
        ben.iter(|| black_box(&a).inverse().unwrap())
    });

    c.bench_function("faer LU inverse 7x7", |ben| {
        ben.iter(|| {
            let factor = faer::linalg::solvers::FullPivLu::new(black_box(fa.as_ref()));
            let mut inv: Vec<f64> = (0..n * n).map(|k| if k % (n + 1) == 0 { 1.0 } else { 0.0 }).collect();
            let inv_mat = faer::MatMut::from_column_major_slice_mut(&mut inv, n, n);
            factor.solve_in_place_with_conj(faer::Conj::No, inv_mat);
            inv
        })
    });
}

criterion_group!(benches, bench_inverse_vs_faer);
criterion_main!(benches);
