//! End-to-end exercise of the host bridge, including the raw-pointer entry
//! points a foreign numeric-array runtime would call.

use cepstra::{Matrix, ResizeMode, Vector};
use rand::Rng;

fn random_f32(n: usize) -> Vec<f32> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-1.0f32..1.0)).collect()
}

fn random_f64(n: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..n).map(|_| rng.random_range(-1.0f64..1.0)).collect()
}

#[test]
fn vector_round_trip_various_lengths() {
    for n in [0usize, 1, 3, 16, 127, 1000] {
        let src = random_f32(n);
        let mut v = Vector::new();
        v.set_data(&src);

        let mut out = vec![0.0f32; n];
        assert!(v.read_data_into(&mut out), "length {n}");
        assert_eq!(out, src, "length {n}");
    }
}

#[test]
fn vector_round_trip_f64() {
    let src = random_f64(257);
    let mut v = Vector::new();
    v.set_data(&src);

    let mut out = vec![0.0f64; 257];
    assert!(v.read_data_into(&mut out));
    assert_eq!(out, src);
}

#[test]
fn vector_reuse_across_length_changes() {
    let mut v = Vector::new();
    for n in [8usize, 2, 0, 31, 31, 5] {
        let src = random_f32(n);
        v.set_data(&src);
        assert_eq!(v.len(), n);
        assert_eq!(v.as_slice(), src.as_slice());
    }
}

#[test]
fn vector_ptr_entry_points() {
    let src = random_f32(64);
    let mut v = Vector::new();
    unsafe { v.set_data_ptr(src.as_ptr(), src.len()) };

    let mut out = vec![0.0f32; 64];
    assert!(unsafe { v.read_data_into_ptr(out.len(), out.as_mut_ptr()) });
    assert_eq!(out, src);

    // mismatched count is rejected before the pointer is touched
    assert!(!unsafe { v.read_data_into_ptr(63, out.as_mut_ptr()) });

    // null is fine for empty transfers
    unsafe { v.set_data_ptr(std::ptr::null(), 0) };
    assert!(v.is_empty());
    assert!(unsafe { v.read_data_into_ptr(0, std::ptr::null_mut()) });
}

#[test]
fn matrix_round_trip_various_shapes() {
    // mix of padded (cols % 4 != 0 for f32) and contiguous shapes
    for (rows, cols) in [(1, 1), (2, 3), (3, 4), (7, 13), (50, 40)] {
        let src = random_f32(rows * cols);
        let mut m = Matrix::new();
        m.set_data(&src, rows, cols);

        let mut out = vec![0.0f32; rows * cols];
        assert!(m.read_data_into(rows, cols, &mut out), "({rows}, {cols})");
        assert_eq!(out, src, "({rows}, {cols})");
    }
}

#[test]
fn matrix_round_trip_f64_padded() {
    let (rows, cols) = (9, 5);
    let src = random_f64(rows * cols);
    let mut m = Matrix::new();
    m.set_data(&src, rows, cols);
    assert!(m.stride() > m.cols());
    assert_eq!(m.to_packed(), src);
}

#[test]
fn matrix_ptr_entry_points() {
    let src = random_f64(6);
    let mut m = Matrix::new();
    unsafe { m.set_data_ptr(src.as_ptr(), 2, 3) };

    let mut out = vec![0.0f64; 6];
    assert!(unsafe { m.read_data_into_ptr(2, 3, out.as_mut_ptr()) });
    assert_eq!(out, src);

    assert!(!unsafe { m.read_data_into_ptr(3, 2, out.as_mut_ptr()) });

    // degenerate host shapes come through the pointer API as well
    unsafe { m.set_data_ptr(std::ptr::null(), 0, 4) };
    assert!(m.is_empty());
    assert!(unsafe { m.read_data_into_ptr(4, 0, std::ptr::null_mut()) });
}

#[test]
fn vector_into_padded_matrix_and_back() {
    // a feature pipeline hands the same buffer around both container kinds
    let src = random_f32(35);
    let mut v = Vector::new();
    v.set_data(&src);

    let mut m = Matrix::new();
    m.set_data(v.as_slice(), 5, 7);

    let mut back = Vector::with_len(35, ResizeMode::SetZero);
    assert!(m.read_data_into(5, 7, back.as_mut_slice()));
    assert_eq!(back.as_slice(), src.as_slice());
}
