#![cfg(feature = "dev")]
use approx::assert_abs_diff_eq;
use fastWaveshrink::prelude::*;
use ndarray::{Array1, Array2, s};

fn signal(n: usize, phase: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = (i + phase) as f64;
            (t * 0.07).sin() + if (i * 7 + phase) % 5 < 2 { 0.1 } else { -0.05 }
        })
        .collect()
}

#[test]
fn test_single_series_matches_core() {
    let model = WaveShrink::<f64>::new().policy(Soft).build().unwrap();

    let mut a = signal(128, 0);
    let mut b = a.clone();
    let report = model.denoise(&mut a).unwrap();
    let expected = waveshrink::denoise(&mut b, &Wavelet::default(), Soft).unwrap();

    assert_eq!(a, b);
    assert_eq!(report, expected);
}

#[test]
fn test_denoise_all_sequential() {
    let model = WaveShrink::<f64>::new().parallel(false).build().unwrap();
    assert!(!model.is_parallel());

    let mut series: Vec<Vec<f64>> = (0..6).map(|k| signal(64, k)).collect();
    let results = model.denoise_all(&mut series);

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.is_ok()));
}

#[test]
fn test_parallel_matches_sequential() {
    let parallel = WaveShrink::<f64>::new()
        .family(WaveletFamily::Daubechies8)
        .parallel(true)
        .build()
        .unwrap();
    let sequential = WaveShrink::<f64>::new()
        .family(WaveletFamily::Daubechies8)
        .parallel(false)
        .build()
        .unwrap();

    let original: Vec<Vec<f64>> = (0..32).map(|k| signal(256, k)).collect();
    let mut a = original.clone();
    let mut b = original;

    let ra = parallel.denoise_all(&mut a);
    let rb = sequential.denoise_all(&mut b);

    assert_eq!(a, b);
    assert_eq!(ra, rb);
}

#[test]
fn test_failing_series_is_isolated() {
    let model = WaveShrink::<f64>::new().wavelet(Haar).build().unwrap();

    let bad = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut series = vec![signal(32, 0), bad.clone(), signal(16, 1)];
    let results = model.denoise_all(&mut series);

    assert!(results[0].is_ok());
    assert_eq!(
        results[1],
        Err(ShrinkageError::NotPowerOfTwo { len: 6 })
    );
    assert!(results[2].is_ok());
    assert_eq!(series[1], bad);
}

#[test]
fn test_ndarray_integration() {
    let model = WaveShrink::<f64>::new().wavelet(Haar).build().unwrap();

    let mut arr = Array1::from_vec(signal(64, 3));
    let mut vec = signal(64, 3);

    model.denoise(&mut arr).unwrap();
    model.denoise(&mut vec).unwrap();

    for (x, y) in arr.iter().zip(vec.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-15);
    }
}

#[test]
fn test_ndarray_non_contiguous_rejected() {
    let model = WaveShrink::<f64>::new().wavelet(Haar).build().unwrap();

    let mut arr = Array1::from_vec(signal(16, 0));
    let before = arr.clone();
    let mut strided = arr.slice_mut(s![..;2]);

    let err = model.denoise(&mut strided).unwrap_err();

    assert!(matches!(err, ShrinkageError::InvalidInput(_)));
    assert_eq!(arr, before);
}

#[test]
fn test_denoise_rows() {
    let rows = 8;
    let cols = 128;
    let mut matrix = Array2::from_shape_fn((rows, cols), |(r, c)| signal(cols, r)[c]);

    for parallel in [true, false] {
        let model = WaveShrink::<f64>::new().parallel(parallel).build().unwrap();
        let mut m = matrix.clone();
        let reports = model.denoise_rows(&mut m).unwrap();

        assert_eq!(reports.len(), rows);
        for (r, report) in reports.into_iter().enumerate() {
            let mut expected = signal(cols, r);
            model.denoise(&mut expected).unwrap();

            assert_eq!(report.unwrap().len, cols);
            assert_eq!(m.row(r).to_vec(), expected);
        }
    }

    // Transposed view is not row-major.
    let model = WaveShrink::<f64>::new().build().unwrap();
    let mut transposed = matrix.view_mut().reversed_axes();
    assert!(matches!(
        model.denoise_rows(&mut transposed),
        Err(ShrinkageError::InvalidInput(_))
    ));
}

#[test]
fn test_builder_validation() {
    let err = WaveShrink::<f64>::new()
        .parallel(true)
        .parallel(false)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ShrinkageError::DuplicateParameter {
            parameter: "parallel"
        }
    );

    let err = WaveShrink::<f64>::new()
        .policy(Hard)
        .policy(Soft)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ShrinkageError::DuplicateParameter {
            parameter: "policy"
        }
    );
}

#[test]
fn test_options_forwarded() {
    let model = WaveShrink::<f64>::new()
        .wavelet(Haar)
        .scaling_method(MAR)
        .return_diagnostics()
        .verify_transform(1e-9)
        .build()
        .unwrap();

    assert_eq!(model.processor().config().scaling_method, MAR);
    assert_eq!(model.processor().config().verify_tolerance, Some(1e-9));

    let mut x = signal(32, 2);
    let report = model.denoise(&mut x).unwrap();
    assert!(report.diagnostics.is_some());
}
