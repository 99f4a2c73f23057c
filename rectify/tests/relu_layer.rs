use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use rectify::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_close(lhs: &[f32], rhs: &[f32]) {
    assert_eq!(lhs.len(), rhs.len());
    for (l, r) in lhs.iter().zip(rhs.iter()) {
        if (l - r).abs() > 1e-6 {
            panic!("lhs != rhs | {l} != {r}\n\n{lhs:?}\n\n{rhs:?}");
        }
    }
}

#[test]
fn test_standard_layer_forward_backward() {
    init_logging();
    let layer: ReLU<f32> = ReLU::new(ReLUConfig::default());

    let mut bottom = Blob::from_vec(vec![-2.0, 0.0, 3.0, -0.5]);
    let mut top = Blob::zeros(0);
    layer.reshape(&bottom, &mut top);
    assert_eq!(top.count(), 4);

    layer.forward(&bottom, &mut top);
    assert_eq!(top.data(), &[0.0, 0.0, 3.0, 0.0]);

    top.diff_mut().copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
    layer.backward(&top, true, &mut bottom);
    assert_eq!(bottom.diff(), &[0.0, 0.0, 3.0, 0.0]);
    assert_eq!(bottom.data(), &[-2.0, 0.0, 3.0, -0.5]);
}

#[test]
fn test_leaky_layer_forward_backward() {
    init_logging();
    let layer: ReLU<f32> = ReLU::new(ReLUConfig::default().with_negative_slope(0.1));

    let mut bottom = Blob::from_vec(vec![-2.0, 0.0, 3.0]);
    let mut top = Blob::zeros(3);
    layer.forward(&bottom, &mut top);
    assert_close(top.data(), &[-0.2, 0.0, 3.0]);

    top.diff_mut().copy_from_slice(&[1.0, 1.0, 1.0]);
    layer.backward(&top, true, &mut bottom);
    assert_close(bottom.diff(), &[0.1, 0.1, 1.0]);
}

#[test]
fn test_backward_without_propagate_down() {
    init_logging();
    let layer: ReLU<f32> = ReLU::new(ReLUConfig::default().with_negative_slope(0.1));
    let mut bottom = Blob::from_vec(vec![-1.0, 0.0, 2.0]);
    bottom.diff_mut().copy_from_slice(&[-7.5, 8.0, 9.25]);

    // a mismatched top is not even looked at
    let top = Blob::zeros(5);
    assert!(layer.try_backward(&top, false, &mut bottom).is_ok());
    assert_eq!(bottom.diff(), &[-7.5, 8.0, 9.25]);

    layer.backward_inplace(&mut bottom, false);
    assert_eq!(bottom.diff(), &[-7.5, 8.0, 9.25]);
}

#[test]
fn test_backward_count_mismatch() {
    init_logging();
    let layer: ReLU<f64> = ReLU::new(ReLUConfig::default());
    let top = Blob::zeros(2);
    let mut bottom = Blob::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(
        layer.try_backward(&top, true, &mut bottom),
        Err(Error::WrongNumElements {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(bottom.diff(), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_inplace_layer_matches_separate_blobs() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(0);
    for slope in [None, Some(0.0), Some(0.2)] {
        let mut config = ReLUConfig::default();
        if let Some(s) = slope {
            config = config.with_negative_slope(s);
        }
        let layer: ReLU<f32> = ReLU::new(config);

        let x: Vec<f32> = (0..31).map(|_| rng.sample(StandardNormal)).collect();
        let dy: Vec<f32> = (0..31).map(|_| rng.sample(StandardNormal)).collect();

        let mut bottom = Blob::from_vec(x.clone());
        let mut top = Blob::zeros(31);
        layer.forward(&bottom, &mut top);
        top.diff_mut().copy_from_slice(&dy);
        layer.backward(&top, true, &mut bottom);

        let mut blob = Blob::from_vec(x);
        layer.forward_inplace(&mut blob);
        assert_eq!(blob.data(), top.data());
        blob.diff_mut().copy_from_slice(&dy);
        layer.backward_inplace(&mut blob, true);
        assert_close(blob.diff(), bottom.diff());
    }
}

#[test]
fn test_forward_is_fixed_point_on_rectified_data() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);
    let layer: ReLU<f32> = ReLU::new(ReLUConfig::default());
    let x: Vec<f32> = (0..1027).map(|_| rng.sample(StandardNormal)).collect();
    let bottom = Blob::from_vec(x);
    let mut once = Blob::zeros(bottom.count());
    let mut twice = Blob::zeros(bottom.count());
    layer.forward(&bottom, &mut once);
    layer.forward(&once, &mut twice);
    assert_eq!(once.data(), twice.data());
    assert!(once.data().iter().all(|&v| v >= 0.0));
}

#[test]
fn test_zero_length_blobs() {
    init_logging();
    let layer: ReLU<f64> = ReLU::new(ReLUConfig::default().with_negative_slope(0.5));
    let mut bottom = Blob::zeros(0);
    let mut top = Blob::zeros(0);
    assert!(layer.try_forward(&bottom, &mut top).is_ok());
    assert!(layer.try_backward(&top, true, &mut bottom).is_ok());
    assert!(layer.try_forward_inplace(&mut top).is_ok());
    assert_eq!(top.count(), 0);
}

#[test]
fn test_gpu_mode_is_unavailable() {
    init_logging();
    let res = ReLU::<f32>::try_new(ReLUConfig::default().with_mode(Mode::Gpu));
    assert_eq!(res.unwrap_err(), Error::NoGpu);
    assert_eq!(
        rectify::feature_flags::SIMD_ENABLED,
        <f32 as MaxZero>::VECTORIZED
    );
}
