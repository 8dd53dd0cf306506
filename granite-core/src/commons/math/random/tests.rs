use super::*;
use concrete_csprng::generators::SoftwareRandomGenerator;

fn new_generator() -> RandomGenerator<SoftwareRandomGenerator> {
    RandomGenerator::new(Seed(0))
}

#[test]
fn test_uniform_binary_is_binary() {
    let mut generator = new_generator();
    let mut ones = 0usize;
    let n = 10_000;
    for _ in 0..n {
        let bit: u64 = generator.random_uniform_binary();
        assert!(bit == 0 || bit == 1);
        ones += bit as usize;
    }
    // Loose two-sided bound, far beyond any reasonable deviation for a csprng.
    assert!(ones > n / 2 - 500 && ones < n / 2 + 500);
}

#[test]
fn test_gaussian_moments() {
    let mut generator = new_generator();
    let n = 100_000;
    let mut samples = vec![0f64; n];
    generator.fill_slice_with_random_gaussian(&mut samples, 0., 1.);
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.05);
    assert!((var - 1.).abs() < 0.05);
}

#[test]
fn test_fork_children_are_bounded() {
    let mut generator = new_generator();
    let mut children = generator.try_fork(2, 16).unwrap();
    let mut child = children.next().unwrap();
    assert_eq!(child.remaining_bytes(), Some(16));
    for _ in 0..16 {
        child.generate_next();
    }
    assert_eq!(child.remaining_bytes(), Some(0));
}
