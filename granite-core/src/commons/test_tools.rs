//! Helpers shared by the unit tests of the commons modules.

use crate::commons::crypto::secret::generators::{
    DeterministicSeeder, EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::{RandomGenerator, Seed};
use crate::commons::math::torus::UnsignedTorus;
use concrete_csprng::generators::SoftwareRandomGenerator;
use rand::Rng;
use std::ops::Range;

pub fn any_usize() -> usize {
    rand::thread_rng().gen()
}

pub fn random_usize_between(range: Range<usize>) -> usize {
    rand::thread_rng().gen_range(range)
}

pub fn random_seed() -> Seed {
    Seed(rand::thread_rng().gen())
}

pub fn new_random_generator() -> RandomGenerator<SoftwareRandomGenerator> {
    RandomGenerator::new(random_seed())
}

pub fn new_secret_random_generator() -> SecretRandomGenerator<SoftwareRandomGenerator> {
    SecretRandomGenerator::new(random_seed())
}

pub fn new_encryption_random_generator() -> EncryptionRandomGenerator<SoftwareRandomGenerator> {
    EncryptionRandomGenerator::new(
        random_seed(),
        &mut DeterministicSeeder::<SoftwareRandomGenerator>::new(random_seed()),
    )
}

/// Assert that the elements of two slices are at most a few standard deviations apart, when
/// seen as torus elements.
pub fn assert_delta_std_dev<T: UnsignedTorus>(
    first: &[T],
    second: &[T],
    dist: impl DispersionParameter,
) {
    for (x, y) in first.iter().zip(second.iter()) {
        let distance = x.wrapping_sub(*y).into_torus().abs();
        assert!(
            distance <= 5. * dist.get_standard_dev(),
            "{distance} is not within 5 standard deviations ({})",
            dist.get_standard_dev()
        );
    }
}
