use crate::commons::crypto::bootstrap::StandardBootstrapKey;
use crate::commons::crypto::secret::generators::{
    DeterministicSeeder, EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::crypto::secret::{GlweSecretKey, LweSecretKey};
use crate::commons::dispersion::StandardDev;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, GlweDimension, LweDimension, PolynomialSize,
};
use crate::commons::test_tools::{any_usize, random_usize_between};
use concrete_csprng::generators::SoftwareRandomGenerator;
use concrete_csprng::seeders::Seed;

#[cfg(feature = "__commons_parallel")]
fn test_bsk_gen_equivalence<T: UnsignedTorus + Send + Sync>() {
    for _ in 0..10 {
        let lwe_dim = LweDimension(random_usize_between(5..10));
        let glwe_dim = GlweDimension(random_usize_between(2..4));
        let poly_size = PolynomialSize(random_usize_between(5..10));
        let level = DecompositionLevelCount(random_usize_between(2..5));
        let base_log = DecompositionBaseLog(random_usize_between(2..5));
        let mask_seed = Seed(any_usize() as u128);
        let noise_seed = Seed(any_usize() as u128);

        let mut secret_generator = SecretRandomGenerator::<SoftwareRandomGenerator>::new(Seed(
            any_usize() as u128,
        ));
        let lwe_sk: LweSecretKey<Vec<T>> =
            LweSecretKey::generate_binary(lwe_dim, &mut secret_generator);
        let glwe_sk: GlweSecretKey<Vec<T>> =
            GlweSecretKey::generate_binary(glwe_dim, poly_size, &mut secret_generator);

        let mut sequential_bsk = StandardBootstrapKey::allocate(
            T::ZERO,
            glwe_dim.to_glwe_size(),
            poly_size,
            level,
            base_log,
            lwe_dim,
        );
        let mut encryption_generator =
            EncryptionRandomGenerator::<SoftwareRandomGenerator>::new(
                mask_seed,
                &mut DeterministicSeeder::<SoftwareRandomGenerator>::new(noise_seed),
            );
        sequential_bsk.fill_with_new_key(
            &lwe_sk,
            &glwe_sk,
            StandardDev::from_standard_dev(10.),
            &mut encryption_generator,
        );

        let mut parallel_bsk = StandardBootstrapKey::allocate(
            T::ZERO,
            glwe_dim.to_glwe_size(),
            poly_size,
            level,
            base_log,
            lwe_dim,
        );
        let mut encryption_generator =
            EncryptionRandomGenerator::<SoftwareRandomGenerator>::new(
                mask_seed,
                &mut DeterministicSeeder::<SoftwareRandomGenerator>::new(noise_seed),
            );
        parallel_bsk.par_fill_with_new_key(
            &lwe_sk,
            &glwe_sk,
            StandardDev::from_standard_dev(10.),
            &mut encryption_generator,
        );

        assert_eq!(sequential_bsk, parallel_bsk);
    }
}

#[cfg(feature = "__commons_parallel")]
#[test]
fn test_bsk_gen_equivalence_u32() {
    test_bsk_gen_equivalence::<u32>()
}

#[cfg(feature = "__commons_parallel")]
#[test]
fn test_bsk_gen_equivalence_u64() {
    test_bsk_gen_equivalence::<u64>()
}

fn test_bsk_dimensions<T: UnsignedTorus>() {
    let bsk = StandardBootstrapKey::allocate(
        T::ZERO,
        GlweDimension(2).to_glwe_size(),
        PolynomialSize(32),
        DecompositionLevelCount(3),
        DecompositionBaseLog(5),
        LweDimension(12),
    );
    assert_eq!(bsk.key_size(), LweDimension(12));
    assert_eq!(bsk.output_lwe_dimension(), LweDimension(64));
    assert_eq!(bsk.ggsw_iter().count(), 12);
}

#[test]
fn test_bsk_dimensions_u32() {
    test_bsk_dimensions::<u32>()
}

#[test]
fn test_bsk_dimensions_u64() {
    test_bsk_dimensions::<u64>()
}
