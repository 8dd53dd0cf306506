//! Bootstrapping keys in the standard domain.

use crate::commons::crypto::encoding::Plaintext;
use crate::commons::crypto::ggsw::StandardGgswCiphertext;
use crate::commons::crypto::secret::generators::EncryptionRandomGenerator;
use crate::commons::crypto::secret::{GlweSecretKey, LweSecretKey};
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevelCount, GlweSize, LweDimension, PolynomialSize,
};
use crate::commons::traits::{Container, ContainerMut};
use crate::commons::utils::izip;
#[cfg(feature = "__commons_parallel")]
use crate::commons::math::random::ParallelByteRandomGenerator;
#[cfg(feature = "__commons_parallel")]
use rayon::prelude::*;
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A bootstrapping key in the standard domain: one GGSW ciphertext per bit of the input LWE
/// secret key, each encrypted under the output GLWE secret key.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardBootstrapKey<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
    glwe_size: GlweSize,
    decomp_level_count: DecompositionLevelCount,
    decomp_base_log: DecompositionBaseLog,
}

impl<Scalar: Copy> StandardBootstrapKey<Vec<Scalar>> {
    /// Allocate a bootstrapping key whose scalars are all `value`.
    pub fn allocate(
        value: Scalar,
        glwe_size: GlweSize,
        polynomial_size: PolynomialSize,
        decomp_level_count: DecompositionLevelCount,
        decomp_base_log: DecompositionBaseLog,
        key_size: LweDimension,
    ) -> Self {
        StandardBootstrapKey {
            data: vec![
                value;
                key_size.0
                    * decomp_level_count.0
                    * glwe_size.0
                    * glwe_size.0
                    * polynomial_size.0
            ],
            polynomial_size,
            glwe_size,
            decomp_level_count,
            decomp_base_log,
        }
    }
}

impl<C: Container> StandardBootstrapKey<C> {
    /// Wrap a container into a bootstrapping key.
    pub fn from_container(
        data: C,
        glwe_size: GlweSize,
        polynomial_size: PolynomialSize,
        decomp_level_count: DecompositionLevelCount,
        decomp_base_log: DecompositionBaseLog,
    ) -> Self {
        debug_assert_eq!(
            data.container_len()
                % (decomp_level_count.0 * glwe_size.0 * glwe_size.0 * polynomial_size.0),
            0
        );
        StandardBootstrapKey {
            data,
            polynomial_size,
            glwe_size,
            decomp_level_count,
            decomp_base_log,
        }
    }

    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    pub fn glwe_size(&self) -> GlweSize {
        self.glwe_size
    }

    pub fn decomposition_level_count(&self) -> DecompositionLevelCount {
        self.decomp_level_count
    }

    pub fn decomposition_base_log(&self) -> DecompositionBaseLog {
        self.decomp_base_log
    }

    /// Return the dimension of the input LWE secret key, i.e. the number of GGSW ciphertexts
    /// in the key.
    pub fn key_size(&self) -> LweDimension {
        LweDimension(
            self.data.container_len()
                / (self.decomp_level_count.0
                    * self.glwe_size.0
                    * self.glwe_size.0
                    * self.polynomial_size.0),
        )
    }

    /// Return the dimension of the LWE ciphertexts produced by the bootstrap, i.e. the
    /// dimension of the flattened output GLWE secret key.
    pub fn output_lwe_dimension(&self) -> LweDimension {
        LweDimension(self.glwe_size.to_glwe_dimension().0 * self.polynomial_size.0)
    }

    /// Return an iterator over the GGSW ciphertexts of the key.
    pub fn ggsw_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = StandardGgswCiphertext<&[C::Element]>> {
        let chunk_size = self.decomp_level_count.0
            * self.glwe_size.0
            * self.glwe_size.0
            * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        let glwe_size = self.glwe_size;
        let base_log = self.decomp_base_log;
        self.data
            .as_ref()
            .chunks_exact(chunk_size)
            .map(move |sub| {
                StandardGgswCiphertext::from_container(sub, polynomial_size, glwe_size, base_log)
            })
    }

    /// Return an iterator over the mutably borrowed GGSW ciphertexts of the key.
    pub fn ggsw_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = StandardGgswCiphertext<&mut [C::Element]>>
    where
        C: ContainerMut,
    {
        let chunk_size = self.decomp_level_count.0
            * self.glwe_size.0
            * self.glwe_size.0
            * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        let glwe_size = self.glwe_size;
        let base_log = self.decomp_base_log;
        self.data
            .as_mut()
            .chunks_exact_mut(chunk_size)
            .map(move |sub| {
                StandardGgswCiphertext::from_container(sub, polynomial_size, glwe_size, base_log)
            })
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for StandardBootstrapKey<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for StandardBootstrapKey<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

impl<C: ContainerMut> StandardBootstrapKey<C>
where
    C::Element: UnsignedTorus,
{
    /// Fill the key with an actual bootstrapping key constructed from an input LWE secret key
    /// and an output GLWE secret key.
    ///
    /// The encryption generator is forked once per GGSW ciphertext, with the same byte budgets
    /// as the parallel variant: given identical seeding, `fill_with_new_key` and
    /// `par_fill_with_new_key` produce identical keys.
    pub fn fill_with_new_key<InKeyCont, OutKeyCont, Gen>(
        &mut self,
        lwe_secret_key: &LweSecretKey<InKeyCont>,
        glwe_secret_key: &GlweSecretKey<OutKeyCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        InKeyCont: Container<Element = C::Element>,
        OutKeyCont: Container<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(self.key_size(), lwe_secret_key.key_size());
        debug_assert_eq!(self.glwe_size().to_glwe_dimension(), glwe_secret_key.key_size());
        debug_assert_eq!(self.polynomial_size(), glwe_secret_key.polynomial_size());

        let gen_iter = generator
            .fork_bsk_to_ggsw::<C::Element>(
                self.key_size(),
                self.decomp_level_count,
                self.glwe_size,
                self.polynomial_size,
            )
            .expect("failed to fork the bsk generator");

        for ((mut ggsw, sk_scalar), mut generator) in
            izip!(self.ggsw_iter_mut(), lwe_secret_key.as_ref()).zip(gen_iter)
        {
            let encoded = Plaintext(*sk_scalar);
            glwe_secret_key.encrypt_constant_ggsw(
                &mut ggsw,
                &encoded,
                noise_parameters,
                &mut generator,
            );
        }
    }

    /// Fill the key with an actual bootstrapping key, using all the threads of the rayon pool.
    ///
    /// See [`Self::fill_with_new_key`] for the determinism contract.
    #[cfg(feature = "__commons_parallel")]
    pub fn par_fill_with_new_key<InKeyCont, OutKeyCont, Gen>(
        &mut self,
        lwe_secret_key: &LweSecretKey<InKeyCont>,
        glwe_secret_key: &GlweSecretKey<OutKeyCont>,
        noise_parameters: impl DispersionParameter + Sync,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        InKeyCont: Container<Element = C::Element> + Sync,
        OutKeyCont: Container<Element = C::Element> + Sync,
        C::Element: Send + Sync,
        Gen: ParallelByteRandomGenerator + Send,
    {
        debug_assert_eq!(self.key_size(), lwe_secret_key.key_size());
        debug_assert_eq!(self.glwe_size().to_glwe_dimension(), glwe_secret_key.key_size());
        debug_assert_eq!(self.polynomial_size(), glwe_secret_key.polynomial_size());

        let chunk_size = self.decomp_level_count.0
            * self.glwe_size.0
            * self.glwe_size.0
            * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        let glwe_size = self.glwe_size;
        let base_log = self.decomp_base_log;

        let gen_iter = generator
            .par_fork_bsk_to_ggsw::<C::Element>(
                self.key_size(),
                self.decomp_level_count,
                self.glwe_size,
                self.polynomial_size,
            )
            .expect("failed to fork the bsk generator");

        self.data
            .as_mut()
            .par_chunks_exact_mut(chunk_size)
            .zip(lwe_secret_key.as_ref().par_iter())
            .zip(gen_iter)
            .for_each(|((chunk, sk_scalar), mut generator)| {
                let mut ggsw = StandardGgswCiphertext::from_container(
                    chunk,
                    polynomial_size,
                    glwe_size,
                    base_log,
                );
                let encoded = Plaintext(*sk_scalar);
                glwe_secret_key.encrypt_constant_ggsw(
                    &mut ggsw,
                    &encoded,
                    noise_parameters,
                    &mut generator,
                );
            });
    }
}
