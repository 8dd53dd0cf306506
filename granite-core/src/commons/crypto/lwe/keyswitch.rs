use crate::commons::crypto::encoding::Plaintext;
use crate::commons::crypto::lwe::{LweCiphertext, LweList};
use crate::commons::crypto::secret::generators::EncryptionRandomGenerator;
use crate::commons::crypto::secret::LweSecretKey;
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::decomposition::SignedDecomposer;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::numeric::{Numeric, UnsignedInteger};
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{
    CiphertextCount, DecompositionBaseLog, DecompositionLevelCount, LweDimension, LweSize,
};
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// An LWE keyswitching key.
///
/// For each bit of the input key, the key contains `level` LWE encryptions under the output key
/// of that bit scaled by the successive powers of the decomposition basis. Blocks of `level`
/// ciphertexts are stored contiguously, levels in increasing order.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LweKeyswitchKey<C: Container> {
    data: C,
    decomp_base_log: DecompositionBaseLog,
    decomp_level_count: DecompositionLevelCount,
    output_lwe_size: LweSize,
}

impl<Scalar: Copy> LweKeyswitchKey<Vec<Scalar>> {
    /// Allocate a keyswitching key for the given dimensions, filled with `value`.
    pub fn allocate(
        value: Scalar,
        decomp_level_count: DecompositionLevelCount,
        decomp_base_log: DecompositionBaseLog,
        input_dimension: LweDimension,
        output_dimension: LweDimension,
    ) -> Self {
        let output_lwe_size = output_dimension.to_lwe_size();
        LweKeyswitchKey {
            data: vec![value; input_dimension.0 * decomp_level_count.0 * output_lwe_size.0],
            decomp_base_log,
            decomp_level_count,
            output_lwe_size,
        }
    }
}

impl<C: Container> LweKeyswitchKey<C> {
    /// Wrap a container into a keyswitching key.
    pub fn from_container(
        data: C,
        decomp_base_log: DecompositionBaseLog,
        decomp_level_count: DecompositionLevelCount,
        output_lwe_size: LweSize,
    ) -> Self {
        debug_assert_eq!(
            data.container_len() % (decomp_level_count.0 * output_lwe_size.0),
            0
        );
        LweKeyswitchKey {
            data,
            decomp_base_log,
            decomp_level_count,
            output_lwe_size,
        }
    }

    /// Return the logarithm of the base of the decomposition.
    pub fn decomposition_base_log(&self) -> DecompositionBaseLog {
        self.decomp_base_log
    }

    /// Return the number of levels of the decomposition.
    pub fn decomposition_level_count(&self) -> DecompositionLevelCount {
        self.decomp_level_count
    }

    /// Return the dimension of the input key.
    pub fn input_lwe_dimension(&self) -> LweDimension {
        LweDimension(
            self.data.container_len() / (self.decomp_level_count.0 * self.output_lwe_size.0),
        )
    }

    /// Return the dimension of the output key.
    pub fn output_lwe_dimension(&self) -> LweDimension {
        self.output_lwe_size.to_lwe_dimension()
    }

    // Returns an iterator over the blocks of `level` ciphertexts encrypting the same input key
    // bit, levels in increasing order.
    fn bit_decomp_iter(&self) -> impl DoubleEndedIterator<Item = LweList<&[C::Element]>> {
        let chunk_size = self.decomp_level_count.0 * self.output_lwe_size.0;
        let lwe_size = self.output_lwe_size;
        self.data
            .as_ref()
            .chunks_exact(chunk_size)
            .map(move |sub| LweList::from_container(sub, lwe_size))
    }

    fn bit_decomp_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = LweList<&mut [C::Element]>>
    where
        C: ContainerMut,
    {
        let chunk_size = self.decomp_level_count.0 * self.output_lwe_size.0;
        let lwe_size = self.output_lwe_size;
        self.data
            .as_mut()
            .chunks_exact_mut(chunk_size)
            .map(move |sub| LweList::from_container(sub, lwe_size))
    }
}

impl<C: ContainerMut> LweKeyswitchKey<C>
where
    C::Element: UnsignedTorus,
{
    /// Fill the key with an actual keyswitching key constructed from an input and an output key.
    pub fn fill_with_keyswitch_key<InKeyCont, OutKeyCont, Gen>(
        &mut self,
        before_key: &LweSecretKey<InKeyCont>,
        after_key: &LweSecretKey<OutKeyCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        InKeyCont: Container<Element = C::Element>,
        OutKeyCont: Container<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(before_key.key_size(), self.input_lwe_dimension());
        debug_assert_eq!(after_key.key_size(), self.output_lwe_dimension());

        let base_log = self.decomp_base_log;
        let level_count = self.decomp_level_count;

        for (mut block, key_bit) in self.bit_decomp_iter_mut().zip(before_key.as_ref().iter()) {
            // We encrypt the bit scaled by q/B^l for each level l, in increasing order.
            for (level, mut ciphertext) in (1..=level_count.0).zip(block.ciphertext_iter_mut()) {
                let message = Plaintext(
                    key_bit.wrapping_mul(
                        C::Element::ONE << (C::Element::BITS - base_log.0 * level),
                    ),
                );
                after_key.encrypt_lwe(&mut ciphertext, &message, noise_parameters, generator);
            }
        }
    }

    /// Keyswitch a single ciphertext from the input key to the output key.
    pub fn keyswitch_ciphertext<InCont, OutCont>(
        &self,
        after: &mut LweCiphertext<OutCont>,
        before: &LweCiphertext<InCont>,
    ) where
        InCont: Container<Element = C::Element>,
        OutCont: ContainerMut<Element = C::Element>,
    {
        debug_assert_eq!(
            before.lwe_size().to_lwe_dimension(),
            self.input_lwe_dimension()
        );
        debug_assert_eq!(after.lwe_size(), self.output_lwe_size);

        // We reset the output and copy the body of the input.
        after.fill_with_zero();
        let (after_body, _) = after.get_mut_body_and_mask();
        *after_body = *before.get_body();

        // We instantiate a decomposer.
        let decomposer = SignedDecomposer::new(self.decomp_base_log, self.decomp_level_count);

        let (_, before_mask) = before.get_body_and_mask();
        for (block, before_mask_element) in self.bit_decomp_iter().zip(before_mask.as_ref().iter())
        {
            // The decomposition iterator yields the highest level first, the blocks store the
            // levels in increasing order.
            let decomposition = decomposer.decompose(*before_mask_element);
            for (level_ciphertext, decomposed) in block.ciphertext_iter().rev().zip(decomposition)
            {
                after.update_with_wrapping_sub_scalar_mul(&level_ciphertext, decomposed.value());
            }
        }
    }

    /// Return the number of ciphertexts in the key.
    pub fn count(&self) -> CiphertextCount {
        CiphertextCount(self.data.container_len() / self.output_lwe_size.0)
    }
}

impl<C: Container> AsRef<[C::Element]> for LweKeyswitchKey<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for LweKeyswitchKey<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}
