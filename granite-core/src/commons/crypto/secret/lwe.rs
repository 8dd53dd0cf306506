use crate::commons::crypto::encoding::{Plaintext, PlaintextList};
use crate::commons::crypto::lwe::{LweCiphertext, LweList};
use crate::commons::crypto::secret::generators::{
    EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::numeric::{Numeric, UnsignedInteger};
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::LweDimension;
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// An LWE secret key.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LweSecretKey<C: Container> {
    data: C,
}

impl<Scalar> LweSecretKey<Vec<Scalar>>
where
    Scalar: UnsignedTorus,
{
    /// Generate a new binary secret key; e.g. allocate a storage and sample random values for
    /// the key.
    pub fn generate_binary<Gen: ByteRandomGenerator>(
        size: LweDimension,
        generator: &mut SecretRandomGenerator<Gen>,
    ) -> Self {
        let mut data = vec![Scalar::ZERO; size.0];
        generator.fill_slice_with_random_binary(&mut data);
        LweSecretKey { data }
    }
}

impl<C: Container> LweSecretKey<C> {
    /// Create an lwe secret key from a container.
    ///
    /// # Notes
    ///
    /// This method does not fill the container with random values to create a new key. It
    /// merely wraps a container into the appropriate type.
    pub fn from_container(data: C) -> Self {
        LweSecretKey { data }
    }

    /// Return the size of the secret key.
    pub fn key_size(&self) -> LweDimension {
        LweDimension(self.data.container_len())
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for LweSecretKey<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: Container> LweSecretKey<C>
where
    C::Element: UnsignedTorus,
{
    /// Encrypt a single ciphertext.
    pub fn encrypt_lwe<OutputCont, Gen>(
        &self,
        output: &mut LweCiphertext<OutputCont>,
        encoded: &Plaintext<C::Element>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(output.lwe_size().to_lwe_dimension(), self.key_size());
        let (output_body, mut output_mask) = output.get_mut_body_and_mask();

        // generate a uniformly random mask
        generator.fill_slice_with_random_mask(output_mask.as_mut());
        // generate an error from the normal distribution described by std_dev
        *output_body = generator.random_noise(noise_parameters);
        // compute the multisum between the secret key and the mask
        *output_body = output_body.wrapping_add(output_mask.compute_multisum(self.as_ref()));
        // add the encoded message
        *output_body = output_body.wrapping_add(encoded.0);
    }

    /// Encrypt a list of ciphertexts.
    pub fn encrypt_lwe_list<OutputCont, InputCont, Gen>(
        &self,
        output: &mut LweList<OutputCont>,
        encoded: &PlaintextList<InputCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        InputCont: Container<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(
            output.count().0,
            encoded.count().0,
            "Lwe cipher list size and encoded list size are not compatible"
        );
        for (mut cipher, message) in output.ciphertext_iter_mut().zip(encoded.plaintext_iter()) {
            self.encrypt_lwe(&mut cipher, &Plaintext(*message), noise_parameters, generator);
        }
    }

    /// Decrypt a single ciphertext.
    pub fn decrypt_lwe<CipherCont>(
        &self,
        output: &mut Plaintext<C::Element>,
        cipher: &LweCiphertext<CipherCont>,
    ) where
        CipherCont: Container<Element = C::Element>,
    {
        debug_assert_eq!(cipher.lwe_size().to_lwe_dimension(), self.key_size());
        let (body, mask) = cipher.get_body_and_mask();
        // put body inside result
        output.0 = *body;
        // subtract the multisum between the key and the mask
        output.0 = output.0.wrapping_sub(mask.compute_multisum(self.as_ref()));
    }

    /// Decrypt a list of ciphertexts.
    pub fn decrypt_lwe_list<OutputCont, CipherCont>(
        &self,
        output: &mut PlaintextList<OutputCont>,
        cipher: &LweList<CipherCont>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        CipherCont: Container<Element = C::Element>,
    {
        debug_assert_eq!(
            output.count().0,
            cipher.count().0,
            "Tried to decrypt a list into one with incompatible size"
        );
        for (cipher, output) in cipher.ciphertext_iter().zip(output.plaintext_iter_mut()) {
            let mut decrypted = Plaintext(C::Element::ZERO);
            self.decrypt_lwe(&mut decrypted, &cipher);
            *output = decrypted.0;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::dispersion::LogStandardDev;
    use crate::commons::parameters::{CiphertextCount, LweDimension, PlaintextCount};
    use crate::commons::test_tools::{
        assert_delta_std_dev, new_encryption_random_generator, new_secret_random_generator,
    };

    fn test_encrypt_decrypt_noise_level<T: UnsignedTorus>() {
        let mut secret_generator = new_secret_random_generator();
        let mut encryption_generator = new_encryption_random_generator();
        let noise = LogStandardDev::from_log_standard_dev(-15.);
        let key: LweSecretKey<Vec<T>> =
            LweSecretKey::generate_binary(LweDimension(630), &mut secret_generator);

        let count = CiphertextCount(100);
        let mut plaintexts = PlaintextList::allocate(T::ZERO, PlaintextCount(count.0));
        for (i, plaintext) in plaintexts.plaintext_iter_mut().enumerate() {
            *plaintext = T::cast_from(i as u128) << (T::BITS - 8);
        }
        let mut ciphertexts = LweList::allocate(T::ZERO, key.key_size().to_lwe_size(), count);
        key.encrypt_lwe_list(
            &mut ciphertexts,
            &plaintexts,
            noise,
            &mut encryption_generator,
        );

        let mut decrypted = PlaintextList::allocate(T::ZERO, PlaintextCount(count.0));
        key.decrypt_lwe_list(&mut decrypted, &ciphertexts);

        assert_delta_std_dev(plaintexts.as_ref(), decrypted.as_ref(), noise);
    }

    #[test]
    fn test_encrypt_decrypt_noise_level_u32() {
        test_encrypt_decrypt_noise_level::<u32>();
    }

    #[test]
    fn test_encrypt_decrypt_noise_level_u64() {
        test_encrypt_decrypt_noise_level::<u64>();
    }
}
