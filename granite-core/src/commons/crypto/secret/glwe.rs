use crate::commons::crypto::encoding::{Plaintext, PlaintextList};
use crate::commons::crypto::ggsw::StandardGgswCiphertext;
use crate::commons::crypto::glwe::GlweCiphertext;
use crate::commons::crypto::secret::generators::{
    EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::crypto::secret::LweSecretKey;
use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::polynomial::PolynomialList;
use crate::commons::math::random::ByteRandomGenerator;
use crate::commons::numeric::{Numeric, UnsignedInteger};
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::{GlweDimension, PolynomialSize};
use crate::commons::traits::{Container, ContainerMut};
use crate::commons::utils::izip;
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// A GLWE secret key.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlweSecretKey<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
}

impl<Scalar> GlweSecretKey<Vec<Scalar>>
where
    Scalar: UnsignedTorus,
{
    /// Generate a new binary secret key; e.g. allocate a storage and sample random values for
    /// the key.
    pub fn generate_binary<Gen: ByteRandomGenerator>(
        dimension: GlweDimension,
        polynomial_size: PolynomialSize,
        generator: &mut SecretRandomGenerator<Gen>,
    ) -> Self {
        let mut data = vec![Scalar::ZERO; dimension.0 * polynomial_size.0];
        generator.fill_slice_with_random_binary(&mut data);
        GlweSecretKey {
            data,
            polynomial_size,
        }
    }
}

impl<C: Container> GlweSecretKey<C> {
    /// Create a glwe secret key from a container.
    ///
    /// # Notes
    ///
    /// This method does not fill the container with random values to create a new key. It
    /// merely wraps a container into the appropriate type.
    pub fn from_container(data: C, polynomial_size: PolynomialSize) -> Self {
        debug_assert_eq!(data.container_len() % polynomial_size.0, 0);
        GlweSecretKey {
            data,
            polynomial_size,
        }
    }

    /// Return the dimension of the key.
    pub fn key_size(&self) -> GlweDimension {
        GlweDimension(self.data.container_len() / self.polynomial_size.0)
    }

    /// Return the size of the polynomials of the key.
    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    /// Return a view over the list of polynomials of the key.
    pub fn as_polynomial_list(&self) -> PolynomialList<&[C::Element]> {
        PolynomialList::from_container(self.data.as_ref(), self.polynomial_size)
    }

    /// Return a view over the key, seen as an LWE secret key of dimension
    /// `key_size * polynomial_size`.
    ///
    /// This is the key under which the sample extraction of a GLWE ciphertext is encrypted.
    pub fn as_lwe_secret_key(&self) -> LweSecretKey<&[C::Element]> {
        LweSecretKey::from_container(self.data.as_ref())
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for GlweSecretKey<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: Container> GlweSecretKey<C>
where
    C::Element: UnsignedTorus,
{
    /// Encrypt a ciphertext whose body already contains the encoded plaintext.
    ///
    /// The mask is filled with fresh uniform values, and the body receives the noise and the
    /// multisum with the key.
    pub fn encrypt_glwe_assign<OutputCont, Gen>(
        &self,
        output: &mut GlweCiphertext<OutputCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(output.glwe_size().to_glwe_dimension(), self.key_size());
        debug_assert_eq!(output.polynomial_size(), self.polynomial_size);

        let (mut body, mut mask) = output.get_mut_body_and_mask();

        // generate a uniformly random mask
        for mut mask_poly in mask.polynomial_iter_mut() {
            generator.fill_slice_with_random_mask(mask_poly.as_mut());
        }

        // add the error from the normal distribution described by std_dev
        let mut noise = vec![C::Element::ZERO; self.polynomial_size.0];
        generator.fill_slice_with_random_noise(&mut noise, noise_parameters);
        for (body_coef, noise_coef) in izip!(body.as_mut(), &noise) {
            *body_coef = body_coef.wrapping_add(*noise_coef);
        }

        // add the multisum between the secret key and the mask
        let key_poly_list = self.as_polynomial_list();
        for (mask_poly, key_poly) in mask.polynomial_iter().zip(key_poly_list.polynomial_iter()) {
            body.update_with_wrapping_add_mul(&mask_poly, &key_poly);
        }
    }

    /// Encrypt a list of plaintexts in a fresh ciphertext.
    pub fn encrypt_glwe<OutputCont, InputCont, Gen>(
        &self,
        output: &mut GlweCiphertext<OutputCont>,
        encoded: &PlaintextList<InputCont>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        InputCont: Container<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(encoded.count().0, self.polynomial_size.0);
        {
            let (mut body, _) = output.get_mut_body_and_mask();
            body.as_mut().copy_from_slice(encoded.as_ref());
        }
        self.encrypt_glwe_assign(output, noise_parameters, generator);
    }

    /// Decrypt a single ciphertext.
    pub fn decrypt_glwe<OutputCont, CipherCont>(
        &self,
        output: &mut PlaintextList<OutputCont>,
        cipher: &GlweCiphertext<CipherCont>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        CipherCont: Container<Element = C::Element>,
    {
        debug_assert_eq!(output.count().0, self.polynomial_size.0);
        debug_assert_eq!(cipher.glwe_size().to_glwe_dimension(), self.key_size());

        let (body, mask) = cipher.get_body_and_mask();
        output.as_mut().copy_from_slice(body.as_ref());
        let mut output_poly =
            crate::commons::math::polynomial::Polynomial::from_container(output.as_mut());
        let key_poly_list = self.as_polynomial_list();
        for (mask_poly, key_poly) in mask.polynomial_iter().zip(key_poly_list.polynomial_iter()) {
            output_poly.update_with_wrapping_sub_mul(&mask_poly, &key_poly);
        }
    }

    /// Encrypt a GGSW ciphertext containing a constant (degree zero) polynomial message.
    ///
    /// The row of index `j` of the level matrix of index `l` receives a GLWE encryption of
    /// $-m \cdot s\_j \cdot q/B^{l+1}$, the last row a GLWE encryption of $m \cdot q/B^{l+1}$
    /// at the constant coefficient.
    pub fn encrypt_constant_ggsw<OutputCont, Gen>(
        &self,
        encrypted: &mut StandardGgswCiphertext<OutputCont>,
        encoded: &Plaintext<C::Element>,
        noise_parameters: impl DispersionParameter,
        generator: &mut EncryptionRandomGenerator<Gen>,
    ) where
        OutputCont: ContainerMut<Element = C::Element>,
        Gen: ByteRandomGenerator,
    {
        debug_assert_eq!(encrypted.glwe_size().to_glwe_dimension(), self.key_size());
        debug_assert_eq!(encrypted.polynomial_size(), self.polynomial_size);

        let base_log = encrypted.decomposition_base_log();
        let polynomial_size = self.polynomial_size;
        let key_poly_list = self.as_polynomial_list();

        for mut level_matrix in encrypted.level_matrix_iter_mut() {
            let level = level_matrix.decomposition_level();
            // q/B^l times the negated message
            let factor = encoded
                .0
                .wrapping_neg()
                .wrapping_mul(C::Element::ONE << (C::Element::BITS - base_log.0 * level.0));

            let last_row_index = level_matrix.glwe_size().0 - 1;
            for (row_index, mut row) in level_matrix.row_iter_mut().enumerate() {
                {
                    let (mut body, _) = row.get_mut_body_and_mask();
                    if row_index < last_row_index {
                        // The body is seeded with the factor times the matching key polynomial.
                        let key_poly = key_poly_list.polynomial_iter().nth(row_index).unwrap();
                        for (body_coef, key_coef) in izip!(body.as_mut(), key_poly.as_ref()) {
                            *body_coef = key_coef.wrapping_mul(factor);
                        }
                    } else {
                        // The last row encrypts the message itself at the constant coefficient.
                        body.as_mut().fill(C::Element::ZERO);
                        body.as_mut()[0] = factor.wrapping_neg();
                    }
                }
                debug_assert_eq!(row.polynomial_size(), polynomial_size);
                self.encrypt_glwe_assign(&mut row, noise_parameters, generator);
            }
        }
    }
}
