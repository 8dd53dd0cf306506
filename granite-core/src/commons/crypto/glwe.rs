//! GLWE encryption scheme.

use crate::commons::crypto::encoding::PlaintextList;
use crate::commons::crypto::lwe::LweCiphertext;
use crate::commons::math::polynomial::{Polynomial, PolynomialList};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{GlweSize, MonomialDegree, PolynomialSize};
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// A GLWE ciphertext.
///
/// The mask polynomials are stored first, the body is the last polynomial of the container.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlweCiphertext<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
}

pub type GlweCiphertextView<'a, Scalar> = GlweCiphertext<&'a [Scalar]>;
pub type GlweCiphertextMutView<'a, Scalar> = GlweCiphertext<&'a mut [Scalar]>;

impl<Scalar: Copy> GlweCiphertext<Vec<Scalar>> {
    /// Allocate a ciphertext whose scalars are all `value`.
    pub fn allocate(value: Scalar, polynomial_size: PolynomialSize, glwe_size: GlweSize) -> Self {
        GlweCiphertext {
            data: vec![value; polynomial_size.0 * glwe_size.0],
            polynomial_size,
        }
    }
}

impl<C: Container> GlweCiphertext<C> {
    /// Wrap a container into a ciphertext.
    pub fn from_container(data: C, polynomial_size: PolynomialSize) -> Self {
        debug_assert_eq!(data.container_len() % polynomial_size.0, 0);
        GlweCiphertext {
            data,
            polynomial_size,
        }
    }

    /// Return the size of the polynomials in the ciphertext.
    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    /// Return the size of the ciphertext, i.e. the glwe dimension plus one.
    pub fn glwe_size(&self) -> GlweSize {
        GlweSize(self.data.container_len() / self.polynomial_size.0)
    }

    /// Return a view over the list of polynomials of the ciphertext.
    pub fn as_polynomial_list(&self) -> PolynomialList<&[C::Element]> {
        PolynomialList::from_container(self.data.as_ref(), self.polynomial_size)
    }

    /// Return a mutable view over the list of polynomials of the ciphertext.
    pub fn as_mut_polynomial_list(&mut self) -> PolynomialList<&mut [C::Element]>
    where
        C: ContainerMut,
    {
        PolynomialList::from_container(self.data.as_mut(), self.polynomial_size)
    }

    /// Return the body polynomial together with a view over the mask polynomials.
    pub fn get_body_and_mask(
        &self,
    ) -> (Polynomial<&[C::Element]>, PolynomialList<&[C::Element]>) {
        let body_start = self.data.container_len() - self.polynomial_size.0;
        let (mask, body) = self.data.as_ref().split_at(body_start);
        (
            Polynomial::from_container(body),
            PolynomialList::from_container(mask, self.polynomial_size),
        )
    }

    /// Return the mutable body polynomial together with a mutable view over the mask
    /// polynomials.
    pub fn get_mut_body_and_mask(
        &mut self,
    ) -> (
        Polynomial<&mut [C::Element]>,
        PolynomialList<&mut [C::Element]>,
    )
    where
        C: ContainerMut,
    {
        let body_start = self.data.container_len() - self.polynomial_size.0;
        let (mask, body) = self.data.as_mut().split_at_mut(body_start);
        (
            Polynomial::from_container(body),
            PolynomialList::from_container(mask, self.polynomial_size),
        )
    }

    pub fn as_view(&self) -> GlweCiphertextView<'_, C::Element> {
        GlweCiphertext {
            data: self.data.as_ref(),
            polynomial_size: self.polynomial_size,
        }
    }

    pub fn as_mut_view(&mut self) -> GlweCiphertextMutView<'_, C::Element>
    where
        C: ContainerMut,
    {
        GlweCiphertext {
            data: self.data.as_mut(),
            polynomial_size: self.polynomial_size,
        }
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for GlweCiphertext<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for GlweCiphertext<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

impl<C: ContainerMut> GlweCiphertext<C>
where
    C::Element: UnsignedInteger,
{
    /// Fill the ciphertext with the trivial encryption of a list of plaintexts: a null mask,
    /// and the plaintexts copied in the body.
    ///
    /// A trivial encryption offers no security; it is the standard way of injecting public
    /// values (such as a lookup table) in a homomorphic computation.
    pub fn fill_with_trivial_encryption<InputCont>(&mut self, encoded: &PlaintextList<InputCont>)
    where
        InputCont: Container<Element = C::Element>,
    {
        debug_assert_eq!(encoded.count().0, self.polynomial_size.0);
        let (mut body, mut mask) = self.get_mut_body_and_mask();
        for mut mask_poly in mask.polynomial_iter_mut() {
            mask_poly.fill_with_zero();
        }
        body.as_mut().copy_from_slice(encoded.as_ref());
    }
}

impl<'a, Scalar: UnsignedInteger> GlweCiphertextView<'a, Scalar> {
    /// Fill an LWE ciphertext with the extraction of the `n_th` coefficient of the current GLWE
    /// ciphertext.
    ///
    /// The output LWE is encrypted under the flattened GLWE secret key, and decrypts to the
    /// `n_th` coefficient of the polynomial plaintext.
    pub fn fill_lwe_with_sample_extraction<OutputCont>(
        &self,
        lwe: &mut LweCiphertext<OutputCont>,
        n_th: MonomialDegree,
    ) where
        OutputCont: ContainerMut<Element = Scalar>,
    {
        let poly_size = self.polynomial_size.0;
        debug_assert!(n_th.0 < poly_size);
        debug_assert_eq!(
            lwe.lwe_size().to_lwe_dimension().0,
            poly_size * (self.glwe_size().0 - 1)
        );

        let (glwe_body, glwe_mask) = self.get_body_and_mask();
        let (lwe_body, mut lwe_mask) = lwe.get_mut_body_and_mask();

        // The body of the output lwe is the `n_th` coefficient of the glwe body.
        *lwe_body = glwe_body.as_ref()[n_th.0];

        // The mask is the reorganization of the glwe mask coefficients: for each mask
        // polynomial, the first `n_th + 1` coefficients are reversed, the remaining ones are
        // reversed and negated.
        for (mask_chunk, mask_poly) in lwe_mask
            .as_mut()
            .chunks_exact_mut(poly_size)
            .zip(glwe_mask.polynomial_iter())
        {
            mask_chunk.copy_from_slice(mask_poly.as_ref());
            mask_chunk[0..=n_th.0].reverse();
            mask_chunk[n_th.0 + 1..].reverse();
            for coef in mask_chunk[n_th.0 + 1..].iter_mut() {
                *coef = coef.wrapping_neg();
            }
        }
    }
}
