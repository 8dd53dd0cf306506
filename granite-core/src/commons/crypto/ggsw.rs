//! GGSW encryption scheme.

use crate::commons::crypto::glwe::GlweCiphertext;
use crate::commons::math::polynomial::PolynomialList;
use crate::commons::parameters::{
    DecompositionBaseLog, DecompositionLevel, DecompositionLevelCount, GlweSize, PolynomialSize,
};
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// A GGSW ciphertext in the standard domain.
///
/// The ciphertext is a sequence of level matrices, one per decomposition level (levels in
/// increasing order), each matrix being `glwe_size` GLWE ciphertexts.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardGgswCiphertext<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
    glwe_size: GlweSize,
    decomp_base_log: DecompositionBaseLog,
}

impl<Scalar: Copy> StandardGgswCiphertext<Vec<Scalar>> {
    /// Allocate a ciphertext whose scalars are all `value`.
    pub fn allocate(
        value: Scalar,
        polynomial_size: PolynomialSize,
        glwe_size: GlweSize,
        decomp_level_count: DecompositionLevelCount,
        decomp_base_log: DecompositionBaseLog,
    ) -> Self {
        StandardGgswCiphertext {
            data: vec![value; decomp_level_count.0 * glwe_size.0 * glwe_size.0 * polynomial_size.0],
            polynomial_size,
            glwe_size,
            decomp_base_log,
        }
    }
}

impl<C: Container> StandardGgswCiphertext<C> {
    /// Wrap a container into a ciphertext.
    pub fn from_container(
        data: C,
        polynomial_size: PolynomialSize,
        glwe_size: GlweSize,
        decomp_base_log: DecompositionBaseLog,
    ) -> Self {
        debug_assert_eq!(
            data.container_len() % (glwe_size.0 * glwe_size.0 * polynomial_size.0),
            0
        );
        StandardGgswCiphertext {
            data,
            polynomial_size,
            glwe_size,
            decomp_base_log,
        }
    }

    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    pub fn glwe_size(&self) -> GlweSize {
        self.glwe_size
    }

    pub fn decomposition_base_log(&self) -> DecompositionBaseLog {
        self.decomp_base_log
    }

    pub fn decomposition_level_count(&self) -> DecompositionLevelCount {
        DecompositionLevelCount(
            self.data.container_len()
                / (self.glwe_size.0 * self.glwe_size.0 * self.polynomial_size.0),
        )
    }

    /// Return a view over the list of all the polynomials of the ciphertext.
    pub fn as_polynomial_list(&self) -> PolynomialList<&[C::Element]> {
        PolynomialList::from_container(self.data.as_ref(), self.polynomial_size)
    }

    /// Return an iterator over the level matrices, levels in increasing order.
    pub fn level_matrix_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = GgswLevelMatrix<&[C::Element]>> {
        let chunk_size = self.glwe_size.0 * self.glwe_size.0 * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        let glwe_size = self.glwe_size;
        self.data
            .as_ref()
            .chunks_exact(chunk_size)
            .enumerate()
            .map(move |(index, sub)| {
                GgswLevelMatrix::from_container(
                    sub,
                    polynomial_size,
                    glwe_size,
                    DecompositionLevel(index + 1),
                )
            })
    }

    /// Return an iterator over mutably borrowed level matrices, levels in increasing order.
    pub fn level_matrix_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = GgswLevelMatrix<&mut [C::Element]>>
    where
        C: ContainerMut,
    {
        let chunk_size = self.glwe_size.0 * self.glwe_size.0 * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        let glwe_size = self.glwe_size;
        self.data
            .as_mut()
            .chunks_exact_mut(chunk_size)
            .enumerate()
            .map(move |(index, sub)| {
                GgswLevelMatrix::from_container(
                    sub,
                    polynomial_size,
                    glwe_size,
                    DecompositionLevel(index + 1),
                )
            })
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for StandardGgswCiphertext<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for StandardGgswCiphertext<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

/// A matrix containing a single level of the gadget decomposition of a GGSW ciphertext.
#[derive(Debug, PartialEq, Eq)]
pub struct GgswLevelMatrix<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
    glwe_size: GlweSize,
    level: DecompositionLevel,
}

impl<C: Container> GgswLevelMatrix<C> {
    pub fn from_container(
        data: C,
        polynomial_size: PolynomialSize,
        glwe_size: GlweSize,
        level: DecompositionLevel,
    ) -> Self {
        debug_assert_eq!(
            data.container_len(),
            glwe_size.0 * glwe_size.0 * polynomial_size.0
        );
        GgswLevelMatrix {
            data,
            polynomial_size,
            glwe_size,
            level,
        }
    }

    pub fn glwe_size(&self) -> GlweSize {
        self.glwe_size
    }

    pub fn decomposition_level(&self) -> DecompositionLevel {
        self.level
    }

    /// Return an iterator over the rows of the matrix, viewed as GLWE ciphertexts.
    pub fn row_iter(&self) -> impl DoubleEndedIterator<Item = GlweCiphertext<&[C::Element]>> {
        let row_size = self.glwe_size.0 * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        self.data
            .as_ref()
            .chunks_exact(row_size)
            .map(move |sub| GlweCiphertext::from_container(sub, polynomial_size))
    }

    /// Return an iterator over the mutably borrowed rows of the matrix.
    pub fn row_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = GlweCiphertext<&mut [C::Element]>>
    where
        C: ContainerMut,
    {
        let row_size = self.glwe_size.0 * self.polynomial_size.0;
        let polynomial_size = self.polynomial_size;
        self.data
            .as_mut()
            .chunks_exact_mut(row_size)
            .map(move |sub| GlweCiphertext::from_container(sub, polynomial_size))
    }
}
