use crate::commons::crypto::lwe::LweCiphertext;
use crate::commons::parameters::{CiphertextCount, LweSize};
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// A contiguous list of LWE ciphertexts, all of the same size.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LweList<C: Container> {
    data: C,
    lwe_size: LweSize,
}

impl<Scalar: Copy> LweList<Vec<Scalar>> {
    /// Allocate a list of `count` ciphertexts whose scalars are all `value`.
    pub fn allocate(value: Scalar, lwe_size: LweSize, count: CiphertextCount) -> Self {
        LweList {
            data: vec![value; lwe_size.0 * count.0],
            lwe_size,
        }
    }
}

impl<C: Container> LweList<C> {
    /// Wrap a container into a ciphertext list.
    pub fn from_container(data: C, lwe_size: LweSize) -> Self {
        debug_assert_eq!(data.container_len() % lwe_size.0, 0);
        LweList { data, lwe_size }
    }

    /// Return the size of the ciphertexts in the list.
    pub fn lwe_size(&self) -> LweSize {
        self.lwe_size
    }

    /// Return the number of ciphertexts in the list.
    pub fn count(&self) -> CiphertextCount {
        CiphertextCount(self.data.container_len() / self.lwe_size.0)
    }

    /// Return an iterator over borrowed ciphertexts.
    pub fn ciphertext_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = LweCiphertext<&[C::Element]>> {
        self.data
            .as_ref()
            .chunks_exact(self.lwe_size.0)
            .map(LweCiphertext::from_container)
    }

    /// Return an iterator over mutably borrowed ciphertexts.
    pub fn ciphertext_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = LweCiphertext<&mut [C::Element]>>
    where
        C: ContainerMut,
    {
        let lwe_size = self.lwe_size.0;
        self.data
            .as_mut()
            .chunks_exact_mut(lwe_size)
            .map(LweCiphertext::from_container)
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for LweList<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for LweList<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}
