//! Plaintexts and cleartexts.
//!
//! A *cleartext* is a raw message, as produced or consumed by the user of the library. A
//! *plaintext* is a message encoded on the torus, ready to be encrypted. Moving from one to the
//! other is the job of an encoding, which is a deliberately trivial shift in the operations
//! exposed here: the interesting encodings live above this layer.

use crate::commons::parameters::{CleartextCount, PlaintextCount};
use crate::commons::traits::{Container, ContainerMut};
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// An encoded message, ready to be encrypted.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plaintext<T>(pub T);

/// A contiguous list of plaintexts.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextList<C: Container> {
    data: C,
}

impl<Scalar: Copy> PlaintextList<Vec<Scalar>> {
    /// Allocate a list of `count` plaintexts, all equal to `value`.
    pub fn allocate(value: Scalar, count: PlaintextCount) -> Self {
        PlaintextList {
            data: vec![value; count.0],
        }
    }
}

impl<C: Container> PlaintextList<C> {
    /// Wrap a container into a plaintext list.
    pub fn from_container(data: C) -> Self {
        PlaintextList { data }
    }

    /// Return the number of plaintexts in the list.
    pub fn count(&self) -> PlaintextCount {
        PlaintextCount(self.data.container_len())
    }

    pub fn plaintext_iter(&self) -> impl DoubleEndedIterator<Item = &C::Element> {
        self.data.as_ref().iter()
    }

    pub fn plaintext_iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut C::Element>
    where
        C: ContainerMut,
    {
        self.data.as_mut().iter_mut()
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for PlaintextList<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for PlaintextList<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

/// A raw message, not encoded on the torus.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleartext<T>(pub T);

/// A contiguous list of cleartexts.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleartextList<C: Container> {
    data: C,
}

impl<Scalar: Copy> CleartextList<Vec<Scalar>> {
    /// Allocate a list of `count` cleartexts, all equal to `value`.
    pub fn allocate(value: Scalar, count: CleartextCount) -> Self {
        CleartextList {
            data: vec![value; count.0],
        }
    }
}

impl<C: Container> CleartextList<C> {
    /// Wrap a container into a cleartext list.
    pub fn from_container(data: C) -> Self {
        CleartextList { data }
    }

    /// Return the number of cleartexts in the list.
    pub fn count(&self) -> CleartextCount {
        CleartextCount(self.data.container_len())
    }

    pub fn cleartext_iter(&self) -> impl DoubleEndedIterator<Item = &C::Element> {
        self.data.as_ref().iter()
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for CleartextList<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}
