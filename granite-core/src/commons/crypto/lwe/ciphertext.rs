use crate::commons::numeric::{Numeric, UnsignedInteger};
use crate::commons::parameters::{LweDimension, LweSize};
use crate::commons::traits::{Container, ContainerMut};
use crate::commons::utils::izip;
#[cfg(feature = "__commons_serialization")]
use serde::{Deserialize, Serialize};

/// An LWE ciphertext.
///
/// The mask coefficients are stored first, the body is the last scalar of the container.
#[cfg_attr(feature = "__commons_serialization", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LweCiphertext<C: Container> {
    data: C,
}

impl<Scalar: Copy> LweCiphertext<Vec<Scalar>> {
    /// Allocate a ciphertext whose scalars are all `value`.
    pub fn allocate(value: Scalar, size: LweSize) -> Self {
        LweCiphertext {
            data: vec![value; size.0],
        }
    }
}

impl<C: Container> LweCiphertext<C> {
    /// Wrap a container into a ciphertext.
    pub fn from_container(data: C) -> Self {
        debug_assert!(!data.as_ref().is_empty());
        LweCiphertext { data }
    }

    /// Return the size of the ciphertext, i.e. the lwe dimension plus one.
    pub fn lwe_size(&self) -> LweSize {
        LweSize(self.data.container_len())
    }

    /// Return the body of the ciphertext together with a view over its mask.
    pub fn get_body_and_mask(&self) -> (&C::Element, LweMask<&[C::Element]>) {
        let (body, mask) = self.data.as_ref().split_last().unwrap();
        (body, LweMask { data: mask })
    }

    /// Return the body of the ciphertext.
    pub fn get_body(&self) -> &C::Element {
        self.get_body_and_mask().0
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: ContainerMut> LweCiphertext<C> {
    /// Return the mutable body of the ciphertext together with a mutable view over its mask.
    pub fn get_mut_body_and_mask(&mut self) -> (&mut C::Element, LweMask<&mut [C::Element]>) {
        let (body, mask) = self.data.as_mut().split_last_mut().unwrap();
        (body, LweMask { data: mask })
    }
}

impl<C: Container> AsRef<[C::Element]> for LweCiphertext<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for LweCiphertext<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

impl<C: ContainerMut> LweCiphertext<C>
where
    C::Element: UnsignedInteger,
{
    /// Fill the ciphertext with zeros.
    pub fn fill_with_zero(&mut self) {
        self.data.as_mut().fill(C::Element::ZERO);
    }

    /// Fill the ciphertext with the sum of two others.
    pub fn fill_with_add<Lhs, Rhs>(&mut self, lhs: &LweCiphertext<Lhs>, rhs: &LweCiphertext<Rhs>)
    where
        Lhs: Container<Element = C::Element>,
        Rhs: Container<Element = C::Element>,
    {
        for (out, (left, right)) in izip!(self.data.as_mut(), izip!(lhs.as_ref(), rhs.as_ref())) {
            *out = left.wrapping_add(*right);
        }
    }

    /// Fill the ciphertext with the product of another one and a cleartext.
    pub fn fill_with_scalar_mul<InputCont>(
        &mut self,
        input: &LweCiphertext<InputCont>,
        scalar: C::Element,
    ) where
        InputCont: Container<Element = C::Element>,
    {
        for (out, element) in izip!(self.data.as_mut(), input.as_ref()) {
            *out = element.wrapping_mul(scalar);
        }
    }

    /// Fill the ciphertext with the opposite of another one.
    pub fn fill_with_neg<InputCont>(&mut self, input: &LweCiphertext<InputCont>)
    where
        InputCont: Container<Element = C::Element>,
    {
        for (out, element) in izip!(self.data.as_mut(), input.as_ref()) {
            *out = element.wrapping_neg();
        }
    }

    /// Add another ciphertext to the ciphertext.
    pub fn update_with_add<InputCont>(&mut self, other: &LweCiphertext<InputCont>)
    where
        InputCont: Container<Element = C::Element>,
    {
        for (out, element) in izip!(self.data.as_mut(), other.as_ref()) {
            *out = out.wrapping_add(*element);
        }
    }

    /// Subtract another ciphertext from the ciphertext.
    pub fn update_with_sub<InputCont>(&mut self, other: &LweCiphertext<InputCont>)
    where
        InputCont: Container<Element = C::Element>,
    {
        for (out, element) in izip!(self.data.as_mut(), other.as_ref()) {
            *out = out.wrapping_sub(*element);
        }
    }

    /// Multiply the ciphertext by a cleartext, in place.
    pub fn update_with_scalar_mul(&mut self, scalar: C::Element) {
        for out in self.data.as_mut().iter_mut() {
            *out = out.wrapping_mul(scalar);
        }
    }

    /// Subtract `scalar` times another ciphertext from the ciphertext.
    pub fn update_with_wrapping_sub_scalar_mul<InputCont>(
        &mut self,
        other: &LweCiphertext<InputCont>,
        scalar: C::Element,
    ) where
        InputCont: Container<Element = C::Element>,
    {
        for (out, element) in izip!(self.data.as_mut(), other.as_ref()) {
            *out = out.wrapping_sub(element.wrapping_mul(scalar));
        }
    }
}

/// The mask of an LWE ciphertext.
#[derive(Debug, PartialEq, Eq)]
pub struct LweMask<C: Container> {
    pub(crate) data: C,
}

impl<C: Container> LweMask<C> {
    /// Wrap a container into a mask.
    pub fn from_container(data: C) -> Self {
        LweMask { data }
    }

    /// Return the number of mask coefficients, i.e. the lwe dimension.
    pub fn mask_size(&self) -> LweDimension {
        LweDimension(self.data.container_len())
    }
}

impl<C: Container> LweMask<C>
where
    C::Element: UnsignedInteger,
{
    /// Compute the dot product between the mask and a secret key.
    pub fn compute_multisum(&self, key: &[C::Element]) -> C::Element {
        izip!(self.data.as_ref(), key).fold(C::Element::ZERO, |acc, (mask, key)| {
            acc.wrapping_add(mask.wrapping_mul(*key))
        })
    }
}

impl<C: Container> AsRef<[C::Element]> for LweMask<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for LweMask<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}
