//! A module containing polynomials of modular integers, in the
//! $\mathbb{Z}\_q\[X\]/(X^N + 1)$ ring.

use crate::commons::numeric::{Numeric, UnsignedInteger};
use crate::commons::parameters::{MonomialDegree, PolynomialCount, PolynomialSize};
use crate::commons::traits::{Container, ContainerMut};
use crate::commons::utils::izip;

/// A dense polynomial, whose coefficients are stored from the constant term up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<C: Container> {
    data: C,
}

pub type PolynomialView<'a, Scalar> = Polynomial<&'a [Scalar]>;
pub type PolynomialMutView<'a, Scalar> = Polynomial<&'a mut [Scalar]>;

impl<Scalar: Copy> Polynomial<Vec<Scalar>> {
    /// Allocate a polynomial whose coefficients are all `value`.
    pub fn allocate(value: Scalar, poly_size: PolynomialSize) -> Self {
        Polynomial {
            data: vec![value; poly_size.0],
        }
    }
}

impl<C: Container> Polynomial<C> {
    /// Wrap a container into a polynomial.
    pub fn from_container(data: C) -> Self {
        Polynomial { data }
    }

    /// Return the number of coefficients of the polynomial.
    pub fn polynomial_size(&self) -> PolynomialSize {
        PolynomialSize(self.data.container_len())
    }

    pub fn as_view(&self) -> PolynomialView<'_, C::Element> {
        Polynomial {
            data: self.data.as_ref(),
        }
    }

    pub fn as_mut_view(&mut self) -> PolynomialMutView<'_, C::Element>
    where
        C: ContainerMut,
    {
        Polynomial {
            data: self.data.as_mut(),
        }
    }

    pub fn into_container(self) -> C {
        self.data
    }
}

impl<C: Container> AsRef<[C::Element]> for Polynomial<C> {
    fn as_ref(&self) -> &[C::Element] {
        self.data.as_ref()
    }
}

impl<C: ContainerMut> AsMut<[C::Element]> for Polynomial<C> {
    fn as_mut(&mut self) -> &mut [C::Element] {
        self.data.as_mut()
    }
}

impl<C: ContainerMut> Polynomial<C>
where
    C::Element: UnsignedInteger,
{
    /// Fill the polynomial with zeros.
    pub fn fill_with_zero(&mut self) {
        self.data.as_mut().fill(C::Element::ZERO);
    }

    /// Add the negacyclic product of `lhs` and `rhs` to the polynomial, coefficient-wise
    /// modulo $2^q$ and polynomial-wise modulo $X^N + 1$.
    ///
    /// Textbook quadratic product, which is all the standard domain needs: the hot path goes
    /// through the Fourier domain instead.
    pub fn update_with_wrapping_add_mul<LhsCont, RhsCont>(
        &mut self,
        lhs: &Polynomial<LhsCont>,
        rhs: &Polynomial<RhsCont>,
    ) where
        LhsCont: Container<Element = C::Element>,
        RhsCont: Container<Element = C::Element>,
    {
        let poly_size = self.polynomial_size().0;
        debug_assert_eq!(lhs.polynomial_size().0, poly_size);
        debug_assert_eq!(rhs.polynomial_size().0, poly_size);
        let output = self.data.as_mut();
        for (i, lhs_coef) in lhs.as_ref().iter().enumerate() {
            for (j, rhs_coef) in rhs.as_ref().iter().enumerate() {
                let product = lhs_coef.wrapping_mul(*rhs_coef);
                if i + j < poly_size {
                    output[i + j] = output[i + j].wrapping_add(product);
                } else {
                    output[i + j - poly_size] = output[i + j - poly_size].wrapping_sub(product);
                }
            }
        }
    }

    /// Subtract the negacyclic product of `lhs` and `rhs` from the polynomial.
    pub fn update_with_wrapping_sub_mul<LhsCont, RhsCont>(
        &mut self,
        lhs: &Polynomial<LhsCont>,
        rhs: &Polynomial<RhsCont>,
    ) where
        LhsCont: Container<Element = C::Element>,
        RhsCont: Container<Element = C::Element>,
    {
        let poly_size = self.polynomial_size().0;
        debug_assert_eq!(lhs.polynomial_size().0, poly_size);
        debug_assert_eq!(rhs.polynomial_size().0, poly_size);
        let output = self.data.as_mut();
        for (i, lhs_coef) in lhs.as_ref().iter().enumerate() {
            for (j, rhs_coef) in rhs.as_ref().iter().enumerate() {
                let product = lhs_coef.wrapping_mul(*rhs_coef);
                if i + j < poly_size {
                    output[i + j] = output[i + j].wrapping_sub(product);
                } else {
                    output[i + j - poly_size] = output[i + j - poly_size].wrapping_add(product);
                }
            }
        }
    }

    /// Multiply the polynomial by $X^{degree}$, in the $\mathbb{Z}\_q\[X\]/(X^N + 1)$ ring.
    pub fn update_with_wrapping_monic_monomial_mul(&mut self, degree: MonomialDegree) {
        let poly_size = self.polynomial_size().0;
        let full_cycles = degree.0 / poly_size;
        let remaining = degree.0 % poly_size;
        let coefs = self.data.as_mut();
        if full_cycles % 2 == 1 {
            for coef in coefs.iter_mut() {
                *coef = coef.wrapping_neg();
            }
        }
        coefs.rotate_right(remaining);
        for coef in coefs[..remaining].iter_mut() {
            *coef = coef.wrapping_neg();
        }
    }

    /// Divide the polynomial by $X^{degree}$, in the $\mathbb{Z}\_q\[X\]/(X^N + 1)$ ring.
    pub fn update_with_wrapping_unit_monomial_div(&mut self, degree: MonomialDegree) {
        let poly_size = self.polynomial_size().0;
        let full_cycles = degree.0 / poly_size;
        let remaining = degree.0 % poly_size;
        let coefs = self.data.as_mut();
        if full_cycles % 2 == 1 {
            for coef in coefs.iter_mut() {
                *coef = coef.wrapping_neg();
            }
        }
        coefs.rotate_left(remaining);
        for coef in coefs[poly_size - remaining..].iter_mut() {
            *coef = coef.wrapping_neg();
        }
    }

    /// Add another polynomial to the polynomial, coefficient-wise modulo $2^q$.
    pub fn update_with_wrapping_add<OtherCont>(&mut self, other: &Polynomial<OtherCont>)
    where
        OtherCont: Container<Element = C::Element>,
    {
        for (coef, other_coef) in izip!(self.data.as_mut(), other.as_ref()) {
            *coef = coef.wrapping_add(*other_coef);
        }
    }
}

/// A contiguous list of polynomials, all of the same size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialList<C: Container> {
    data: C,
    polynomial_size: PolynomialSize,
}

impl<C: Container> PolynomialList<C> {
    /// Wrap a container into a polynomial list.
    pub fn from_container(data: C, polynomial_size: PolynomialSize) -> Self {
        debug_assert_eq!(data.container_len() % polynomial_size.0, 0);
        PolynomialList {
            data,
            polynomial_size,
        }
    }

    pub fn polynomial_size(&self) -> PolynomialSize {
        self.polynomial_size
    }

    pub fn polynomial_count(&self) -> PolynomialCount {
        PolynomialCount(self.data.container_len() / self.polynomial_size.0)
    }

    /// Return an iterator over borrowed polynomials.
    pub fn polynomial_iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = PolynomialView<'_, C::Element>> {
        self.data
            .as_ref()
            .chunks_exact(self.polynomial_size.0)
            .map(Polynomial::from_container)
    }

    /// Return an iterator over mutably borrowed polynomials.
    pub fn polynomial_iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = PolynomialMutView<'_, C::Element>>
    where
        C: ContainerMut,
    {
        self.data
            .as_mut()
            .chunks_exact_mut(self.polynomial_size.0)
            .map(Polynomial::from_container)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::parameters::{MonomialDegree, PolynomialSize};

    #[test]
    fn test_monic_monomial_mul_wraps_negacyclically() {
        // (1 + 2X) * X = -2 + X  in Z[X]/(X^2 + 1)
        let mut poly = Polynomial::from_container(vec![1u64, 2]);
        poly.update_with_wrapping_monic_monomial_mul(MonomialDegree(1));
        assert_eq!(poly.as_ref(), &[2u64.wrapping_neg(), 1]);
    }

    #[test]
    fn test_monomial_mul_div_roundtrip() {
        let mut poly = Polynomial::from_container(vec![1u64, 2, 3, 4]);
        let expected = poly.clone();
        poly.update_with_wrapping_monic_monomial_mul(MonomialDegree(7));
        poly.update_with_wrapping_unit_monomial_div(MonomialDegree(7));
        assert_eq!(poly, expected);
    }

    #[test]
    fn test_add_mul_matches_full_product_reduction() {
        // (1 + X)(1 + X) = 1 + 2X + X^2 = 2X  in Z[X]/(X^2 + 1)
        let lhs = Polynomial::from_container(vec![1u64, 1]);
        let rhs = Polynomial::from_container(vec![1u64, 1]);
        let mut out = Polynomial::allocate(0u64, PolynomialSize(2));
        out.update_with_wrapping_add_mul(&lhs, &rhs);
        assert_eq!(out.as_ref(), &[0u64, 2]);
    }
}
