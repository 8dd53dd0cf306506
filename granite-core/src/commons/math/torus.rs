//! A module containing the conversions between unsigned integers and the real torus.
//!
//! The unsigned integer types are used to represent elements of the real torus
//! $\mathbb{T} = \mathbb{R}/\mathbb{Z}$: the value $v \in [0, 2^q)$ of a `uq` integer represents
//! the torus element $v \cdot 2^{-q}$. Sampling errors (which are real values) and converting to
//! and from the Fourier domain both need to move between the two representations.

use crate::commons::math::random::{RandomGenerable, Uniform};
use crate::commons::numeric::{CastFrom, CastInto, UnsignedInteger};

/// A trait for unsigned integer types used as torus element representations.
pub trait UnsignedTorus:
    UnsignedInteger + CastFrom<usize> + CastInto<usize> + RandomGenerable<Uniform>
{
    /// Consume a real value in $[-0.5, 0.5)$ (taken modulo 1) into the closest torus element.
    fn from_torus(input: f64) -> Self;
    /// Return the representation of `self` as a real value in $[-0.5, 0.5)$.
    fn into_torus(self) -> f64;
}

macro_rules! implement {
    ($Type: ty) => {
        impl UnsignedTorus for $Type {
            #[inline]
            fn from_torus(input: f64) -> Self {
                // Reduce to [-0.5, 0.5), scale to the integer range and round. The cast goes
                // through the signed type so that negative values wrap instead of saturating.
                let fract = input - input.round();
                let scaled = (fract * 2_f64.powi(Self::BITS as i32)).round();
                Self::cast_from(<Self as UnsignedInteger>::Signed::cast_from(scaled))
            }

            #[inline]
            fn into_torus(self) -> f64 {
                let signed: f64 = self.into_signed().cast_into();
                signed * 2_f64.powi(-(Self::BITS as i32))
            }
        }
    };
}

implement!(u32);
implement!(u64);

#[cfg(test)]
mod test {
    use super::*;

    fn test_torus_roundtrip<T: UnsignedTorus>() {
        for val in [0.0_f64, 0.25, -0.25, 0.125, -0.125, 0.4999] {
            let torus = T::from_torus(val);
            let back = torus.into_torus();
            assert!((back - val).abs() < 2_f64.powi(-(T::BITS as i32) + 1));
        }
    }

    #[test]
    fn test_torus_roundtrip_u32() {
        test_torus_roundtrip::<u32>();
    }

    #[test]
    fn test_torus_roundtrip_u64() {
        test_torus_roundtrip::<u64>();
    }

    #[test]
    fn test_from_torus_wraps_negative() {
        assert_eq!(u32::from_torus(-0.25), 3 << 30);
        assert_eq!(u64::from_torus(0.25), 1 << 62);
    }
}
