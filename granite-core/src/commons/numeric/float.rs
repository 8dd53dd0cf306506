use super::{CastFrom, CastInto, Numeric};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

/// A trait shared by all the floating point types.
pub trait FloatingPoint:
    Numeric
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Div<Self, Output = Self>
    + DivAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Rem<Self, Output = Self>
    + RemAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Neg<Output = Self>
    + CastFrom<f64>
    + CastInto<f64>
{
    /// Raise a value to an integer power.
    #[must_use]
    fn powi(self, power: i32) -> Self;

    /// Round the value to the closest integer.
    #[must_use]
    fn round(self) -> Self;

    /// Return the natural logarithm of the value.
    #[must_use]
    fn ln(self) -> Self;

    /// Return the square root of the value.
    #[must_use]
    fn sqrt(self) -> Self;
}

macro_rules! implement {
    ($Type: tt, $bits:expr) => {
        impl Numeric for $Type {
            const BITS: usize = $bits;
            const ZERO: Self = 0.;
            const ONE: Self = 1.;
            const TWO: Self = 2.;
            const MAX: Self = <$Type>::MAX;
        }

        impl FloatingPoint for $Type {
            #[inline]
            fn powi(self, power: i32) -> Self {
                self.powi(power)
            }
            #[inline]
            fn round(self) -> Self {
                self.round()
            }
            #[inline]
            fn ln(self) -> Self {
                self.ln()
            }
            #[inline]
            fn sqrt(self) -> Self {
                self.sqrt()
            }
        }
    };
}

implement!(f32, 32);
implement!(f64, 64);
