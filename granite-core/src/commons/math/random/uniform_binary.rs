use crate::commons::math::random::{ByteRandomGenerator, RandomGenerable, RandomGenerator};
use crate::commons::numeric::UnsignedInteger;

/// A distribution type representing uniform sampling for binary values.
#[derive(Debug, Copy, Clone)]
pub struct UniformBinary;

impl<T: UnsignedInteger> RandomGenerable<UniformBinary> for T {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        _distribution: UniformBinary,
    ) -> Self {
        if generator.generate_next() & 1 == 1 {
            T::ONE
        } else {
            T::ZERO
        }
    }
}
