use crate::commons::math::random::{Gaussian, RandomGenerable, Uniform, UniformBinary};
use concrete_csprng::generators::{BytesPerChild, ChildrenCount};

pub use concrete_csprng::generators::{ForkError, RandomGenerator as ByteRandomGenerator};
pub use concrete_csprng::seeders::{Seed, Seeder};

#[cfg(feature = "__commons_parallel")]
pub use concrete_csprng::generators::ParallelRandomGenerator as ParallelByteRandomGenerator;
#[cfg(feature = "__commons_parallel")]
use rayon::prelude::*;

/// A cryptographically secure random number generator.
///
/// This structure is a wrapper around the byte-level generators of `concrete-csprng`, which
/// gives them the ability to generate numeric values sampled from the distributions of this
/// module. The wrapped generator can be bounded: forking a generator yields children which can
/// only output a fixed number of bytes, which is what makes deterministic parallel generation
/// possible.
pub struct RandomGenerator<G: ByteRandomGenerator>(G);

impl<G: ByteRandomGenerator> RandomGenerator<G> {
    /// Create a new generator seeded with the given value.
    pub fn new(seed: Seed) -> RandomGenerator<G> {
        RandomGenerator(G::new(seed))
    }

    /// Return the number of bytes the generator can still output, if it is bounded.
    pub fn remaining_bytes(&self) -> Option<usize> {
        usize::try_from(self.0.remaining_bytes().0).ok()
    }

    /// Output the next byte of the stream.
    ///
    /// # Panics
    /// Panics if the generator is bounded and exhausted.
    pub fn generate_next(&mut self) -> u8 {
        self.0.next().expect("the csprng is exhausted")
    }

    /// Try to fork the generator into `n_child` children, each able to output `bytes_per_child`
    /// bytes.
    pub fn try_fork(
        &mut self,
        n_child: usize,
        bytes_per_child: usize,
    ) -> Result<impl Iterator<Item = RandomGenerator<G>>, ForkError> {
        self.0
            .try_fork(ChildrenCount(n_child), BytesPerChild(bytes_per_child))
            .map(|iter| iter.map(RandomGenerator))
    }

    /// Sample a value with uniform probability over the set of representable values.
    pub fn random_uniform<Scalar: RandomGenerable<Uniform>>(&mut self) -> Scalar {
        Scalar::generate_one(self, Uniform)
    }

    /// Fill a slice with values sampled with uniform probability.
    pub fn fill_slice_with_random_uniform<Scalar: RandomGenerable<Uniform>>(
        &mut self,
        output: &mut [Scalar],
    ) {
        Scalar::fill_slice(self, Uniform, output);
    }

    /// Sample a value with uniform probability over the `{0, 1}` set.
    pub fn random_uniform_binary<Scalar: RandomGenerable<UniformBinary>>(&mut self) -> Scalar {
        Scalar::generate_one(self, UniformBinary)
    }

    /// Fill a slice with values sampled with uniform probability over the `{0, 1}` set.
    pub fn fill_slice_with_random_uniform_binary<Scalar: RandomGenerable<UniformBinary>>(
        &mut self,
        output: &mut [Scalar],
    ) {
        Scalar::fill_slice(self, UniformBinary, output);
    }

    /// Fill a slice with values sampled from the gaussian distribution of the given mean and
    /// standard deviation.
    ///
    /// The sampler outputs pairs, hence the slice is filled two elements at a time.
    pub fn fill_slice_with_random_gaussian<Scalar>(
        &mut self,
        output: &mut [Scalar],
        mean: f64,
        std: f64,
    ) where
        Scalar: Copy,
        (Scalar, Scalar): RandomGenerable<Gaussian<f64>>,
    {
        output.chunks_mut(2).for_each(|s| {
            let (g1, g2) = <(Scalar, Scalar)>::generate_one(self, Gaussian { std, mean });
            if let Some(elem) = s.get_mut(0) {
                *elem = g1;
            }
            if let Some(elem) = s.get_mut(1) {
                *elem = g2;
            }
        });
    }
}

#[cfg(feature = "__commons_parallel")]
impl<G: ParallelByteRandomGenerator> RandomGenerator<G> {
    /// Try to fork the generator into `n_child` children, each able to output `bytes_per_child`
    /// bytes, returning a parallel iterator.
    pub fn par_try_fork(
        &mut self,
        n_child: usize,
        bytes_per_child: usize,
    ) -> Result<impl IndexedParallelIterator<Item = RandomGenerator<G>>, ForkError>
    where
        G: Send,
    {
        self.0
            .par_try_fork(ChildrenCount(n_child), BytesPerChild(bytes_per_child))
            .map(|iter| iter.map(RandomGenerator))
    }
}
