use crate::commons::math::random::{
    ByteRandomGenerator, RandomGenerable, RandomGenerator, Uniform,
};
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::numeric::{CastInto, FloatingPoint};

/// A distribution type representing random sampling of floating point numbers, following a
/// gaussian distribution.
#[derive(Debug, Copy, Clone)]
pub struct Gaussian<T: FloatingPoint> {
    /// The standard deviation of the distribution.
    pub std: T,
    /// The mean of the distribution.
    pub mean: T,
}

impl RandomGenerable<Gaussian<f64>> for (f64, f64) {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        Gaussian { std, mean }: Gaussian<f64>,
    ) -> Self {
        // Box-Muller, polar form, with rejection sampling.
        loop {
            let mut sample = || -> f64 {
                let uniform: i64 = i64::generate_one(generator, Uniform);
                let uniform: f64 = uniform.cast_into();
                // Brings the value back in [-1, 1).
                uniform * 2_f64.powi(-63)
            };
            let u = sample();
            let v = sample();
            let s = u.powi(2) + v.powi(2);
            if s > 0. && s < 1. {
                let cst = std * (-2. * s.ln() / s).sqrt();
                return (u * cst + mean, v * cst + mean);
            }
        }
    }
}

impl<Torus> RandomGenerable<Gaussian<f64>> for (Torus, Torus)
where
    Torus: UnsignedTorus,
{
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: Gaussian<f64>,
    ) -> Self {
        let (s1, s2) = <(f64, f64)>::generate_one(generator, distribution);
        (Torus::from_torus(s1), Torus::from_torus(s2))
    }
}

impl<Torus> RandomGenerable<Gaussian<f64>> for Torus
where
    Torus: UnsignedTorus,
{
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: Gaussian<f64>,
    ) -> Self {
        let (s1, _) = <(f64, f64)>::generate_one(generator, distribution);
        Torus::from_torus(s1)
    }
}
