use crate::commons::math::random::{ByteRandomGenerator, RandomGenerator, Seed, Seeder};

/// A seeder which expands a root seed into an arbitrary number of seeds, deterministically.
///
/// Engines own one of those, built from the user-provided seeder at construction time: every
/// generator the engine creates afterwards is seeded from this object, which makes the whole
/// sequence of operations of an engine reproducible from a single root seed.
pub struct DeterministicSeeder<G: ByteRandomGenerator>(RandomGenerator<G>);

impl<G: ByteRandomGenerator> DeterministicSeeder<G> {
    /// Create a new seeder from a root seed.
    pub fn new(seed: Seed) -> DeterministicSeeder<G> {
        DeterministicSeeder(RandomGenerator::new(seed))
    }
}

impl<G: ByteRandomGenerator> Seeder for DeterministicSeeder<G> {
    fn seed(&mut self) -> Seed {
        let mut bytes = [0u8; 16];
        for byte in bytes.iter_mut() {
            *byte = self.0.generate_next();
        }
        Seed(u128::from_le_bytes(bytes))
    }

    fn is_available() -> bool {
        true
    }
}
