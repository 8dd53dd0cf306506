//! The random generators used to produce secret keys and encryptions.

mod encryption;
pub use encryption::EncryptionRandomGenerator;

mod secret;
pub use secret::SecretRandomGenerator;

mod seeder;
pub use seeder::DeterministicSeeder;
